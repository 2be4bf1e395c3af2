use super::player::Player;
use tokio::sync::mpsc;
use tracing::warn;

/// Receives the winner of a finished round
pub trait ScoreReporter {
    fn record_win(&mut self, player: &Player);
}

/// Forwards the winner's id to whoever owns the receiving end.
impl ScoreReporter for mpsc::UnboundedSender<i64> {
    fn record_win(&mut self, player: &Player) {
        if self.send(player.id).is_err() {
            warn!(player_id = player.id, "Score recorder is gone, win not saved");
        }
    }
}

/// Drops every report; for rounds nobody keeps score of
pub struct NoScore;

impl ScoreReporter for NoScore {
    fn record_win(&mut self, _player: &Player) {}
}
