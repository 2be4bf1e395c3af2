pub mod core;
pub mod players;
