pub mod donate;
pub mod leaderboard;
pub mod rewards;
pub mod server;
pub mod user;
