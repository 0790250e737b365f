pub mod config;
pub mod defaults;
pub mod game;
pub mod highscore;
pub mod logger;
