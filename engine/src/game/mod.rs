mod rng;
mod snake;
mod state;
mod types;

pub use rng::GameRng;
pub use snake::{SPAWN_LENGTH, Snake};
pub use state::{GameSnapshot, GameState};
pub use types::{Direction, EndReason, GamePhase, GridSize, Point};
