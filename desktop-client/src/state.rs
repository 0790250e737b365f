use std::sync::{Arc, Mutex};

use engine::game::{Direction, GameSnapshot};

#[derive(Debug, Clone, Copy)]
pub enum GameCommand {
    Turn { direction: Direction },
    TogglePause,
    Reset,
    Quit,
}

pub struct SharedState {
    snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    should_close: Arc<Mutex<bool>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(None)),
            should_close: Arc::new(Mutex::new(false)),
        }
    }

    pub fn set_snapshot(&self, snapshot: GameSnapshot) {
        *self.snapshot.lock().unwrap() = Some(snapshot);
    }

    pub fn snapshot(&self) -> Option<GameSnapshot> {
        self.snapshot.lock().unwrap().clone()
    }

    pub fn set_should_close(&self) {
        *self.should_close.lock().unwrap() = true;
    }

    pub fn should_close(&self) -> bool {
        *self.should_close.lock().unwrap()
    }
}

impl Clone for SharedState {
    fn clone(&self) -> Self {
        Self {
            snapshot: Arc::clone(&self.snapshot),
            should_close: Arc::clone(&self.should_close),
        }
    }
}
