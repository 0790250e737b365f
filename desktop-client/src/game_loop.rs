use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::interval;

use engine::game::GameState;
use engine::log;

use crate::state::{GameCommand, SharedState};

pub async fn run_game_loop(
    mut game_state: GameState,
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<GameCommand>,
    tick_interval: Duration,
) {
    let mut ticker = interval(tick_interval);
    shared_state.set_snapshot(game_state.snapshot());

    loop {
        ticker.tick().await;

        // Drain everything queued since the last tick; for directional
        // intents the last valid one wins.
        while let Ok(command) = command_rx.try_recv() {
            match command {
                GameCommand::Turn { direction } => game_state.set_direction(direction),
                GameCommand::TogglePause => game_state.toggle_pause(),
                GameCommand::Reset => game_state.reset(),
                GameCommand::Quit => {
                    log!("Quit requested, stopping game loop");
                    shared_state.set_should_close();
                    return;
                }
            }
        }

        game_state.step();
        shared_state.set_snapshot(game_state.snapshot());
    }
}
