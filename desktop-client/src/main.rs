mod config;
mod game_loop;
mod game_ui;
mod state;

use std::path::Path;
use std::time::Duration;

use clap::Parser;
use eframe::egui;
use tokio::sync::mpsc;

use engine::config::ConfigStore;
use engine::game::{GameRng, GameState, GridSize};
use engine::highscore::HighScoreStore;
use engine::{log, logger};

use config::GameConfig;
use game_loop::run_game_loop;
use game_ui::GameApp;
use state::SharedState;

const CONFIG_FILE_NAME: &str = "snake_arcade_config.yaml";

#[derive(Parser)]
#[command(name = "snake_arcade")]
struct Args {
    /// Path to the YAML config file
    #[arg(long)]
    config: Option<String>,

    /// Food placement seed, random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger(None);

    let config_path = args.config.unwrap_or_else(|| CONFIG_FILE_NAME.to_string());
    let config_store: ConfigStore<GameConfig> = ConfigStore::from_yaml_file(&config_path);
    if !Path::new(&config_path).exists() {
        config_store.save(&GameConfig::default())?;
        log!("Wrote default config to {}", config_path);
    }
    let config = config_store.load()?;

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_random(),
    };
    log!("Food placement seed: {}", rng.seed());

    let grid = GridSize {
        width: config.grid_width,
        height: config.grid_height,
    };
    let high_score_store = HighScoreStore::new(config.high_score_file.clone());
    let game_state = GameState::new(grid, config.score_reward, high_score_store, rng);

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let tick_interval = Duration::from_millis(1000 / config.tick_rate as u64);
    let shared_state_clone = shared_state.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(run_game_loop(
            game_state,
            shared_state_clone,
            command_rx,
            tick_interval,
        ));
    });

    let canvas_width = (config.grid_width as u32 * config.cell_size_px) as f32;
    let canvas_height = (config.grid_height as u32 * config.cell_size_px) as f32;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas_width + 24.0, canvas_height + 110.0])
            .with_title("Snake Game"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake Game",
        options,
        Box::new(|_cc| {
            Ok(Box::new(GameApp::new(
                shared_state,
                command_tx,
                config.cell_size_px,
            )))
        }),
    )?;

    Ok(())
}
