use engine::config::Validate;
use engine::defaults::{
    DEFAULT_CELL_SIZE_PX, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_HIGH_SCORE_FILE,
    DEFAULT_SCORE_REWARD, DEFAULT_TICK_RATE,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub cell_size_px: u32,
    pub tick_rate: u32,
    pub score_reward: u32,
    pub high_score_file: String,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.grid_width < 10 || self.grid_width > 100 {
            return Err("grid_width must be between 10 and 100".to_string());
        }
        if self.grid_height < 10 || self.grid_height > 100 {
            return Err("grid_height must be between 10 and 100".to_string());
        }
        if self.cell_size_px < 4 || self.cell_size_px > 64 {
            return Err("cell_size_px must be between 4 and 64".to_string());
        }
        if self.tick_rate < 1 || self.tick_rate > 60 {
            return Err("tick_rate must be between 1 and 60".to_string());
        }
        if self.score_reward == 0 {
            return Err("score_reward must be greater than 0".to_string());
        }
        if self.high_score_file.is_empty() {
            return Err("high_score_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            cell_size_px: DEFAULT_CELL_SIZE_PX,
            tick_rate: DEFAULT_TICK_RATE,
            score_reward: DEFAULT_SCORE_REWARD,
            high_score_file: DEFAULT_HIGH_SCORE_FILE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::config::ConfigStore;

    fn temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("snake_arcade_client_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_round_trips_through_store() {
        let store: ConfigStore<GameConfig> = ConfigStore::from_yaml_file(&temp_file_path());
        let config = GameConfig::default();
        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap(), config);
    }

    #[test]
    fn test_missing_file_yields_default() {
        let store: ConfigStore<GameConfig> = ConfigStore::from_yaml_file(&temp_file_path());
        assert_eq!(store.load().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_out_of_range_grid_is_rejected() {
        let config = GameConfig {
            grid_width: 5,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_tick_rate_is_rejected() {
        let config = GameConfig {
            tick_rate: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_file_content_fails_load() {
        let path = temp_file_path();
        std::fs::write(
            &path,
            "grid_width: 5\ngrid_height: 30\ncell_size_px: 20\ntick_rate: 15\nscore_reward: 10\nhigh_score_file: highscore.txt\n",
        )
        .unwrap();
        let store: ConfigStore<GameConfig> = ConfigStore::from_yaml_file(&path);
        assert!(store.load().is_err());
    }
}
