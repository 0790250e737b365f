use std::io::ErrorKind;

use crate::warn;

/// Persists the high score as a single decimal number in a text file.
#[derive(Clone, Debug)]
pub struct HighScoreStore {
    file_path: String,
}

impl HighScoreStore {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }

    /// A missing file or unreadable record degrades to 0; a new round must
    /// never be blocked by the high-score file.
    pub fn load(&self) -> u32 {
        let content = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    warn!("Failed to read high score file: {}", err);
                }
                return 0;
            }
        };

        match content.trim().parse::<u32>() {
            Ok(value) => value,
            Err(_) => {
                warn!("Ignoring malformed high score record: {:?}", content.trim());
                0
            }
        }
    }

    pub fn save(&self, value: u32) -> Result<(), String> {
        std::fs::write(&self.file_path, value.to_string())
            .map_err(|e| format!("Failed to write high score file: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("snake_arcade_store_{}.txt", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_load_missing_file_returns_zero() {
        let store = HighScoreStore::new(temp_file_path());
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_load_malformed_content_returns_zero() {
        let path = temp_file_path();
        std::fs::write(&path, "not a number").unwrap();
        let store = HighScoreStore::new(path);
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = HighScoreStore::new(temp_file_path());
        store.save(120).unwrap();
        assert_eq!(store.load(), 120);
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let store = HighScoreStore::new(temp_file_path());
        store.save(50).unwrap();
        store.save(70).unwrap();
        assert_eq!(store.load(), 70);
    }

    #[test]
    fn test_load_tolerates_trailing_whitespace() {
        let path = temp_file_path();
        std::fs::write(&path, "42\n").unwrap();
        let store = HighScoreStore::new(path);
        assert_eq!(store.load(), 42);
    }
}
