use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use crate::games::tictactoe::{DEFAULT_BOARD_SIZE, MAX_EXHAUSTIVE_BOARD_SIZE, Mark, Strategy};
use super::Validate;

pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 5;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct EngineConfig {
    pub board_size: usize,
    pub strategy: Strategy,
    pub bot_mark: Mark,
    #[serde(default)]
    pub search_depth: Option<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn human_mark(&self) -> Mark {
        self.bot_mark.opposite()
    }

    pub fn create_rng(&self) -> SessionRng {
        match self.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < MIN_BOARD_SIZE || self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "Board size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            ));
        }
        if self.bot_mark == Mark::Empty {
            return Err("Bot mark must be X or O".to_string());
        }
        if self.search_depth == Some(0) {
            return Err("search_depth must be at least 1 when set".to_string());
        }
        if self.strategy == Strategy::Minimax
            && self.search_depth.is_none()
            && self.board_size > MAX_EXHAUSTIVE_BOARD_SIZE
        {
            return Err(format!(
                "Minimax on a {0}x{0} board requires search_depth",
                self.board_size
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            strategy: Strategy::Random,
            bot_mark: Mark::O,
            search_depth: None,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigContentProvider, ConfigManager, ConfigSerializer, FileContentConfigProvider,
        MemoryConfigProvider, YamlConfigSerializer,
    };

    fn get_temp_file_path() -> std::path::PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_engine_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = EngineConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: EngineConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_serialized_and_deserialized_file() {
        let config = EngineConfig {
            strategy: Strategy::RuleBased,
            seed: Some(42),
            ..EngineConfig::default()
        };
        let file_path = get_temp_file_path();

        let manager: ConfigManager<FileContentConfigProvider, EngineConfig> =
            ConfigManager::from_yaml_file(&file_path);
        assert!(manager.set_config(&config).is_ok());

        let reloaded: ConfigManager<FileContentConfigProvider, EngineConfig> =
            ConfigManager::from_yaml_file(&file_path);
        assert_eq!(reloaded.get_config().unwrap(), config);

        let provider = FileContentConfigProvider::new(&file_path);
        assert!(provider.get_config_content().unwrap().is_some());
        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_missing_file_yields_default_config() {
        let manager: ConfigManager<FileContentConfigProvider, EngineConfig> =
            ConfigManager::from_yaml_file(get_temp_file_path());
        assert_eq!(manager.get_config().unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_optional_fields_default_when_absent() {
        let content = "board_size: 3\nstrategy: Heuristic\nbot_mark: X\n";
        let manager: ConfigManager<_, EngineConfig> = ConfigManager::new(
            MemoryConfigProvider::with_content(content),
            YamlConfigSerializer::new(),
        );
        let config = manager.get_config().unwrap();
        assert_eq!(config.strategy, Strategy::Heuristic);
        assert_eq!(config.bot_mark, Mark::X);
        assert_eq!(config.human_mark(), Mark::O);
        assert_eq!(config.search_depth, None);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_invalid_config_is_rejected_on_load() {
        let content = "board_size: 9\nstrategy: Random\nbot_mark: O\n";
        let manager: ConfigManager<_, EngineConfig> = ConfigManager::new(
            MemoryConfigProvider::with_content(content),
            YamlConfigSerializer::new(),
        );
        let err = manager.get_config().unwrap_err();
        assert!(err.contains("Board size"));
    }

    #[test]
    fn test_unknown_strategy_is_rejected_on_load() {
        let content = "board_size: 3\nstrategy: Telepathic\nbot_mark: O\n";
        let manager: ConfigManager<_, EngineConfig> = ConfigManager::new(
            MemoryConfigProvider::with_content(content),
            YamlConfigSerializer::new(),
        );
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_rejected_set_keeps_previous_config() {
        let manager: ConfigManager<_, EngineConfig> =
            ConfigManager::new(MemoryConfigProvider::new(), YamlConfigSerializer::new());
        let good = EngineConfig {
            strategy: Strategy::Minimax,
            ..EngineConfig::default()
        };
        manager.set_config(&good).unwrap();

        let bad = EngineConfig {
            bot_mark: Mark::Empty,
            ..good.clone()
        };
        assert!(manager.set_config(&bad).is_err());
        assert_eq!(manager.get_config().unwrap(), good);
    }

    #[test]
    fn test_exhaustive_minimax_on_large_board_needs_depth() {
        let mut config = EngineConfig {
            board_size: 4,
            strategy: Strategy::Minimax,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());

        config.search_depth = Some(3);
        assert!(config.validate().is_ok());

        config.search_depth = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_seeded_config_creates_reproducible_rng() {
        let config = EngineConfig {
            seed: Some(7),
            ..EngineConfig::default()
        };
        let mut a = config.create_rng();
        let mut b = config.create_rng();
        assert_eq!(a.seed(), 7);
        let cells: Vec<u32> = (0..1000).collect();
        for _ in 0..10 {
            assert_eq!(a.choose(&cells), b.choose(&cells));
        }
    }
}
