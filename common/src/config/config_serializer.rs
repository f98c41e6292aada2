use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to write YAML config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        if content.trim().is_empty() {
            return Err("Config file is empty".to_string());
        }
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to parse YAML config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::games::tictactoe::{Mark, Strategy};

    #[test]
    fn test_engine_config_uses_variant_names() {
        let config = EngineConfig {
            board_size: 4,
            strategy: Strategy::RuleBased,
            bot_mark: Mark::X,
            search_depth: Some(3),
            seed: None,
        };
        let yaml = YamlConfigSerializer::new().serialize(&config).unwrap();
        assert!(yaml.contains("strategy: RuleBased"));
        assert!(yaml.contains("bot_mark: X"));
        assert!(yaml.contains("search_depth: 3"));
    }

    #[test]
    fn test_optional_fields_may_be_omitted() {
        let yaml = "board_size: 3\nstrategy: Minimax\nbot_mark: O\n";
        let config: EngineConfig = YamlConfigSerializer::new().deserialize(yaml).unwrap();
        assert_eq!(config.strategy, Strategy::Minimax);
        assert_eq!(config.search_depth, None);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_empty_or_malformed_content_is_an_error() {
        let serializer = YamlConfigSerializer::new();
        assert!(ConfigSerializer::<EngineConfig>::deserialize(&serializer, "  \n").is_err());
        assert!(ConfigSerializer::<EngineConfig>::deserialize(&serializer, "board_size: [").is_err());
        assert!(ConfigSerializer::<EngineConfig>::deserialize(&serializer, "strategy: Genius").is_err());
    }
}
