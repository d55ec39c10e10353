use std::path::PathBuf;

use ntoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use ntoe_common::games::tictactoe::TicTacToeConfig;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "ntoe_config.yaml";

/// Config file next to the executable, or in the working directory when the
/// executable path is unknown.
pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub tictactoe: TicTacToeConfig,
    #[serde(default)]
    pub log_prefix: Option<String>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntoe_common::config::{ConfigContentProvider, ConfigSerializer};
    use ntoe_common::games::tictactoe::Player;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_ntoe_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_is_saved_and_loaded_from_file() {
        let config = Config {
            tictactoe: TicTacToeConfig {
                board_size: 3,
                min_run: 3,
                first_player: Player::Second,
                debug: false,
            },
            log_prefix: Some("Host".to_string()),
        };
        let path = get_temp_file_path();

        get_config_manager(Some(path.clone())).set_config(&config).unwrap();
        let loaded = get_config_manager(Some(path)).get_config().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some(PathBuf::from("this_file_does_not_exist.yaml")));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let content = r#"
            tictactoe:
              board_size: 0
              min_run: 1
        "#;
        let path = get_temp_file_path();
        FileContentConfigProvider::new(path.clone())
            .set_config_content(content)
            .unwrap();

        let result = get_config_manager(Some(path)).get_config();

        assert!(result.is_err());
    }
}
