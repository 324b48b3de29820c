use crate::commands::{CmdMessage, CmdResult};
use crate::config::StockConfig;
use crate::error::{Result, StockError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or updates `stockpad.json` in `config_dir`.
///
/// Unknown keys and unparsable values are errors; nothing is written for them.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = StockConfig::load(config_dir)?;

    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let value = lookup(&config, &key)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(value));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;

            let stored = lookup(&config, &key)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
            Ok(result.with_config(config))
        }
    }
}

fn lookup(config: &StockConfig, key: &str) -> Result<String> {
    config
        .get(key)
        .ok_or_else(|| StockError::Config(format!("Unknown config key: {}", key)))
}
