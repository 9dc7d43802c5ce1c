use clap::Subcommand;
use masterymap_core::Config;

use super::{CommandResult, Context};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Get a config value
    Get {
        /// Dotted key (e.g. "decay.mode", "logging.level")
        key: String,
    },
    /// Set a config value and save
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },
    /// Print the config file location
    Path,
    /// Reset config to defaults
    Reset,
}

pub fn run(ctx: &Context, action: ConfigAction) -> CommandResult {
    match action {
        ConfigAction::Show => {
            let config = ctx.load_config()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Get { key } => {
            let config = ctx.load_config()?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = ctx.load_config()?;
            config.set(&key, &value)?;
            config.save_to(&ctx.config_path()?)?;
            println!("ok");
        }
        ConfigAction::Path => {
            println!("{}", ctx.config_path()?.display());
        }
        ConfigAction::Reset => {
            Config::default().save_to(&ctx.config_path()?)?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
