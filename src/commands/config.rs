//! Config command - show the configuration or store the user details

use crate::{
    DogfinderError,
    cli::ConfigCommands,
    config::{DogfinderConfig, set_user},
    ui::{Notifier, UserInput},
};
use std::path::Path;

type Result<T> = std::result::Result<T, DogfinderError>;

/// Execute a config subcommand against the file at `path`
///
/// # Errors
/// Returns an error if the configuration cannot be serialized, the prompts
/// fail, or the file cannot be written
pub fn execute(
    command: &ConfigCommands,
    config: &mut DogfinderConfig,
    path: &Path,
    input: &dyn UserInput,
    out: &dyn Notifier,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(config).map_err(|e| {
                ::config::ConfigError::Message(format!("Failed to serialize config: {e}"))
            })?;
            out.write(rendered.trim_end());
        }
        ConfigCommands::Path => out.write(&path.display().to_string()),
        ConfigCommands::SetUser => {
            let credentials = set_user(config, input)?;
            config.save_to(path)?;
            out.success(&format!(
                "Saved {} <{}> to {}",
                credentials.name(),
                credentials.email(),
                path.display()
            ));
        }
    }
    Ok(())
}
