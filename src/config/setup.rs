//! Interactive prompts for the stored user details
//!
//! The service identifies a session by name and email. These prompts ask
//! for them, pre-filled with whatever the configuration already holds.

use super::DogfinderConfig;
use crate::auth::Credentials;
use crate::ui::input::UserInput;
use config::ConfigError;

/// Ask for a name and email, offering `name` and `email` as defaults
///
/// The answers are returned as typed; validation happens at login.
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read.
pub fn prompt_credentials(
    input: &dyn UserInput,
    name: Option<&str>,
    email: Option<&str>,
) -> Result<(String, String), ConfigError> {
    let name = input
        .prompt_text("Name", name, false)
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?
        .unwrap_or_default();
    let email = input
        .prompt_text("Email", email, false)
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?
        .unwrap_or_default();
    Ok((name, email))
}

/// Prompt for user details and store them in `config`
///
/// The caller decides where to save.
///
/// # Errors
///
/// Returns `ConfigError` if input cannot be read or the details do not
/// validate; `config` is left unchanged in that case.
pub fn set_user(
    config: &mut DogfinderConfig,
    input: &dyn UserInput,
) -> Result<Credentials, ConfigError> {
    let (name, email) = prompt_credentials(
        input,
        config.user_name.as_deref(),
        config.user_email.as_deref(),
    )?;

    let credentials =
        Credentials::validate(&name, &email).map_err(|e| ConfigError::Message(e.to_string()))?;

    config.user_name = Some(credentials.name().to_string());
    config.user_email = Some(credentials.email().to_string());
    Ok(credentials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::input::ScriptedInput;

    #[test]
    fn test_set_user_stores_details() {
        let input = ScriptedInput::new(&["Ada", "ada@example.com"]);
        let mut config = DogfinderConfig::default();

        let credentials = set_user(&mut config, &input).unwrap();

        assert_eq!(credentials.name(), "Ada");
        assert_eq!(config.user_name.as_deref(), Some("Ada"));
        assert_eq!(config.user_email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn test_set_user_rejects_bad_email() {
        let input = ScriptedInput::new(&["Ada", "ada-at-example"]);
        let mut config = DogfinderConfig::default();

        let error = set_user(&mut config, &input).unwrap_err();

        assert!(error.to_string().contains("Please enter a valid email address."));
        assert!(config.user_name.is_none());
    }

    #[test]
    fn test_prompts_offer_stored_values() {
        let input = ScriptedInput::new(&["", ""]);

        let (name, email) =
            prompt_credentials(&input, Some("Ada"), Some("ada@example.com")).unwrap();

        assert_eq!(name, "Ada");
        assert_eq!(email, "ada@example.com");
    }

    #[test]
    fn test_cancelled_input() {
        let input = ScriptedInput::new(&[]);
        assert!(prompt_credentials(&input, None, None).is_err());
    }
}
