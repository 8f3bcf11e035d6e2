//! Text prompts
//!
//! Login details and `config set-user` ask for a name and an email through
//! [`UserInput`], answered by dialoguer in a terminal and by scripted answers
//! in tests.

use std::io;

/// Source of typed answers
pub trait UserInput: Send + Sync {
    /// Ask for one line of text
    ///
    /// `default` is offered pre-filled and returned when the answer is empty.
    /// `Ok(None)` means the prompt was dismissed.
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>>;
}

pub type Result<T> = std::result::Result<T, InputError>;

/// Prompt failures
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// The terminal could not be read
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The prompt was abandoned
    #[error("Input cancelled by user")]
    Cancelled,
}

/// Terminal prompts with dialoguer's colorful theme
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>> {
        let mut input = dialoguer::Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }

        match input.interact_text() {
            Ok(answer) => Ok(Some(answer)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
                Err(InputError::Cancelled)
            }
            Err(dialoguer::Error::IO(e)) => Err(InputError::Io(e)),
        }
    }
}

/// Answers prompts from a fixed list, in order
///
/// An empty answer takes the prompt's default. Running out of answers
/// behaves like the user cancelling.
#[cfg(test)]
pub struct ScriptedInput {
    answers: std::sync::Mutex<std::collections::VecDeque<String>>,
}

#[cfg(test)]
impl ScriptedInput {
    #[must_use]
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: std::sync::Mutex::new(answers.iter().map(ToString::to_string).collect()),
        }
    }
}

#[cfg(test)]
impl UserInput for ScriptedInput {
    fn prompt_text(
        &self,
        _prompt: &str,
        default: Option<&str>,
        _allow_empty: bool,
    ) -> Result<Option<String>> {
        let answer = self
            .answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(InputError::Cancelled)?;
        match default {
            Some(def) if answer.is_empty() => Ok(Some(def.to_string())),
            _ => Ok(Some(answer)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_message() {
        assert_eq!(InputError::Cancelled.to_string(), "Input cancelled by user");
    }

    #[test]
    fn test_scripted_input() {
        let input = ScriptedInput::new(&["first", ""]);

        assert_eq!(input.prompt_text("a", None, false).unwrap().as_deref(), Some("first"));
        assert_eq!(
            input.prompt_text("b", Some("fallback"), false).unwrap().as_deref(),
            Some("fallback")
        );
        assert!(matches!(input.prompt_text("c", None, false), Err(InputError::Cancelled)));
    }
}
