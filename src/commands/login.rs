//! Login flow shared by every command that talks to the service

use crate::{
    DogfinderError,
    api::DogApi,
    auth::{self, Credentials, LoginError},
    config::prompt_credentials,
    session::SessionStore,
    ui::{Notifier, UserInput},
};

type Result<T> = std::result::Result<T, DogfinderError>;

/// Form submissions allowed before giving up on invalid input
pub const MAX_ATTEMPTS: usize = 3;

/// Log in with the given details, prompting for whatever is missing
///
/// An invalid form shows the field errors and prompts again, up to
/// [`MAX_ATTEMPTS`] times. A refusal from the service ends the flow.
///
/// # Errors
/// Returns an error if input cannot be read, the form stays invalid, or the
/// service refuses the login
pub async fn execute(
    api: &dyn DogApi,
    session: &SessionStore,
    name: Option<&str>,
    email: Option<&str>,
    input: &dyn UserInput,
    out: &dyn Notifier,
) -> Result<Credentials> {
    let (mut name, mut email) = match (name, email) {
        (Some(name), Some(email)) => (name.to_string(), email.to_string()),
        (name, email) => prompt_credentials(input, name, email)?,
    };

    let mut attempt = 1;
    loop {
        match auth::login(api, session, &name, &email).await {
            Ok(credentials) => {
                out.success(&format!("Logged in as {}", credentials.name()));
                return Ok(credentials);
            }
            Err(LoginError::Invalid(errors)) if attempt < MAX_ATTEMPTS => {
                for message in errors.messages() {
                    out.error(message);
                }
                let answers = prompt_credentials(
                    input,
                    Some(name.as_str()).filter(|n| !n.is_empty()),
                    Some(email.as_str()).filter(|e| !e.is_empty()),
                )?;
                (name, email) = answers;
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
