//! Dogfinder CLI application entry point
//!
//! This is the main executable for dogfinder. It logs in to the adoption
//! service and either opens the interactive dashboard or runs a one-shot
//! command.
//!
//! # Usage
//!
//! ```bash
//! # Browse dogs interactively (default command)
//! dogfinder
//! dogfinder browse --name Ada --email ada@example.com
//!
//! # One-shot queries
//! dogfinder breeds
//! dogfinder search --breed Pug --age-max 4 --page 2
//! dogfinder match d1 d2 d3
//! dogfinder locations 02110
//! dogfinder locations search --city Boston --state MA
//!
//! # Quiet mode (only output ids)
//! dogfinder -q search --zip 10001
//!
//! # Store name and email for later logins
//! dogfinder config set-user
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/dogfinder/config.toml` on Linux), created with defaults on
//! first run. `DOGFINDER_*` environment variables override the file, and the
//! global flags override both.

use dogfinder::{
    DogfinderError,
    api::{DogApi, HttpClient},
    auth,
    cli::{Cli, Commands},
    commands,
    config::DogfinderConfig,
    logging,
    session::SessionStore,
    ui::{DialoguerInput, Notifier, StdoutWriter},
};
use std::io;
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

type Result<T> = std::result::Result<T, DogfinderError>;

/// Apply global flags on top of the loaded configuration
fn apply_overrides(config: &mut DogfinderConfig, cli: &Cli) {
    if let Some(name) = &cli.name {
        config.user_name = Some(name.clone());
    }
    if let Some(email) = &cli.email {
        config.user_email = Some(email.clone());
    }
    if let Some(base_url) = &cli.base_url {
        config.base_url.clone_from(base_url);
    }
    config.quiet |= cli.quiet;
}

/// Commands that talk to the service, run after a successful login
fn handle_remote_command(
    command: Commands,
    api: &Arc<dyn DogApi>,
    session: &Arc<SessionStore>,
    runtime: &Runtime,
    config: &DogfinderConfig,
    out: &dyn Notifier,
) -> Result<()> {
    let quiet = config.quiet;
    match command {
        Commands::Browse => commands::browse(
            Arc::clone(api),
            Arc::clone(session),
            runtime,
            config,
            &DialoguerInput::new(),
            out,
        ),
        Commands::Breeds => runtime.block_on(commands::breeds(api.as_ref(), out, quiet)),
        Commands::Search(args) => {
            runtime.block_on(commands::search(api.as_ref(), &args, config, out, quiet))
        }
        Commands::Match { ids } => {
            runtime.block_on(commands::matching(api.as_ref(), &ids, out, quiet))
        }
        Commands::Dogs { ids } => runtime.block_on(commands::dogs(api.as_ref(), &ids, out, quiet)),
        Commands::Locations { command, zip_codes } => runtime.block_on(commands::locations(
            api.as_ref(),
            command.as_ref(),
            &zip_codes,
            out,
            quiet,
        )),
        Commands::Config { .. } | Commands::Completions { .. } => unreachable!(),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let command = cli.get_command();
    if let Commands::Completions { shell } = command {
        commands::completions(shell, &mut io::stdout());
        return Ok(());
    }

    let config_path = DogfinderConfig::config_path()?;
    let mut config = DogfinderConfig::load_from(&config_path)?;

    if let Commands::Config { command } = &command {
        let out = StdoutWriter::new();
        return commands::config(command, &mut config, &config_path, &DialoguerInput::new(), &out);
    }

    apply_overrides(&mut config, cli);
    let browsing = command == Commands::Browse;
    logging::init(&config, browsing)?;

    let out: Arc<dyn Notifier> = if config.quiet {
        Arc::new(StdoutWriter::quiet())
    } else {
        Arc::new(StdoutWriter::new())
    };

    // The dashboard renders notifications itself
    let mut session = SessionStore::new(config.notification_ttl());
    if !browsing {
        session = session.with_echo(Arc::clone(&out));
    }
    let session = Arc::new(session);

    let api: Arc<dyn DogApi> = Arc::new(HttpClient::new(
        config.client_options()?,
        Arc::clone(&session),
    )?);
    let runtime = Builder::new_multi_thread().enable_all().build()?;

    runtime.block_on(commands::login(
        api.as_ref(),
        &session,
        config.user_name.as_deref(),
        config.user_email.as_deref(),
        &DialoguerInput::new(),
        out.as_ref(),
    ))?;

    let result = handle_remote_command(command, &api, &session, &runtime, &config, out.as_ref());

    if session.is_logged_in() {
        runtime.block_on(auth::logout(api.as_ref(), &session));
    }
    debug!(ok = result.is_ok(), "command finished");
    result
}

fn main() {
    let cli = Cli::parse_args();

    if let Err(e) = run(&cli) {
        StdoutWriter::new().error(&e.to_string());
        std::process::exit(1);
    }
}
