mod api;
mod credentials;
mod render;
mod token_file;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tenants::outcome::{self, ListOutcome, LoginOutcome};
use tenants::{ApiError, FeatureKey, Hospital, HospitalRoster, StoreError};
use tracing_subscriber::EnvFilter;

use crate::api::Backend;
use crate::credentials::Credentials;
use crate::token_file::FileTokenStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not signed in; run `mediqlo-admin login` or set MEDIQLO_TOKEN")]
    NotSignedIn,
    #[error("session expired; run `mediqlo-admin login` again")]
    SessionExpired,
    #[error("{0}")]
    Login(String),
    #[error("{0}")]
    Fetch(String),
    #[error("login succeeded but the backend returned no token")]
    NoToken,
    #[error("{message} ({source})")]
    Api {
        message: &'static str,
        source: ApiError,
    },
    #[error("hospital `{0}` not found")]
    UnknownHospital(String),
    #[error("no config directory on this platform; pass --token-file")]
    NoConfigDir,
    #[error("token storage: {0}")]
    Store(#[from] StoreError),
    #[error("http client: {0}")]
    Http(#[from] reqwest::Error),
    #[error("prompt failed: {0}")]
    Prompt(#[from] inquire::InquireError),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "mediqlo-admin", about = "Mediqlo super admin console for the terminal")]
struct Cli {
    #[arg(long, env = "API_URL", default_value = tenants::endpoints::DEFAULT_API_URL)]
    api_url: String,

    /// Use this token instead of the stored one.
    #[arg(long, env = "MEDIQLO_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Where the session token is persisted.
    #[arg(long, env = "MEDIQLO_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session token.
    Login {
        #[arg(long)]
        email: String,
        /// Prompted for when omitted.
        #[arg(long, env = "MEDIQLO_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Forget the stored session token.
    Logout,
    /// Report whether a session token is held.
    Whoami,
    Hospitals(HospitalsCommand),
    Features(FeaturesCommand),
}

#[derive(Args, Debug)]
struct HospitalsCommand {
    #[command(subcommand)]
    command: HospitalsSubcommand,
}

#[derive(Subcommand, Debug)]
enum HospitalsSubcommand {
    List {
        /// Print the raw records as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct FeaturesCommand {
    #[command(subcommand)]
    command: FeaturesSubcommand,
}

#[derive(Subcommand, Debug)]
enum FeaturesSubcommand {
    /// Set one feature for one hospital.
    Set {
        hospital_id: String,
        feature: FeatureKey,
        state: Switch,
    },
    /// Flip one feature for one hospital.
    Toggle {
        hospital_id: String,
        feature: FeatureKey,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Switch {
    On,
    Off,
}

struct CliContext {
    backend: Backend,
    creds: Credentials,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let token_path = match cli.token_file {
        Some(path) => path,
        None => FileTokenStore::default_path().ok_or(CliError::NoConfigDir)?,
    };
    let creds = Credentials::open(FileTokenStore::new(token_path), cli.token.as_deref());
    let mut ctx = CliContext {
        backend: Backend::new(&cli.api_url)?,
        creds,
    };

    match cli.command {
        Command::Login { email, password } => run_login(&mut ctx, &email, password).await,
        Command::Logout => run_logout(&mut ctx),
        Command::Whoami => {
            run_whoami(&ctx);
            Ok(())
        }
        Command::Hospitals(cmd) => match cmd.command {
            HospitalsSubcommand::List { json } => run_list(&mut ctx, json).await,
        },
        Command::Features(cmd) => match cmd.command {
            FeaturesSubcommand::Set {
                hospital_id,
                feature,
                state,
            } => run_set(&mut ctx, &hospital_id, feature, matches!(state, Switch::On)).await,
            FeaturesSubcommand::Toggle {
                hospital_id,
                feature,
            } => run_toggle(&mut ctx, &hospital_id, feature).await,
        },
    }
}

async fn run_login(ctx: &mut CliContext, email: &str, password: Option<String>) -> Result<(), CliError> {
    let password = match password {
        Some(password) => password,
        None => inquire::Password::new("Password:")
            .without_confirmation()
            .prompt()?,
    };
    let result = ctx.backend.login(email, &password).await;
    match outcome::login_outcome(result) {
        LoginOutcome::SignedIn(token) => {
            ctx.creds.sign_in(token)?;
            tracing::info!(path = %ctx.creds.store().path().display(), "session token stored");
            println!("signed in to {}", ctx.backend.base_url());
            Ok(())
        }
        LoginOutcome::NoToken => Err(CliError::NoToken),
        LoginOutcome::Failed(message) => Err(CliError::Login(message)),
    }
}

fn run_logout(ctx: &mut CliContext) -> Result<(), CliError> {
    ctx.creds.sign_out()?;
    println!("signed out");
    Ok(())
}

fn run_whoami(ctx: &CliContext) {
    println!("{}", ctx.creds.describe());
}

fn require_token(ctx: &CliContext) -> Result<String, CliError> {
    ctx.creds
        .token()
        .map(ToOwned::to_owned)
        .ok_or(CliError::NotSignedIn)
}

/// Drop the token the backend rejected.
fn expire_session(ctx: &mut CliContext) -> CliError {
    tracing::debug!(source = ?ctx.creds.source(), "token rejected");
    if let Err(e) = ctx.creds.expire() {
        tracing::warn!(error = %e, "could not clear stored token");
    }
    CliError::SessionExpired
}

async fn load_roster(ctx: &mut CliContext) -> Result<Vec<Hospital>, CliError> {
    let token = require_token(ctx)?;
    match outcome::list_outcome(ctx.backend.hospitals(&token).await) {
        ListOutcome::Loaded(hospitals) => Ok(hospitals),
        ListOutcome::SignOut => Err(expire_session(ctx)),
        ListOutcome::Failed(message) => Err(CliError::Fetch(message)),
    }
}

async fn run_list(ctx: &mut CliContext, json: bool) -> Result<(), CliError> {
    let hospitals = load_roster(ctx).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&hospitals)?);
    } else if hospitals.is_empty() {
        println!("No hospitals registered yet.");
    } else {
        print!("{}", render::hospitals_table(&hospitals));
    }
    Ok(())
}

async fn push_feature(
    ctx: &mut CliContext,
    hospital_id: &str,
    feature: FeatureKey,
    enabled: bool,
) -> Result<Hospital, CliError> {
    let token = require_token(ctx)?;
    match ctx
        .backend
        .update_feature(&token, hospital_id, feature, enabled)
        .await
    {
        Ok(hospital) => Ok(hospital),
        Err(e) if e.is_unauthorized() => Err(expire_session(ctx)),
        Err(source) => Err(CliError::Api {
            message: outcome::UPDATE_FAILED,
            source,
        }),
    }
}

async fn run_set(
    ctx: &mut CliContext,
    hospital_id: &str,
    feature: FeatureKey,
    enabled: bool,
) -> Result<(), CliError> {
    let hospital = push_feature(ctx, hospital_id, feature, enabled).await?;
    println!("{}: {}", hospital.name, render::feature_summary(&hospital));
    Ok(())
}

/// Flip a feature the way the dashboard does: apply locally, push, then
/// commit the server record or roll back.
async fn run_toggle(ctx: &mut CliContext, hospital_id: &str, feature: FeatureKey) -> Result<(), CliError> {
    let mut roster = HospitalRoster::new(load_roster(ctx).await?);
    let enabled = !roster
        .get(hospital_id)
        .ok_or_else(|| CliError::UnknownHospital(hospital_id.to_owned()))?
        .feature(feature);
    let pending = roster
        .begin_toggle(hospital_id, feature, enabled)
        .ok_or_else(|| CliError::UnknownHospital(hospital_id.to_owned()))?;

    match push_feature(ctx, hospital_id, feature, enabled).await {
        Ok(updated) => {
            roster.commit(updated);
        }
        Err(e) => {
            let rollback = roster.rollback(pending);
            tracing::debug!(?rollback, "toggle rolled back");
            eprintln!("{}", outcome::TOGGLE_REVERTED);
            return Err(e);
        }
    }

    if let Some(hospital) = roster.get(hospital_id) {
        println!("{}: {}", hospital.name, render::feature_summary(hospital));
    }
    Ok(())
}
