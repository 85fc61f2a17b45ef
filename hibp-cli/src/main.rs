use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use hibp_client::{AccountQuery, ApiClient, ClientConfig};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit status of `hibp password` for a pwned password. Errors exit with 1
/// and usage errors with 2.
const PWNED_EXIT_CODE: u8 = 3;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] hibp_client::Error),

    #[error("failed to read password from stdin: {0}")]
    Stdin(#[from] io::Error),

    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("no password given on stdin")]
    EmptyPassword,
}

#[derive(Parser, Debug)]
#[command(name = "hibp")]
#[command(about = "Query the Have I Been Pwned API")]
struct Args {
    /// HIBP API key, required for account and paste lookups (falls back to $HIBP_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Route requests through this HTTP(S) proxy (falls back to $HIBP_PROXY)
    #[arg(long)]
    proxy: Option<String>,

    /// Do not ask for zero-count padding in password range responses
    #[arg(long)]
    no_padding: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Breaches an account appears in
    Account {
        account: String,

        /// Only breaches of this domain
        #[arg(long)]
        domain: Option<String>,

        /// Only return breach names
        #[arg(long)]
        truncate: bool,

        /// Leave out unverified breaches
        #[arg(long)]
        exclude_unverified: bool,
    },
    /// Pastes an account appears in
    Pastes { account: String },
    /// All breaches in the system
    Breaches {
        /// Only breaches of this domain
        #[arg(long)]
        domain: Option<String>,
    },
    /// A single breach by name
    Breach { name: String },
    /// All data classes
    DataClasses,
    /// Check a password read from stdin against Pwned Passwords
    ///
    /// Prints "pwned" and exits with status 3 when the password appears in a
    /// breach, prints "not pwned" and exits with 0 otherwise.
    Password,
}

fn main() -> Result<ExitCode, CliError> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let config = client_config(ClientConfig::from_env(), &args);
    debug!(?config, "starting");

    let client = ApiClient::from_config(config)?;

    match args.command {
        Command::Account { account, domain, truncate, exclude_unverified } => {
            let query = AccountQuery {
                domain: domain.as_deref(),
                truncate_response: truncate,
                include_unverified: !exclude_unverified,
            };
            print_json(&client.breaches_for_account_with(&account, &query)?)?;
        }
        Command::Pastes { account } => print_json(&client.pastes_for_account(&account)?)?,
        Command::Breaches { domain } => print_json(&client.breaches(domain.as_deref())?)?,
        Command::Breach { name } => match client.breach(&name)? {
            Some(breach) => print_json(&breach)?,
            None => {
                eprintln!("No breach named '{name}'");
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::DataClasses => print_json(&client.data_classes()?)?,
        Command::Password => {
            let password = read_password(io::stdin().lock())?;
            let pwned = client.is_password_pwned(&password)?;
            println!("{}", if pwned { "pwned" } else { "not pwned" });
            return Ok(ExitCode::from(password_exit_code(pwned)));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Command-line flags override the environment; empty flags are ignored.
fn client_config(mut config: ClientConfig, args: &Args) -> ClientConfig {
    if let Some(api_key) = args.api_key.as_deref().filter(|k| !k.is_empty()) {
        config = config.api_key(api_key);
    }
    if let Some(proxy) = args.proxy.as_deref().filter(|p| !p.is_empty()) {
        config = config.proxy(proxy);
    }
    config.add_padding(!args.no_padding)
}

fn password_exit_code(pwned: bool) -> u8 {
    if pwned { PWNED_EXIT_CODE } else { 0 }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Reads the first line of `input` without its line ending. The password is
/// never taken from argv, where it would land in shell history.
fn read_password(mut input: impl BufRead) -> Result<String, CliError> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let password = line.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        return Err(CliError::EmptyPassword);
    }
    Ok(password.to_string())
}
