//! `roster-gate`: run requests through the access gate and validate
//! student profiles from the command line.

mod actions;
mod store;

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::{debug, LevelFilter};
use roster_access::{
    GateConfig, IdentityProvider, NoIdentity, ParamMap, StaticIdentity, UserInfo,
    BACKDOOR_KEY_ENV,
};
use roster_profile::ProfileRecord;

use crate::store::ProfileStore;

#[derive(Parser, Debug)]
#[command(name = "roster-gate", version, about = "Roster Gate access control and profile tools")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Dispatch a request to a registered action and print the JSON response
    Dispatch(DispatchArgs),

    /// Validate a profile JSON document (use '-' or omit to read stdin)
    ValidateProfile {
        input: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct DispatchArgs {
    /// Action name, e.g. get-profile or check-profile
    action: String,

    /// URL-encoded request parameters, e.g. "googleid=alice&regkey=abc"
    #[arg(short, long, default_value = "")]
    query: String,

    /// Id of the logged-in session user
    #[arg(short, long)]
    user: Option<String>,

    /// Mark the session user as an administrator
    #[arg(long, requires = "user")]
    admin: bool,

    /// JSON file with an array of stored profiles
    #[arg(long)]
    profiles: Option<PathBuf>,

    /// Backdoor key granting all-access requests
    #[arg(long, env = BACKDOOR_KEY_ENV, hide_env_values = true)]
    backdoor_key: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Dispatch(args) => dispatch(args),
        Commands::ValidateProfile { input } => validate_profile(input),
    }
}

fn dispatch(args: DispatchArgs) -> Result<ExitCode> {
    let config = Arc::new(GateConfig::from_key(args.backdoor_key));

    let identity: Arc<dyn IdentityProvider> = match args.user {
        Some(id) => Arc::new(StaticIdentity(UserInfo {
            is_admin: args.admin,
            ..UserInfo::student(id)
        })),
        None => Arc::new(NoIdentity),
    };

    let store = match args.profiles {
        Some(path) => ProfileStore::load(&path)?,
        None => ProfileStore::default(),
    };

    let dispatcher = actions::build_dispatcher(config, identity, Arc::new(store));
    debug!(
        "Registered actions: {}",
        dispatcher.action_names().collect::<Vec<_>>().join(", ")
    );

    let response = dispatcher.dispatch(&args.action, ParamMap::from_query(&args.query));
    println!(
        "{}",
        serde_json::to_string_pretty(&response).context("Failed to serialize response")?
    );

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn validate_profile(input: Option<PathBuf>) -> Result<ExitCode> {
    let content = match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read profile from stdin")?;
            buf
        }
    };

    let record = ProfileRecord::from_json(&content).context("Failed to parse profile")?;
    let errors = record.invalidity_info();

    if errors.is_empty() {
        println!("Profile '{}' is valid", record.google_id());
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "Profile '{}' has {} problem(s):",
        record.google_id(),
        errors.len()
    );
    for error in &errors {
        println!("  - {error}");
    }
    Ok(ExitCode::FAILURE)
}
