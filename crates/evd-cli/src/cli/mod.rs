//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use evd_core::app::{App, AppOptions};
use evd_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "evd")]
#[command(version = "0.1")]
#[command(about = "Event discovery stores and router")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    session: SessionArgs,

    /// Pin the clock to noon UTC of this date (YYYY-MM-DD)
    #[arg(long, global = true, value_name = "DATE")]
    today: Option<NaiveDate>,

    /// Start with an empty events store
    #[arg(long = "no-seed", global = true)]
    no_seed: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

/// Credentials to log in with before running a command.
#[derive(clap::Args, Debug, Clone, Default)]
struct SessionArgs {
    /// Log in with this email first
    #[arg(long, global = true, env = "EVD_EMAIL")]
    email: Option<String>,

    /// Password for --email
    #[arg(long, global = true, env = "EVD_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List the route table
    Routes,
    /// Resolve a path through the navigation guard
    Navigate {
        /// Location to navigate to (may include the history base)
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// Check credentials and show the resulting session
    Login {
        #[arg(value_name = "EMAIL")]
        email: String,
        #[arg(value_name = "PASSWORD")]
        password: String,
    },
    /// Query the events store
    Events {
        #[command(subcommand)]
        command: EventCommands,
    },
    /// Show or set the RSVP for an event
    Rsvp {
        #[arg(value_name = "EVENT_ID")]
        event_id: i64,
        /// New status (e.g. attending, interested)
        #[arg(value_name = "STATUS")]
        status: Option<String>,
    },
    /// Run a session script (reads stdin when FILE is omitted)
    Script {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum EventCommands {
    /// Lists all events in store order
    List,
    /// Shows a single event
    Show {
        #[arg(value_name = "EVENT_ID")]
        id: i64,
    },
    /// Events whose date (midnight UTC) has not passed yet
    Upcoming,
    /// Events whose date (midnight UTC) has passed
    Past,
    /// Events in a category (exact match)
    Category {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Events between two dates, inclusive
    Range {
        #[arg(value_name = "START")]
        start: NaiveDate,
        #[arg(value_name = "END")]
        end: NaiveDate,
    },
    /// Totals across the store
    Stats,
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Show the effective configuration
    Show,
    /// Generate a fresh config from Rust defaults
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::Config::load().context("load config")?;
    if let Some(today) = cli.today {
        config.today = Some(today);
    }
    if cli.no_seed {
        config.seed_events = false;
    }

    let _logging = logging::init(&config).context("init logging")?;

    dispatch(cli, &config)
}

fn dispatch(cli: Cli, config: &config::Config) -> Result<()> {
    let Cli {
        command,
        session,
        json,
        today: _,
        no_seed: _,
    } = cli;

    let open = || open_app(config, &session);

    match command {
        Commands::Routes => commands::routes::list(json),
        Commands::Navigate { path } => commands::routes::navigate(&mut open()?, &path, json),
        Commands::Login { email, password } => {
            commands::session::login(&mut open()?, &email, &password, json)
        }
        Commands::Events { command } => {
            let app = open()?;
            match command {
                EventCommands::List => commands::events::list(&app, json),
                EventCommands::Show { id } => commands::events::show(&app, id, json),
                EventCommands::Upcoming => commands::events::upcoming(&app, json),
                EventCommands::Past => commands::events::past(&app, json),
                EventCommands::Category { name } => {
                    commands::events::category(&app, &name, json)
                }
                EventCommands::Range { start, end } => {
                    commands::events::range(&app, start, end, json)
                }
                EventCommands::Stats => commands::events::stats(&app, json),
            }
        }
        Commands::Rsvp { event_id, status } => {
            commands::events::rsvp(&mut open()?, event_id, status, json)
        }
        Commands::Script { file } => commands::script::run(&mut open()?, file.as_deref(), json),
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Show => commands::config::show(config),
            ConfigCommands::Generate => commands::config::generate(),
        },
    }
}

/// Builds the app and applies `--email/--password`.
fn open_app(config: &config::Config, session: &SessionArgs) -> Result<App> {
    let mut app = App::new(&AppOptions::from(config));
    commands::session::login_from_args(
        &mut app,
        session.email.as_deref(),
        session.password.as_deref(),
    )?;
    Ok(app)
}
