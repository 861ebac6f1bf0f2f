use std::fs::OpenOptions;
use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap::FromArgMatches;
use clap::Parser;
use clap::Subcommand;
use devotional_cli::commands;
use devotional_cli::terminal_ui::run_terminal_ui;
use devotional_term::configuration::Config;
use devotional_term::configuration::ConfigKey;
use devotional_term::infrastructure::clients::ApiClientManager;
use devotional_term::infrastructure::printers::PrintWindowManager;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[clap(
    name = "devotional",
    author,
    version = "0.1.0",
    about = "Generate age-appropriate family devotionals"
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Commands>,

    #[clap(long, id = "config-file", global = true, help = "Path to configuration file")]
    config_file: Option<String>,

    #[clap(
        long,
        id = "server-url",
        global = true,
        help = "Devotional service URL [default: http://localhost:8000]"
    )]
    server_url: Option<String>,

    #[clap(
        long,
        id = "print-dir",
        global = true,
        help = "Directory printable devotionals are written to"
    )]
    print_dir: Option<String>,

    #[clap(
        long,
        id = "request-timeout",
        global = true,
        help = "Request timeout in milliseconds, empty for no timeout"
    )]
    request_timeout: Option<String>,

    #[clap(long, short, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the suggested topics
    Topics,
    /// Generate a single devotional and print it
    Generate {
        #[clap(long, value_parser = ["children", "teens", "young_adults", "adults"])]
        age_group: Option<String>,

        #[clap(long)]
        topic: Option<String>,

        #[clap(long, help = "Also open the printable page")]
        print: bool,
    },
    /// Configuration helpers
    Config {
        #[clap(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print a config file holding every default
    Default,
}

fn init_logger(level: LevelFilter, to_file: bool) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);

    if to_file {
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open("devotional.log")?;
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(env_logger::Target::Stderr);
    }

    builder.init();

    return Ok(());
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Info);
    init_logger(log_level_filter, cli.command.is_none())?;

    let mut arg_matches = vec![&matches];
    if let Some((_, sub_matches)) = matches.subcommand() {
        arg_matches.push(sub_matches);
    }
    Config::load(Cli::command(), arg_matches).await?;

    match cli.command {
        Some(Commands::Config {
            action: ConfigCommands::Default,
        }) => {
            println!("{}", Config::serialize_default(Cli::command()));
            Ok(())
        }
        Some(Commands::Topics) => {
            let api = ApiClientManager::get()?;
            commands::run_topics(&*api, &mut io::stdout()).await
        }
        Some(Commands::Generate {
            age_group,
            topic,
            print,
        }) => {
            let api = ApiClientManager::get()?;
            let window = PrintWindowManager::get();
            let print_window = if print { Some(&*window) } else { None };

            commands::run_generate(
                &*api,
                age_group.as_deref(),
                topic.as_deref(),
                print_window,
                chrono::Local::now().date_naive(),
                &mut io::stdout(),
            )
            .await
        }
        None => {
            let api = ApiClientManager::get()?;
            log::info!(
                "Starting devotional client against {}",
                Config::get(ConfigKey::ServerUrl)
            );
            run_terminal_ui(
                api,
                PrintWindowManager::get(),
                Config::get(ConfigKey::ServerUrl),
            )
            .await
        }
    }
}
