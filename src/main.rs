use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use qtctoys::{
    config::Config,
    model::Installation,
    output::{print_report, InfoReport, OutputFormat, PluginSelection},
    provider::{CommandRunner, Discovery, InfoProvider},
    Error,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const ERROR: u8 = 1;
}

/// `--plugin` value that lists every plugin.
const ALL_PLUGINS: &str = "all";

#[derive(Parser)]
#[command(name = "qtctoys")]
#[command(
    author,
    version,
    about = "Show information about a local Qt Creator installation"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about Qt Creator and plugins
    Info {
        /// Show Qt Creator version and path
        #[arg(long)]
        qtcreator: bool,

        /// Show all Qt Creator plugins
        #[arg(long)]
        plugins: bool,

        /// Show information for a specific plugin ("all" lists every plugin)
        #[arg(long, value_name = "NAME")]
        plugin: Option<String>,

        /// Output format (text, table, json)
        #[arg(short, long)]
        format: Option<String>,

        /// Use this Qt Creator executable instead of searching for one
        #[arg(long, value_name = "PATH")]
        executable: Option<PathBuf>,
    },

    /// Show version
    Version,

    /// Show or create config file
    Config {
        /// Generate default config file
        #[arg(long)]
        init: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// What `info` should print, after applying the no-flags default.
struct Selection {
    qtcreator: bool,
    all_plugins: bool,
    plugin: Option<String>,
}

impl Selection {
    fn new(qtcreator: bool, plugins: bool, plugin: Option<String>) -> Self {
        let plugin = plugin.filter(|name| !name.is_empty());
        let all_plugins = plugins || plugin.as_deref() == Some(ALL_PLUGINS);
        let plugin = plugin.filter(|name| name != ALL_PLUGINS);
        let qtcreator = qtcreator || (!all_plugins && plugin.is_none());

        Self {
            qtcreator,
            all_plugins,
            plugin,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(exit_codes::ERROR)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("qtctoys={}", level)));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<u8> {
    let config = Config::load().unwrap_or_else(|e| {
        warn!("ignoring config file: {:#}", e);
        Config::default()
    });

    match cli.command {
        Commands::Info {
            qtcreator,
            plugins,
            plugin,
            format,
            executable,
        } => {
            let format_str = format.unwrap_or_else(|| config.default_format.clone());
            let format = OutputFormat::from_str(&format_str).map_err(|e| anyhow::anyhow!(e))?;
            let selection = Selection::new(qtcreator, plugins, plugin);

            let discovery = match executable {
                Some(path) => Discovery::explicit(path),
                None => Discovery::from_config(&config),
            };
            let provider =
                InfoProvider::new(discovery).with_version_flag(config.version_flag.as_str());

            run_info(&provider, &selection, format)
        }
        Commands::Version => {
            println!("qtctoys v{}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::SUCCESS)
        }
        Commands::Config { init, path } => {
            print!("{}", handle_config(init, path, &Config::config_path())?);
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn run_info<R: CommandRunner>(
    provider: &InfoProvider<R>,
    selection: &Selection,
    format: OutputFormat,
) -> Result<u8> {
    let installation = fetch_with_progress(provider, format.is_interactive())?;
    let report = build_report(&installation, selection)?;

    print_report(&report, format)?;

    if report.is_complete() {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::ERROR)
    }
}

fn build_report(installation: &Installation, selection: &Selection) -> Result<InfoReport> {
    let snapshot = &installation.snapshot;
    let mut report = InfoReport::default();

    if selection.qtcreator {
        report.version = Some(snapshot.version().version.clone());
        report.path = Some(installation.path.clone());
    }

    if selection.all_plugins {
        report.plugins = Some(PluginSelection::All(
            snapshot.list_all().into_iter().cloned().collect(),
        ));
    } else if let Some(name) = &selection.plugin {
        report.plugins = Some(match snapshot.resolve(name) {
            Ok(record) => PluginSelection::Single(record.clone()),
            Err(Error::PluginNotFound { name, suggestions }) => {
                PluginSelection::NotFound { name, suggestions }
            }
            Err(e) => return Err(e.into()),
        });
    }

    Ok(report)
}

fn fetch_with_progress<R: CommandRunner>(
    provider: &InfoProvider<R>,
    interactive: bool,
) -> Result<Installation> {
    let progress = if interactive {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Querying Qt Creator...");
        Some(pb)
    } else {
        None
    };

    let result = provider.fetch();

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(result?)
}

/// Text shown by `qtctoys config` for the config file at `config_path`.
fn handle_config(init: bool, show_path: bool, config_path: &Path) -> Result<String> {
    let location = config_path.display();

    if show_path {
        return Ok(format!("{}\n", location));
    }

    if init {
        if config_path.exists() {
            return Ok(format!("Config file already exists at: {}\n", location));
        }

        Config::default().save_to(config_path)?;
        return Ok(format!(
            "Created config file at: {}\n\nDefault configuration:\n{}\n",
            location,
            Config::generate_default_config()
        ));
    }

    if !config_path.exists() {
        return Ok(format!(
            "No config file found.\nRun 'qtctoys config --init' to create one.\n\nConfig path: {}\n",
            location
        ));
    }

    let content = std::fs::read_to_string(config_path)?;
    Ok(format!("Config file: {}\n\n{}\n", location, content))
}
