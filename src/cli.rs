//! Command-line interface for the kingdom simulation.

use hydra_kingdom::config::GameConfig;
use lexopt::prelude::*;
use std::path::PathBuf;

/// Command-line arguments for the game.
#[derive(Debug, Clone)]
pub struct CliArgs {
    pub command: Command,
    pub config_file: Option<PathBuf>,
    pub days: Option<u32>,
    pub random_seed: Option<u64>,
    pub debug: bool,
    pub verbose: bool,
    pub quiet: bool,
    pub output_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Interactive menu over stdin.
    Play,
    /// Unattended run: gather every day, decline every prompt.
    Simulate,
    /// Print the resolved configuration and exit.
    ShowConfig,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            command: Command::Play,
            config_file: None,
            days: None,
            random_seed: None,
            debug: false,
            verbose: false,
            quiet: false,
            output_file: None,
        }
    }
}

pub fn parse_args() -> Result<CliArgs, lexopt::Error> {
    let mut args = lexopt::Parser::from_env();
    let mut cli_args = CliArgs::default();
    let mut subcommand: Option<String> = None;

    while let Some(arg) = args.next()? {
        match arg {
            Value(val) if subcommand.is_none() => subcommand = Some(val.string()?),
            Long("config") | Short('c') => {
                cli_args.config_file = Some(PathBuf::from(args.value()?.string()?));
            }
            Long("days") | Short('d') => cli_args.days = Some(args.value()?.parse()?),
            Long("seed") => cli_args.random_seed = Some(args.value()?.parse()?),
            Long("output") | Short('o') => {
                cli_args.output_file = Some(PathBuf::from(args.value()?.string()?));
            }
            Long("debug") => cli_args.debug = true,
            Long("verbose") | Short('v') => cli_args.verbose = true,
            Long("quiet") | Short('q') => cli_args.quiet = true,
            Long("help") | Short('h') => {
                print_help();
                std::process::exit(0);
            }
            _ => return Err(arg.unexpected()),
        }
    }

    cli_args.command = match subcommand.as_deref() {
        Some("play") | None => Command::Play,
        Some("simulate") => Command::Simulate,
        Some("config") => Command::ShowConfig,
        Some(cmd) => return Err(lexopt::Error::from(format!("Unknown command: {}", cmd))),
    };

    Ok(cli_args)
}

/// Loads the config file if given, then applies flag overrides.
pub fn resolve_config(args: &CliArgs) -> Result<GameConfig, String> {
    let mut config = match &args.config_file {
        Some(path) => GameConfig::load_from_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.random_seed {
        config.random_seed = Some(seed);
    }
    Ok(config)
}

/// Default log filter picked from the verbosity flags.
pub fn log_filter(args: &CliArgs) -> &'static str {
    if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    }
}

fn print_help() {
    println!("\nSlay the Hydra - kingdom simulation\n");
    println!("USAGE:");
    println!("    hydra-kingdom-sim [COMMAND] [OPTIONS]\n");

    println!("COMMANDS:");
    println!("    play             Play interactively (default)");
    println!("    simulate         Run unattended for --days days");
    println!("    config           Print the resolved configuration\n");

    println!("OPTIONS:");
    println!("    -c, --config <FILE>        Load config from JSON or YAML");
    println!("    -d, --days <N>             Days to run in simulate mode (default 30)");
    println!("    --seed <N>                 Random seed for reproducible runs");
    println!("    -o, --output <FILE>        Write the chronicle as JSON on exit");
    println!("    --debug                    Enable debug logging");
    println!("    -v, --verbose              Enable info logging");
    println!("    -q, --quiet                Only log errors");
    println!("    -h, --help                 Print help information\n");

    println!("EXAMPLES:");
    println!("    hydra-kingdom-sim play --seed 12345");
    println!("    hydra-kingdom-sim simulate --days 60 --seed 7 -o chronicle.json");
}
