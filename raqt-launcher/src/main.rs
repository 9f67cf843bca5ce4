use anyhow::Result;
use clap::Parser;
use raqt_launcher::{LaunchConfig, Launcher, Outcome, PROGRAMS, Program};
use tracing_subscriber::EnvFilter;

/// Runner for REBooT related programs.
///
/// Configuration is read from REDIS_URL, REBooT_config, REBooT_section and
/// DATABASE_URL.
#[derive(Debug, Parser)]
#[command(name = "raqt-launcher", version, about)]
struct Cli {
    /// Which program to run
    #[arg(short, long, default_value = "icerisk")]
    program: String,

    /// List the available programs and exit
    #[arg(long)]
    list: bool,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.list {
        for program in PROGRAMS {
            println!("{}", program.name);
        }
        return Ok(());
    }

    let config = LaunchConfig::from_env()?;
    println!("Configuration (from env)");
    for (name, value) in config.entries() {
        println!("  {name:<15} {}", value.unwrap_or("-"));
    }

    let program = Program::find(&cli.program)?;
    println!("You selected: {}", program.name);

    match Launcher::new().launch(program, &config)? {
        Outcome::Skipped => println!("REBooT_section is not set, nothing to run."),
        Outcome::Completed => println!("{} finished.", program.name),
    }
    Ok(())
}
