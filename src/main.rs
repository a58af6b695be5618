use anyhow::Result;
use race_pace::{cli, config::Config, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args()?;

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    let (distance, time) = args.positionals()?;
    let config = Config::from_args(&args)?;

    cli::execute_command(&config, distance, time, &mut std::io::stdout().lock())
}
