use clap::Parser;
use hirschberg_align::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("hirschberg_align=debug,info")
    } else {
        EnvFilter::new("hirschberg_align=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Align(args) => {
            cli::align::run(args, cli.format)?;
        }
        cli::Commands::Costs(args) => {
            cli::costs::run(args, cli.format)?;
        }
    }

    Ok(())
}
