use clap::{CommandFactory, Parser, Subcommand};
use pingstat_core::cli;
use pingstat_core::cli::analyze::{AnalyzeArgs, run_analyze};
use pingstat_core::logging::init_logging;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "pingstat",
    version,
    about = "Pingstat: packet loss and round-trip statistics from ping logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one or more ping logs
    Analyze(AnalyzeArgs),

    /// Settings file tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Analyze(args)) => {
            init_logging();

            match run_analyze(args) {
                Ok(outcome) => {
                    debug!(
                        analyzed = outcome.analyzed,
                        failed = outcome.failed,
                        "analyze finished"
                    );
                    if outcome.failed > 0 {
                        std::process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("analyze error: {e:#}");
                    std::process::exit(1);
                }
            }
        }

        Some(Command::Config { cmd }) => {
            init_logging();

            if let Err(e) = cli::conf::run(cmd) {
                eprintln!("config error: {e:#}");
                std::process::exit(1);
            }
        }

        None => {
            let _ = Cli::command().print_help();
            println!();
        }
    }
}
