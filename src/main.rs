use anyhow::Result;
use leadscore::cli::{self, Commands};
use leadscore::commands::{self, RegistryQuery, ScoreConfig};
use leadscore::observability::install_panic_hook;

fn main() -> Result<()> {
    install_panic_hook();
    let cli = cli::parse_args();

    match cli.command {
        Commands::Score {
            input,
            format,
            output,
            jobs,
            config,
            preset,
            as_of,
            status,
            top,
            verbosity,
            plain,
            quiet,
        } => {
            cli::init_logging(verbosity);
            commands::handle_score(ScoreConfig {
                input,
                format,
                output,
                jobs,
                config,
                preset,
                as_of,
                statuses: status.into_iter().map(|s| s.status()).collect(),
                top,
                verbosity,
                plain,
                quiet,
            })
        }
        Commands::Registry {
            category,
            quality,
            outdated_before,
            format,
        } => {
            cli::init_logging(0);
            commands::handle_registry(
                RegistryQuery {
                    category,
                    quality,
                    outdated_before,
                },
                format,
            )
        }
        Commands::Init { force } => commands::init_config(force),
        Commands::Validate { config } => {
            cli::init_logging(0);
            commands::validate_config(config)
        }
    }
}
