use clap::Parser;
use colourstuff_cli::{Args, CliConfig, Subcommands};

fn main() -> std::process::ExitCode {
    let Args {
        subcommand,
        globals,
    } = Args::parse();

    if !globals.quiet {
        let filter = match globals.verbose {
            0 => tracing::level_filters::LevelFilter::INFO,
            1 => tracing::level_filters::LevelFilter::DEBUG,
            2.. => tracing::level_filters::LevelFilter::TRACE,
        };
        let env_filter = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(filter.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter)
            .init();
    }

    let config = match CliConfig::load(globals.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return std::process::ExitCode::FAILURE;
        }
    };

    let result = match subcommand {
        Subcommands::Locus(args) => colourstuff_cli::convert::handle_locus(args),
        Subcommands::Radiance(args) => colourstuff_cli::convert::handle_radiance(args),
        Subcommands::Convert(args) => {
            colourstuff_cli::convert::handle_convert(args, &config.conversion)
        }
        Subcommands::DeltaE(args) => {
            colourstuff_cli::convert::handle_delta_e(args, &config.conversion)
        }
        Subcommands::Probes(args) => {
            colourstuff_cli::probe::handle_probes(&config.spotread_with(&args))
        }
        Subcommands::Sample(args) => colourstuff_cli::probe::handle_sample(
            &config.spotread_with(&args.probe),
            args.estimator.get(),
            &config.conversion,
        ),
        Subcommands::Log(args) => {
            let spotread = config.spotread_with(&args.probe);
            colourstuff_cli::log::handle_log(args, &spotread, &config.conversion)
        }
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::ExitCode::FAILURE
    } else {
        std::process::ExitCode::SUCCESS
    }
}
