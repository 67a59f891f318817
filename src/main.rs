use anyhow::{ Context, Result };
use clap::Parser;
use log::{ debug, info };
use std::process::ExitCode;

use csspropc::{ CompileError, CompilerConfig };

mod cli;
use cli::{ Commands, CssPropCli };

fn main() -> ExitCode {
    // Parse the command line arguments
    let cli = CssPropCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &CssPropCli) -> Result<()> {
    let config = load_config(cli)?;

    match &cli.command {
        Commands::Compile { input, output } => {
            cli::commands::compile::execute(&config, input, output.as_deref(), cli.output_format)
        }
        Commands::Check { input } => {
            cli::commands::check::execute(&config, input, cli.output_format)
        }
        Commands::Show { input, name } => {
            cli::commands::show::execute(&config, input, name, cli.output_format)
        }
        Commands::Reserved => cli::commands::reserved::execute(cli.output_format),
    }
}

fn load_config(cli: &CssPropCli) -> Result<CompilerConfig> {
    match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            CompilerConfig::from_file(path).with_context(||
                format!("Failed to load configuration from {}", path.display())
            )
        }
        None => {
            debug!("Using default configuration");
            Ok(CompilerConfig::default())
        }
    }
}

fn report_error(err: &anyhow::Error) {
    cli::ui::print_error(&err.to_string());
    for cause in err.chain().skip(1) {
        cli::ui::print_text(&format!("  caused by: {}", cause));
    }
    if let Some(compile_err) = err.downcast_ref::<CompileError>() {
        if compile_err.is_configuration_error() {
            cli::ui::print_info("The property definitions must be fixed before compiling again.");
        }
    }
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };

    env_logger::Builder::new().filter_level(level).init();

    debug!("Logger initialized with level: {}", log_level);
}
