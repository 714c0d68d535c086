use clap::Parser;
use srms::core::ConfigProvider;
use srms::utils::{logger, validation::Validate};
use srms::{CliConfig, FileConfig, LocalStorage, MenuShell, RosterStore};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match &cli.config {
        Some(path) => Some(FileConfig::from_file(path)?),
        None => None,
    };

    let verbose = cli.verbose || file_config.as_ref().map(|c| c.verbose()).unwrap_or(false);
    logger::init_cli_logger(verbose);

    tracing::info!("Starting srms");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match file_config {
        Some(config) => {
            validate_or_exit(&config);
            run_shell(config)
        }
        None => {
            validate_or_exit(&cli);
            run_shell(cli)
        }
    }
}

fn validate_or_exit(config: &impl Validate) {
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }
}

fn run_shell<C: ConfigProvider>(config: C) -> anyhow::Result<()> {
    let storage = LocalStorage::new(config.data_dir().to_string());
    let store = RosterStore::new(storage);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = MenuShell::new(store, config, stdin.lock(), stdout.lock());
    shell.run()?;

    tracing::info!("Session ended");
    Ok(())
}
