use clap::Parser;
use style_fetcher::utils::{logger, validation::Validate};
use style_fetcher::{
    CliConfig, ConfigProvider, LocalStorage, Result, StyleSynchronizer, SyncError, TomlConfig,
    WmsClient,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting style-fetcher");
    tracing::debug!("CLI config: {:?}", cli);

    let result = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => run(&config, cli.dry_run).await,
                Err(e) => Err(e),
            }
        }
        None => run(&cli, cli.dry_run).await,
    };

    if let Err(e) = result {
        tracing::error!("❌ style-fetcher failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run<C: ConfigProvider + Validate>(config: &C, dry_run: bool) -> Result<()> {
    config.validate()?;

    let client = WmsClient::new(config.endpoint(), config.timeout())?;
    let synchronizer = StyleSynchronizer::new(client.clone(), LocalStorage::new())
        .with_extensions(config.input_extension(), config.output_extension())
        .with_error_policy(config.error_policy());

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be fetched or written");
        let planned = synchronizer.plan(config.mapfile_dir())?;
        for map_file in &planned {
            println!(
                "{} -> {}",
                map_file.path.display(),
                client.request_url(&map_file.layer)
            );
        }
        println!("{} map files", planned.len());
        return Ok(());
    }

    let report = synchronizer.run(config.mapfile_dir()).await?;

    if !report.is_success() {
        for failure in &report.failures {
            tracing::error!("  {}: {}", failure.map_file.path.display(), failure.error);
        }
        return Err(SyncError::BatchFailed {
            failed: report.failures.len(),
            total: report.total(),
        });
    }

    println!(
        "✅ {} styles written, {} layers without SLD",
        report.written.len(),
        report.skipped.len()
    );
    Ok(())
}
