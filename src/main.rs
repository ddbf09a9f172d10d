use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use hume_emotions::cli::Cli;
use hume_emotions::controllers::render::{catalog_listing, RenderController, RenderMode};
use hume_emotions::domain::emotion::EmotionCatalog;
use hume_emotions::domain::synthesis::{AudioFormat, BatchReport, SynthesisService, VoiceSelection};
use hume_emotions::error::AppError;
use hume_emotions::infrastructure::config::{Config, LogFormat};
use hume_emotions::infrastructure::repositories::HumeTtsRepository;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.list {
        println!("{}", catalog_listing(EmotionCatalog::builtin()));
        return ExitCode::SUCCESS;
    }

    match run(cli).await {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(report) => {
            eprintln!(
                "{} of {} renders failed: {}",
                report.failed.len(),
                report.failed.len() + report.rendered.len(),
                report
                    .failed
                    .iter()
                    .map(|f| f.label.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<AppError>()
                .map(AppError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<BatchReport> {
    // Load configuration; a missing credential stops here
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    // Resolve what to render before touching the network
    let catalog = Arc::new(EmotionCatalog::builtin().clone());
    let mode = RenderMode::from_cli(&cli, &catalog)?;

    let voice = VoiceSelection::new(
        cli.voice.clone().unwrap_or_else(|| config.default_voice.clone()),
        cli.provider.into(),
    );
    let format: AudioFormat = cli.ext.into();
    let output_dir = cli.out_dir.clone().unwrap_or_else(|| config.output_dir.clone());

    tracing::info!(
        voice = %voice.name,
        provider = ?voice.provider,
        format = %format,
        output_dir = %output_dir.display(),
        base_url = %config.hume_base_url,
        "Starting Hume emotion renders"
    );

    // === DEPENDENCY INJECTION SETUP ===
    let tts_repo = Arc::new(HumeTtsRepository::new(
        config.hume_api_key.clone(),
        config.hume_base_url.clone(),
    ));
    let synthesis_service = Arc::new(SynthesisService::new(tts_repo, catalog, output_dir));
    let controller = RenderController::new(synthesis_service);

    let report = controller.run(mode, &voice, format).await?;

    for outcome in &report.rendered {
        println!("{} ({} bytes)", outcome.path.display(), outcome.bytes_written);
    }

    Ok(report)
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "hume_emotions=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "hume_emotions=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
