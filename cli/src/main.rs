//! CLI entrypoint for supplement-advisor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use advisor_application::GetRecommendationUseCase;
use advisor_domain::vocab;
use advisor_infrastructure::{ConfigLoader, OpenAiGateway};
use advisor_presentation::{Cli, ConsoleFormatter, OutputFormat, PendingSpinner};
use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.list_options {
        print_options();
        return Ok(());
    }

    let profile = cli
        .build_profile()
        .context("입력한 건강 프로필이 올바르지 않습니다")?;

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("설정 파일을 읽을 수 없습니다")?
    };
    file_config.validate()?;

    let config = cli.apply_overrides(file_config.into_client_config());
    if !config.use_mock && !config.has_credential() {
        warn!("API 키가 없어 Mock 추천으로 대체합니다 (OPENAI_API_KEY 또는 --mock)");
    }

    // === Dependency Injection ===
    let api_key = config.api_key.clone().unwrap_or_default();
    let gateway = Arc::new(
        OpenAiGateway::new(api_key, config.request_timeout)
            .context("HTTP 클라이언트를 초기화할 수 없습니다")?,
    );

    // Ctrl-C cancels the in-flight request and any pending backoff
    let cancellation_token = CancellationToken::new();
    let signal_token = cancellation_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("cancellation requested");
            signal_token.cancel();
        }
    });

    let use_case =
        GetRecommendationUseCase::new(gateway, config).with_cancellation(cancellation_token);

    let spinner = if cli.quiet {
        PendingSpinner::hidden()
    } else {
        PendingSpinner::start("맞춤형 영양제 추천을 생성하고 있습니다...")
    };

    let use_mock_override = cli.mock.then_some(true);
    let result = use_case.execute(&profile, use_mock_override).await;
    spinner.finish();

    match result {
        Ok(recommendation) => {
            let output = match cli.output {
                OutputFormat::Cards => ConsoleFormatter::format(&recommendation),
                OutputFormat::Summary => ConsoleFormatter::format_summary_only(&recommendation),
                OutputFormat::Json => ConsoleFormatter::format_json(&recommendation),
            };
            println!("{}", output);
            Ok(())
        }
        Err(error) if error.is_cancelled() => {
            // Interrupted by the user: no result, no error output
            std::process::exit(130);
        }
        Err(error) => {
            eprintln!("{}", ConsoleFormatter::format_error(&error));
            std::process::exit(1);
        }
    }
}

fn print_options() {
    println!("건강 고민 (--concern):");
    for concern in vocab::CONCERNS {
        println!("  {}", concern);
    }
    println!();
    println!("생활 습관 (--lifestyle):");
    for item in vocab::LIFESTYLE {
        println!("  {}", item);
    }
}
