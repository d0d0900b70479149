use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use gatecrash::cli::{Cli, Commands};
use gatecrash::models::RunConfig;
use gatecrash::probe::{LoginProbe, PathProbe, Probe};
use gatecrash::reporter::{ConsoleReporter, JsonExporter};
use gatecrash::scanner::Engine;
use gatecrash::wordlist;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Dir {
            url,
            wordlist: wordlist_path,
            concurrency,
            extensions,
            delay,
            cookies,
            headers,
            indicators,
            codes,
            output,
            verbose,
        } => {
            let mut config = RunConfig::new(url);
            config.concurrency = concurrency;
            config.delay = Duration::from_secs_f64(delay);
            config.cookies = load_json_map(cookies.as_deref())?;
            config.headers = load_json_map(headers.as_deref())?;
            config.success_indicators = indicators;
            config.interesting_statuses = codes;

            let candidates = wordlist::load_candidates(Path::new(&wordlist_path), &extensions)?;
            let probe = PathProbe::new(&config)?;

            run_engine(probe, candidates, &config, &output, verbose).await
        }

        Commands::Login {
            url,
            wordlist: wordlist_path,
            username,
            concurrency,
            delay,
            indicators,
            fields,
            form_name,
            user_field,
            pass_field,
            output,
            verbose,
        } => {
            let mut config = RunConfig::new(url);
            config.concurrency = concurrency;
            config.delay = Duration::from_secs_f64(delay);
            config.success_indicators = indicators;
            config
                .headers
                .insert("User-Agent".to_string(), "Mozilla/5.0".to_string());

            // Joomla-style task markers by default; a fields file overrides.
            config
                .form_fields
                .insert("task".to_string(), "login".to_string());
            config
                .form_fields
                .insert("option".to_string(), "com_login".to_string());
            config.form_fields.extend(load_json_map(fields.as_deref())?);

            let candidates = wordlist::load_candidates(Path::new(&wordlist_path), &[])?;
            let probe =
                LoginProbe::new(&config, &username, &form_name, &user_field, &pass_field).await?;

            run_engine(probe, candidates, &config, &output, verbose).await
        }
    }
}

async fn run_engine<P: Probe>(
    probe: P,
    candidates: Vec<String>,
    config: &RunConfig,
    output: &Option<String>,
    verbose: bool,
) -> Result<()> {
    tracing::info!(
        candidates = candidates.len(),
        concurrency = config.concurrency,
        target = %config.target_url,
        "starting run"
    );

    let engine = Engine::new(probe, candidates, config.concurrency, config.delay);

    let stop = engine.stop_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("\nReceived Ctrl+C, stopping gracefully...");
            stop.request_stop();
        }
    });

    let report = engine.run(verbose).await;

    let reporter = ConsoleReporter::new();
    reporter.print_hits(&report);
    reporter.print_summary(&report);

    let path = output.as_deref().unwrap_or("found.json");
    JsonExporter::export(&report, path)?;
    println!("Results saved to {}", path);

    Ok(())
}

fn load_json_map(path: Option<&str>) -> Result<HashMap<String, String>> {
    let Some(path) = path else {
        return Ok(HashMap::new());
    };
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path))
}
