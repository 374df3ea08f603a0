// Main entry point
use clap::Parser;
use colored::Colorize;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use transchain::application::validate::{build_request, MAX_TEXT_CHARS};
use transchain::domain::error::AppError;
use transchain::domain::language::Language;
use transchain::infrastructure::config::{self, load_config, Config};
use transchain::infrastructure::providers::{libretranslate, lingva, mymemory};
use transchain::interfaces::cli::{Cli, EXIT_INTERRUPTED};
use transchain::presentation::theme::Theme;
use transchain::presentation::view::ViewState;
use transchain::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup graceful shutdown handler
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    // Spawn signal handler task
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for shutdown signal: {}", e);
        } else {
            let _ = shutdown_tx.send(());
        }
    });

    let cli = Cli::parse();
    let config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    // Handle commands (flags)
    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.edit_config {
        if let Some(config_path) = config::get_config_path() {
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
            // Run editor in blocking task
            tokio::task::spawn_blocking(move || {
                std::process::Command::new(editor).arg(&config_path).status()
            })
            .await??;
        } else {
            eprintln!("{}", "Config file not found".red());
        }
        return Ok(());
    }
    if cli.languages {
        print_languages();
        return Ok(());
    }

    let theme_name = cli.theme.as_deref().unwrap_or(config.theme.as_str());
    let theme = Theme::from_name(theme_name);
    let rtl_marks = config.rtl_marks;
    let state = AppState::new(config)?;

    if cli.status {
        print_status(&state, cli.timeout);
        return Ok(());
    }

    // Collect input
    let text = if cli.stdin {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        cli.text.join(" ")
    };

    if text.trim().is_empty() {
        eprint!("{}", ViewState::Empty.render(&theme, rtl_marks));
        std::process::exit(1);
    }

    let target = cli
        .to
        .clone()
        .unwrap_or_else(|| state.config.target_language.clone());
    let request = match build_request(&text, &cli.from, &target) {
        Ok(request) => request,
        Err(e) => exit_with_error(&theme, &e),
    };

    let chain = state.fallback_chain(cli.timeout.map(Duration::from_secs));
    let _guard = state.begin_translation()?;

    let result = {
        let spinner = if cli.json {
            None
        } else {
            ViewState::Loading.loading_indicator()
        };
        tokio::select! {
            result = chain.translate(&request) => result,
            Ok(()) = shutdown_rx => {
                drop(spinner);
                eprintln!("{}", "Translation interrupted".yellow());
                std::process::exit(EXIT_INTERRUPTED);
            }
        }
    };

    match result {
        Ok(result) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let view = ViewState::Output {
                    result,
                    target: request.target(),
                };
                print!("{}", view.render(&theme, rtl_marks));
            }
            Ok(())
        }
        Err(e) => exit_with_error(&theme, &e),
    }
}

fn exit_with_error(theme: &Theme, error: &AppError) -> ! {
    eprint!("{}", ViewState::Error(error.to_string()).render(theme, true));
    std::process::exit(1);
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &config::Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = logging.path.as_deref().filter(|p| !p.is_empty()) {
        // Log to file
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .init();
        return Ok(());
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn print_languages() {
    for lang in Language::all() {
        let rtl = if lang.rtl { "  (right-to-left)" } else { "" };
        println!("{:<4} {}{}", lang.code.bold(), lang.name, rtl.dimmed());
    }
}

fn print_status(state: &AppState, timeout_override: Option<u64>) {
    let config: &Config = &state.config;
    println!("{}", "transchain Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!(
        "Config: {}",
        config::get_config_path()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found (using defaults)".to_string())
    );
    println!(
        "Timeout: {}s per provider",
        timeout_override.unwrap_or(config.timeout_secs)
    );
    println!("Default target: {}", config.target_language);
    println!("Input limit: {} characters", MAX_TEXT_CHARS);

    let providers = [
        ("Lingva", &config.providers.lingva, lingva::DEFAULT_BASE_URL),
        ("MyMemory", &config.providers.mymemory, mymemory::DEFAULT_BASE_URL),
        (
            "LibreTranslate",
            &config.providers.libretranslate,
            libretranslate::DEFAULT_BASE_URL,
        ),
    ];
    for (i, (name, provider, default_url)) in providers.iter().enumerate() {
        let status = if provider.enabled {
            "enabled".green()
        } else {
            "disabled".red()
        };
        println!(
            "{}. {:<15} {:<9} {}",
            i + 1,
            name,
            status,
            provider.base_url_or(default_url)
        );
    }
}
