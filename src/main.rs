#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use portfolio_prompt::app::config::AppConfig;
use portfolio_prompt::log_warn;
use tracing_subscriber::prelude::*;

const APP_NAME: &str = "portfolio-prompt";

fn log_dir() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("com", "", APP_NAME).map(|dirs| dirs.data_dir().join("logs"))
}

fn init_logging(config: &AppConfig) {
    let Some(log_dir) = log_dir() else {
        eprintln!("No home directory found; file logging disabled");
        return;
    };
    let _ = std::fs::create_dir_all(&log_dir);
    let log_path = log_dir.join("portfolio-prompt.log");

    let file = match std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to open log file {:?}: {}", log_path, e);
            return;
        }
    };

    // Owner read/write only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if let Ok(metadata) = file.metadata() {
            let mut perms = metadata.permissions();
            perms.set_mode(0o600);
            if let Err(e) = std::fs::set_permissions(&log_path, perms) {
                eprintln!("[SECURITY] Failed to set log file permissions: {}", e);
            }
        }
    }

    // RUST_LOG wins over the configured filter
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::builder().parse(&config.log_filter))
        .unwrap_or_else(|e| {
            eprintln!("Invalid log filter {:?}: {}", config.log_filter, e);
            tracing_subscriber::EnvFilter::new("portfolio_prompt=info")
        });

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false), // No ANSI colors in file
    );

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return;
    }

    // Bridge log crate events to tracing (for eframe, egui, winit, etc.)
    // This must be done AFTER setting the tracing subscriber
    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize log-to-tracing bridge: {}", e);
    }

    tracing::info!("Logging initialized to: {:?}", log_path);
}

fn setup_panic_handler() {
    // Writes to a crash log even if logging hasn't been initialized yet
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_msg = format!(
            "Portfolio Prompt Generator crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n\
             Backtrace:\n{:?}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.payload().downcast_ref::<String>().map(|s| s.as_str()))
                .unwrap_or("unknown panic"),
            std::backtrace::Backtrace::force_capture()
        );

        if let Some(log_dir) = log_dir() {
            let _ = std::fs::create_dir_all(&log_dir);
            let crash_log_path = log_dir.join("crash.log");

            if let Ok(mut file) = std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&crash_log_path)
            {
                use std::io::Write;
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "\n=== CRASH at {} ===\n{}", timestamp, crash_msg);
            }

            eprintln!("\n{}", crash_msg);
            eprintln!("Crash log written to: {:?}", crash_log_path);
        } else {
            eprintln!("\n{}", crash_msg);
        }
    }));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up panic handler BEFORE anything else to catch early crashes
    setup_panic_handler();

    let (config, config_error) = match AppConfig::try_load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    init_logging(&config);
    if let Some(e) = config_error {
        log_warn!("Ignoring config file, using defaults: {:#}", e);
    }

    tracing::info!(
        "{} {} starting ({}@{})",
        APP_NAME,
        env!("CARGO_PKG_VERSION"),
        env!("GIT_BRANCH"),
        env!("GIT_COMMIT")
    );

    // Clipboard writes run here; the UI thread only polls for their results
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("clipboard")
        .enable_all()
        .build()?;
    let handle = runtime.handle().clone();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Portfolio Prompt Generator")
            .with_inner_size([760.0, 860.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Portfolio Prompt Generator",
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(portfolio_prompt::PromptApp::new(
                cc, &config, handle,
            )))
        }),
    )?;

    runtime.shutdown_background();
    tracing::info!("{} exited", APP_NAME);
    Ok(())
}
