use chili_ai_common::{
    ClassifierSession, HistoryStore, PredictionResult, PredictionState, HISTORY_KEY,
};
use chili_ai_rust::{cli, client, config, error, render, store};
use clap::Parser;
use cli::{Cli, Commands};
use client::{ImageUpload, PredictClient};
use config::Config;
use error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::process::ExitCode;
use std::time::Duration;
use store::FileStore;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", render::render_error(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Predict {
            image,
            json,
            no_history,
        } => {
            let config = Config::load_or_default();
            let upload = ImageUpload::from_path(&image)?;
            let client = PredictClient::new(
                config.api_url(cli.api_url.as_deref()),
                config.timeout_seconds,
            )?;
            log::info!("Endpoint: {}", client.url());

            let pb = spinner("Menganalisis citra cabai...");
            let outcome = client.predict(&upload).await;
            pb.finish_and_clear();

            if no_history {
                return print_result(&outcome?, json);
            }

            let history_store = FileStore::new(Config::app_dir()?);
            let mut session = ClassifierSession::new(&history_store);
            let ticket = session.begin_request(upload.file_name.clone());
            session.complete(ticket, outcome);
            match session.state() {
                PredictionState::Success(result) => print_result(result, json),
                PredictionState::Failed(err) => Err(err.clone().into()),
                PredictionState::Idle | PredictionState::Loading => Ok(()),
            }
        }

        Commands::History { clear, yes, json } => {
            let history_store = FileStore::new(Config::app_dir()?);
            let mut history = HistoryStore::open(&history_store);

            if clear {
                let confirmed = yes
                    || dialoguer::Confirm::new()
                        .with_prompt("Hapus semua riwayat analisis?")
                        .default(false)
                        .interact()?;
                if confirmed {
                    history.clear()?;
                    println!("✔ Riwayat dihapus");
                }
            } else if json {
                println!("{}", serde_json::to_string_pretty(history.list())?);
            } else {
                print!("{}", render::render_history(history.list()));
            }
            Ok(())
        }

        Commands::Tips { label } => {
            print!("{}", render::render_tips_for(&label));
            Ok(())
        }

        Commands::Config { set_api_url, show } => {
            let mut config = Config::load_or_default();

            if let Some(url) = set_api_url {
                config.set_api_url(url)?;
                println!("✔ URL API disimpan");
            }

            if show {
                println!("Konfigurasi:");
                println!("  URL API: {}", config.api_url(cli.api_url.as_deref()));
                println!("  Timeout: {} detik", config.timeout_seconds);
                let history_path = FileStore::new(Config::app_dir()?).path_for(HISTORY_KEY);
                println!("  Riwayat: {}", history_path.display());
            }
            Ok(())
        }
    }
}

fn print_result(result: &PredictionResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print!("{}", render::render_result(result));
    }
    Ok(())
}
