use anyhow::Result;
use reqwest::Client;
use sheetboard::{
    aggregate::aggregate,
    config::Config,
    fetch::{self, LoadOutcome},
    render,
    views::{self, ViewSpec},
};
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

const HEARING_WINDOW_DAYS: i64 = 14;
const PERFORMANCE_WINDOW_DAYS: i64 = 7;

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) load configuration ───────────────────────────────────────
    let config = match std::env::var("SHEETBOARD_CONFIG") {
        Ok(path) => {
            info!(path = %path, "loading config");
            Config::load(&path)?
        }
        Err(_) => {
            info!("no SHEETBOARD_CONFIG set; using built-in sources");
            Config::default()
        }
    };
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::new();

    // ─── 3) fetch all three sheets concurrently ──────────────────────
    let panels: Vec<(&str, String, ViewSpec)> = vec![
        (
            "Officer Pending Tasks",
            config.sources.pending.clone(),
            views::pending_tasks(),
        ),
        (
            "Upcoming Court Cases (14 Days)",
            config.sources.court_cases.clone(),
            views::upcoming_hearings(HEARING_WINDOW_DAYS),
        ),
        (
            "Officer Performance (Last 7 Days)",
            config.sources.performance.clone(),
            views::performance(PERFORMANCE_WINDOW_DAYS),
        ),
    ];

    let mut handles = Vec::with_capacity(panels.len());
    for (title, source, view) in panels {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            info!(title, "loading");
            let outcome = fetch::load(&client, &source, timeout).await;
            (title, view, outcome)
        }));
    }

    // ─── 4) aggregate and render each panel ──────────────────────────
    for handle in handles {
        let (title, view, outcome) = handle.await?;
        match outcome {
            LoadOutcome::Loaded(table) => {
                let result = aggregate(&table, &view);
                println!("{}", render::panel(title, &result));
            }
            failed => {
                error!(title, outcome = ?failed, "load failed");
                println!("{}", render::load_failure(title, &failed));
            }
        }
    }

    info!("render cycle complete");
    Ok(())
}
