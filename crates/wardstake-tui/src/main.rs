//! wardstake - a terminal staking front-end for Warden Protocol.

mod action;
mod app;
mod config;
mod event;
mod theme;
mod tui;
mod ui;

use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use tokio::sync::mpsc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use action::Action;
use app::App;
use config::ThemeConfig;
use event::{Event, EventHandler};
use theme::Theme;
use tui::Tui;
use wardstake_chain::{RestClient, StakeSubmitter, StakingQuery};
use wardstake_core::{RATE_DECIMALS, StakeRequest};

const DEFAULT_LCD_URL: &str = "http://localhost:1317";
const DEFAULT_SIGNER_URL: &str = "http://localhost:8555";
const REFRESH_INTERVAL_SECS: u64 = 30;

/// Request type for all chain operations.
#[derive(Debug)]
enum ChainRequest {
    /// Re-fetch the staking snapshot.
    Refresh,
    /// Submit a stake transaction through the signer bridge.
    SubmitStake(StakeRequest),
}

/// wardstake - stake WARD from your terminal.
#[derive(Parser, Debug)]
#[command(name = "wardstake")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Validator operator address to stake to
    #[arg(short, long)]
    validator: Option<String>,

    /// Chain LCD base URL
    #[arg(long = "lcd-url")]
    lcd_url: Option<String>,

    /// Signer bridge base URL
    #[arg(long = "signer-url")]
    signer_url: Option<String>,

    /// Decimal places of the gateway's scaled APR rate
    #[arg(long = "rate-decimals")]
    rate_decimals: Option<u32>,

    /// Write logs to this file (the alternate screen hides stderr)
    #[arg(long = "log-file")]
    log_file: Option<std::path::PathBuf>,

    /// Theme override (system, light, dark)
    #[arg(long)]
    theme: Option<ThemeArg>,
}

/// Theme argument that can be parsed from string.
#[derive(Debug, Clone)]
struct ThemeArg(ThemeConfig);

impl std::str::FromStr for ThemeArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(ThemeArg(ThemeConfig::System)),
            "light" => Ok(ThemeArg(ThemeConfig::Light)),
            "dark" => Ok(ThemeArg(ThemeConfig::Dark)),
            _ => Err(format!(
                "Unknown theme '{}'. Valid options: system, light, dark",
                s
            )),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install()?;

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("wardstake=info".parse()?)
        .add_directive("wardstake_chain=info".parse()?)
        .add_directive("wardstake_core=info".parse()?);

    if let Some(path) = &args.log_file {
        let file = std::fs::File::create(path)?;
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry().with(env_filter).init();
    }

    // CLI overrides config, config overrides defaults.
    let mut app_config = config::load_config().unwrap_or_default();
    if args.validator.is_some() {
        app_config.validator = args.validator.clone();
    }
    if args.lcd_url.is_some() {
        app_config.lcd_url = args.lcd_url.clone();
    }
    if args.signer_url.is_some() {
        app_config.signer_url = args.signer_url.clone();
    }
    if args.rate_decimals.is_some() {
        app_config.rate_decimals = args.rate_decimals;
    }
    if let Some(ThemeArg(theme)) = args.theme {
        app_config.theme = theme;
    }
    if let Err(e) = config::save_config(&app_config) {
        tracing::warn!("Failed to save config: {}", e);
    }

    let operator_address = app_config
        .validator
        .clone()
        .ok_or_else(|| eyre!("no validator configured; pass --validator <operator address>"))?;
    let lcd_url = app_config
        .lcd_url
        .clone()
        .unwrap_or_else(|| DEFAULT_LCD_URL.to_string());
    let signer_url = app_config
        .signer_url
        .clone()
        .unwrap_or_else(|| DEFAULT_SIGNER_URL.to_string());
    let rate_decimals = app_config.rate_decimals.unwrap_or(RATE_DECIMALS);

    // Theme detection must happen before entering raw mode.
    let theme = match app_config.theme {
        ThemeConfig::System => Theme::detect(),
        ThemeConfig::Light => Theme::Light,
        ThemeConfig::Dark => Theme::Dark,
    };

    const ACTION_CHANNEL_CAPACITY: usize = 100;
    let (action_tx, mut action_rx) = mpsc::channel::<Action>(ACTION_CHANNEL_CAPACITY);

    const REQUEST_CHANNEL_CAPACITY: usize = 16;
    let (request_tx, request_rx) = mpsc::channel::<ChainRequest>(REQUEST_CHANNEL_CAPACITY);

    let client = RestClient::new(lcd_url, signer_url);
    tokio::spawn(chain_task(client, operator_address, action_tx, request_rx));

    let mut app = App::new(theme, rate_decimals);

    let mut tui = Tui::new()?;
    tui.enter()?;

    let mut events = EventHandler::new(100);

    // Main loop
    loop {
        tui.draw(|frame| ui::render(frame, &app))?;

        tokio::select! {
            event = events.next() => {
                match event? {
                    Event::Tick => app.tick(),
                    Event::Key(key) => {
                        if let Some(action) = app.handle_key(key) {
                            match action {
                                Action::Refresh => {
                                    let _ = request_tx.send(ChainRequest::Refresh).await;
                                }
                                Action::SubmitStake(request) => {
                                    let _ = request_tx
                                        .send(ChainRequest::SubmitStake(request))
                                        .await;
                                }
                                other => app.apply(other),
                            }
                        }
                    }
                    Event::Resize(_, _) => {
                        // Terminal resize is handled automatically by ratatui
                    }
                }
            }
            Some(action) = action_rx.recv() => app.apply(action),
        }

        if app.should_quit {
            break;
        }
    }

    tui.exit()?;
    Ok(())
}

/// Chain worker: serves requests from the UI and refreshes the snapshot
/// periodically. The only task doing I/O.
async fn chain_task(
    client: RestClient,
    operator_address: String,
    action_tx: mpsc::Sender<Action>,
    mut request_rx: mpsc::Receiver<ChainRequest>,
) {
    // First tick fires immediately, covering the initial load.
    let mut refresh = tokio::time::interval(Duration::from_secs(REFRESH_INTERVAL_SECS));

    loop {
        tokio::select! {
            request = request_rx.recv() => match request {
                Some(ChainRequest::Refresh) => {
                    refresh_snapshot(&client, &operator_address, &action_tx).await;
                }
                Some(ChainRequest::SubmitStake(request)) => {
                    tracing::info!(
                        amount_uward = request.amount_uward,
                        validator = %request.validator_address,
                        "submitting stake request"
                    );
                    match client
                        .submit_stake_tx(request.amount_uward, &request.validator_address)
                        .await
                    {
                        Ok(result) => {
                            tracing::info!(tx_hash = %result.tx_hash, code = result.code, "stake tx broadcast");
                            let _ = action_tx.send(Action::StakeAccepted(result)).await;
                        }
                        Err(e) => {
                            tracing::warn!("stake submission failed: {e}");
                            let _ = action_tx.send(Action::StakeFailed(e.to_string())).await;
                        }
                    }
                    // A broadcast delegation moves stake; show it.
                    refresh_snapshot(&client, &operator_address, &action_tx).await;
                }
                None => break,
            },
            _ = refresh.tick() => {
                refresh_snapshot(&client, &operator_address, &action_tx).await;
            }
        }
    }
}

async fn refresh_snapshot(
    client: &RestClient,
    operator_address: &str,
    action_tx: &mpsc::Sender<Action>,
) {
    match client.snapshot(operator_address).await {
        Ok(snapshot) => {
            let _ = action_tx.send(Action::SetSnapshot(Box::new(snapshot))).await;
        }
        Err(e) => {
            tracing::warn!("snapshot refresh failed: {e}");
            let _ = action_tx
                .send(Action::SnapshotFailed(format!("Refresh failed: {e}")))
                .await;
        }
    }
}
