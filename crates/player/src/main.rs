use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use radio_player::client::StationClient;
use radio_player::config::PlayerConfig;
use radio_player::driver::{self, Control};
use radio_player::sink::SimulatedSink;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "radio_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = PlayerConfig::from_env();
    tracing::info!(
        station = %config.station_url,
        speed = config.playback_speed,
        "Loaded player configuration"
    );

    let (tx, rx) = mpsc::channel(16);
    // Start playing as soon as something is loaded.
    let _ = tx.send(Control::Play).await;
    tokio::spawn(read_controls(tx));

    let client = StationClient::new(config.station_url);
    let sink = SimulatedSink::new(config.default_track_secs, config.playback_speed);

    if let Err(e) = driver::run(&client, sink, rx).await {
        tracing::error!(error = %e, "Player stopped");
        std::process::exit(1);
    }
}

/// Map stdin lines to controls: `p` play, `s` pause, `l` like/unlike,
/// `q` quit.
async fn read_controls(tx: mpsc::Sender<Control>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let control = match line.trim() {
            "p" | "play" => Control::Play,
            "s" | "pause" => Control::Pause,
            "l" | "like" => Control::ToggleLike,
            "q" | "quit" => Control::Quit,
            "" => continue,
            other => {
                tracing::info!(input = other, "Unknown command (p, s, l, q)");
                continue;
            }
        };
        if tx.send(control).await.is_err() {
            break;
        }
    }
}
