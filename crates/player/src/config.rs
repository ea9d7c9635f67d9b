/// Player configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Station HTTP base URL.
    pub station_url: String,
    /// Simulated playback rate (default: `1.0`).
    pub playback_speed: f64,
    /// Track length assumed when the catalog has none (default: `180`).
    pub default_track_secs: f64,
}

impl PlayerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                 |
    /// |----------------------|-------------------------|
    /// | `STATION_URL`        | `http://localhost:3000` |
    /// | `PLAYBACK_SPEED`     | `1.0`                   |
    /// | `DEFAULT_TRACK_SECS` | `180`                   |
    pub fn from_env() -> Self {
        let station_url =
            std::env::var("STATION_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        let playback_speed: f64 = std::env::var("PLAYBACK_SPEED")
            .unwrap_or_else(|_| "1.0".into())
            .parse()
            .expect("PLAYBACK_SPEED must be a number");
        assert!(playback_speed > 0.0, "PLAYBACK_SPEED must be positive");

        let default_track_secs: f64 = std::env::var("DEFAULT_TRACK_SECS")
            .unwrap_or_else(|_| "180".into())
            .parse()
            .expect("DEFAULT_TRACK_SECS must be a number");
        assert!(default_track_secs > 0.0, "DEFAULT_TRACK_SECS must be positive");

        Self {
            station_url,
            playback_speed,
            default_track_secs,
        }
    }
}
