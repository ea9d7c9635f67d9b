//! Audio output.
//!
//! The driver talks to audio through [`AudioSink`]. [`SimulatedSink`] is a
//! clock-driven stand-in for a real decoder: it "plays" for the track's
//! duration (sped up by a factor) and then reports the end.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

/// How often a playing sink reports its position.
const PROGRESS_INTERVAL: Duration = Duration::from_secs(1);

/// Notifications from a sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SinkEvent {
    /// Seconds of track time played so far.
    Progress(f64),
    /// Reached the end of the loaded track.
    Ended,
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("No audio loaded")]
    NothingLoaded,
}

/// An audio output the player can drive.
pub trait AudioSink {
    /// Load `url`, replacing anything loaded before. Playback does not start.
    fn load(&mut self, url: &str, duration_secs: Option<f64>) -> Result<(), SinkError>;

    /// Start or resume playback.
    fn play(&mut self) -> Result<(), SinkError>;

    /// Stop audible output, keeping the position.
    fn pause(&mut self) -> Result<(), SinkError>;

    /// Wait for the next notification. Pending forever while nothing plays.
    ///
    /// Must be cancel safe: the driver drops this future whenever another
    /// input arrives first.
    fn next_event(&mut self) -> impl Future<Output = SinkEvent> + Send;
}

/// Timer-driven sink that plays nothing audible.
#[derive(Debug)]
pub struct SimulatedSink {
    default_duration: f64,
    speed: f64,
    loaded: Option<String>,
    duration: f64,
    /// Position at the last play/pause boundary.
    position: f64,
    /// When playback (re)started; `None` while paused.
    playing_since: Option<Instant>,
}

impl SimulatedSink {
    /// * `default_duration` - seconds used for tracks without a known length.
    /// * `speed`            - playback rate; `2.0` finishes tracks twice as fast.
    pub fn new(default_duration: f64, speed: f64) -> Self {
        Self {
            default_duration,
            speed,
            loaded: None,
            duration: default_duration,
            position: 0.0,
            playing_since: None,
        }
    }

    pub fn loaded_url(&self) -> Option<&str> {
        self.loaded.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing_since.is_some()
    }

    /// Current track position in seconds.
    pub fn position(&self) -> f64 {
        let played = self
            .playing_since
            .map_or(0.0, |since| since.elapsed().as_secs_f64() * self.speed);
        (self.position + played).min(self.duration)
    }

    fn remaining_wall_time(&self) -> Duration {
        let remaining = (self.duration - self.position()).max(0.0) / self.speed;
        Duration::from_secs_f64(remaining)
    }
}

impl AudioSink for SimulatedSink {
    fn load(&mut self, url: &str, duration_secs: Option<f64>) -> Result<(), SinkError> {
        self.loaded = Some(url.to_string());
        self.duration = duration_secs
            .filter(|d| *d > 0.0)
            .unwrap_or(self.default_duration);
        self.position = 0.0;
        self.playing_since = None;
        tracing::debug!(url, duration = self.duration, "Audio loaded");
        Ok(())
    }

    fn play(&mut self) -> Result<(), SinkError> {
        if self.loaded.is_none() {
            return Err(SinkError::NothingLoaded);
        }
        if self.playing_since.is_none() {
            self.playing_since = Some(Instant::now());
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<(), SinkError> {
        self.position = self.position();
        self.playing_since = None;
        Ok(())
    }

    async fn next_event(&mut self) -> SinkEvent {
        if self.playing_since.is_none() {
            return std::future::pending().await;
        }

        let remaining = self.remaining_wall_time();
        if remaining.is_zero() {
            self.position = self.duration;
            self.playing_since = None;
            return SinkEvent::Ended;
        }

        tokio::time::sleep(remaining.min(PROGRESS_INTERVAL)).await;
        SinkEvent::Progress(self.position())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    async fn next_with_timeout(sink: &mut SimulatedSink) -> SinkEvent {
        tokio::time::timeout(Duration::from_secs(2), sink.next_event())
            .await
            .expect("sink should report before the timeout")
    }

    #[test]
    fn play_requires_loaded_audio() {
        let mut sink = SimulatedSink::new(180.0, 1.0);
        assert_matches!(sink.play(), Err(SinkError::NothingLoaded));
    }

    #[test]
    fn unknown_duration_uses_default() {
        let mut sink = SimulatedSink::new(180.0, 1.0);
        sink.load("http://station/api/v1/stream/1", None).unwrap();
        assert_eq!(sink.duration, 180.0);
        sink.load("http://station/api/v1/stream/2", Some(0.0)).unwrap();
        assert_eq!(sink.duration, 180.0);
        sink.load("http://station/api/v1/stream/3", Some(42.0)).unwrap();
        assert_eq!(sink.duration, 42.0);
        assert_eq!(sink.loaded_url(), Some("http://station/api/v1/stream/3"));
    }

    #[tokio::test]
    async fn fast_playback_reaches_the_end() {
        // One second of track at 100x is 10ms of wall time.
        let mut sink = SimulatedSink::new(180.0, 100.0);
        sink.load("http://station/api/v1/stream/1", Some(1.0)).unwrap();
        sink.play().unwrap();

        let mut saw_end = false;
        for _ in 0..10 {
            match next_with_timeout(&mut sink).await {
                SinkEvent::Progress(position) => assert!(position <= 1.0),
                SinkEvent::Ended => {
                    saw_end = true;
                    break;
                }
            }
        }
        assert!(saw_end);
        assert!(!sink.is_playing());
        assert_eq!(sink.position(), 1.0);
    }

    #[tokio::test]
    async fn paused_sink_stays_silent() {
        let mut sink = SimulatedSink::new(180.0, 100.0);
        sink.load("http://station/api/v1/stream/1", Some(1.0)).unwrap();
        sink.play().unwrap();
        sink.pause().unwrap();

        let waited =
            tokio::time::timeout(Duration::from_millis(50), sink.next_event()).await;
        assert!(waited.is_err());
        assert!(!sink.is_playing());
    }
}
