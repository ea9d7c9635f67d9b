//! Listener-side player state machine.
//!
//! [`Player`] is synchronous and side-effect free: every [`PlayerEvent`] is
//! handled to completion and answered with the [`Command`]s the driver must
//! carry out (load audio, start or pause it, ask the station to advance).
//! The player never picks the next track itself; it only requests an
//! advance and reacts to whatever track the station reports.

use crate::track::Track;

/// Where playback currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerState {
    /// Nothing loaded yet, or the station has no tracks.
    Idle,
    /// Track fetched and loaded, not audible.
    Loaded { track: Track },
    /// Audible; `position` is seconds into the track.
    Playing { track: Track, position: f64 },
    /// Stopped by the listener; `position` is kept for resuming.
    Paused { track: Track, position: f64 },
}

/// Inputs to the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    /// Result of the initial `/current` fetch.
    Bootstrapped(Option<Track>),
    /// The station announced a new track on the push channel.
    TrackPushed(Track),
    /// Our own advance request returned this track.
    AdvanceCompleted(Track),
    /// Our own advance request failed.
    AdvanceFailed,
    PlayPressed,
    PausePressed,
    /// Playback position report from the audio sink.
    Progress(f64),
    /// The audio sink reached the end of the track.
    Ended,
}

/// Side effects requested by the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadAudio { url: String },
    StartAudio,
    PauseAudio,
    RequestAdvance,
}

/// The player state machine.
#[derive(Debug)]
pub struct Player {
    state: PlayerState,
    /// Set when an advance has been requested for the current playback and
    /// not yet answered; suppresses repeated `Ended` events.
    advance_pending: bool,
    stream_base: String,
}

impl Player {
    /// Create an idle player. `stream_base` is prefixed to a track id to
    /// form its audio URL, e.g. `http://host:3000/api/v1/stream`.
    pub fn new(stream_base: impl Into<String>) -> Self {
        Self {
            state: PlayerState::Idle,
            advance_pending: false,
            stream_base: stream_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    pub fn advance_pending(&self) -> bool {
        self.advance_pending
    }

    /// The loaded track, if any.
    pub fn current_track(&self) -> Option<&Track> {
        match &self.state {
            PlayerState::Idle => None,
            PlayerState::Loaded { track }
            | PlayerState::Playing { track, .. }
            | PlayerState::Paused { track, .. } => Some(track),
        }
    }

    /// Audio URL for a track.
    pub fn stream_url(&self, track: &Track) -> String {
        format!("{}/{}", self.stream_base, track.id)
    }

    /// Apply one event and return the commands it triggers, in order.
    pub fn handle(&mut self, event: PlayerEvent) -> Vec<Command> {
        match event {
            PlayerEvent::Bootstrapped(Some(track))
                if matches!(self.state, PlayerState::Idle) =>
            {
                self.switch_to(track, false)
            }
            PlayerEvent::Bootstrapped(_) => Vec::new(),
            PlayerEvent::TrackPushed(track) | PlayerEvent::AdvanceCompleted(track) => {
                let autoplay = self.wants_playback();
                self.switch_to(track, autoplay)
            }
            PlayerEvent::AdvanceFailed => {
                if self.advance_pending {
                    self.advance_pending = false;
                    if let PlayerState::Playing { track, .. } = &self.state {
                        self.state = PlayerState::Loaded {
                            track: track.clone(),
                        };
                    }
                }
                Vec::new()
            }
            PlayerEvent::PlayPressed => self.play(),
            PlayerEvent::PausePressed => self.pause(),
            PlayerEvent::Progress(seconds) => {
                if let PlayerState::Playing { position, .. } = &mut self.state {
                    *position = seconds;
                }
                Vec::new()
            }
            PlayerEvent::Ended => match self.state {
                PlayerState::Playing { .. } if !self.advance_pending => {
                    self.advance_pending = true;
                    vec![Command::RequestAdvance]
                }
                _ => Vec::new(),
            },
        }
    }

    /// Whether the listener intends audio to be playing: either it is, or
    /// it just ended and we are waiting for the next track.
    fn wants_playback(&self) -> bool {
        matches!(self.state, PlayerState::Playing { .. }) || self.advance_pending
    }

    fn switch_to(&mut self, track: Track, autoplay: bool) -> Vec<Command> {
        let same_track = self.current_track().is_some_and(|t| t.id == track.id);
        if same_track && !self.advance_pending {
            // Metadata refresh (like count) for the track already loaded.
            match &mut self.state {
                PlayerState::Loaded { track: t }
                | PlayerState::Playing { track: t, .. }
                | PlayerState::Paused { track: t, .. } => *t = track,
                PlayerState::Idle => {}
            }
            return Vec::new();
        }

        self.advance_pending = false;
        let mut commands = vec![Command::LoadAudio {
            url: self.stream_url(&track),
        }];

        if autoplay {
            self.state = PlayerState::Playing {
                track,
                position: 0.0,
            };
            commands.push(Command::StartAudio);
        } else {
            self.state = PlayerState::Loaded { track };
        }
        commands
    }

    fn play(&mut self) -> Vec<Command> {
        let (track, position) = match &self.state {
            PlayerState::Loaded { track } => (track.clone(), 0.0),
            PlayerState::Paused { track, position } => (track.clone(), *position),
            PlayerState::Idle | PlayerState::Playing { .. } => return Vec::new(),
        };
        self.state = PlayerState::Playing { track, position };
        vec![Command::StartAudio]
    }

    fn pause(&mut self) -> Vec<Command> {
        match &self.state {
            PlayerState::Playing { track, position } if !self.advance_pending => {
                self.state = PlayerState::Paused {
                    track: track.clone(),
                    position: *position,
                };
                vec![Command::PauseAudio]
            }
            _ => Vec::new(),
        }
    }
}
