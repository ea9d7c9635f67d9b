//! The player event loop.
//!
//! One task multiplexes the push channel, the audio sink and listener
//! controls with `tokio::select!`, feeds each input to the [`Player`] and
//! carries out the resulting commands before taking the next input.

use std::collections::{HashSet, VecDeque};

use futures::StreamExt;
use radio_core::dj;
use radio_core::types::DbId;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;

use crate::client::{parse_push_message, ClientError, PushMessage, StationClient};
use crate::machine::{Command, Player, PlayerEvent};
use crate::sink::{AudioSink, SinkEvent};

/// Listener input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Play,
    Pause,
    /// Like the loaded track, or remove the like if already given.
    ToggleLike,
    Quit,
}

enum Input {
    Push(Option<Result<Message, tokio_tungstenite::tungstenite::Error>>),
    Sink(SinkEvent),
    Control(Control),
}

struct Driver<'a, S> {
    client: &'a StationClient,
    sink: S,
    player: Player,
    liked: HashSet<DbId>,
}

/// Run the player until the listener quits or the push channel closes.
///
/// There is no reconnect: a closed or broken push channel ends the loop
/// with an error.
pub async fn run<S: AudioSink>(
    client: &StationClient,
    sink: S,
    mut controls: mpsc::Receiver<Control>,
) -> Result<(), ClientError> {
    // Subscribe before bootstrapping so no change is missed in between.
    let mut push = client.connect_push().await?;

    let mut driver = Driver {
        client,
        sink,
        player: Player::new(client.stream_base()),
        liked: HashSet::new(),
    };

    let snapshot = client.current().await?;
    tracing::info!(
        listeners = snapshot.listener_count,
        on_air = snapshot.is_playing,
        "Station snapshot received"
    );
    driver
        .dispatch(PlayerEvent::Bootstrapped(snapshot.track))
        .await;

    loop {
        let input = tokio::select! {
            frame = push.next() => Input::Push(frame),
            event = driver.sink.next_event() => Input::Sink(event),
            Some(control) = controls.recv() => Input::Control(control),
        };

        match input {
            Input::Push(Some(Ok(Message::Text(text)))) => match parse_push_message(&text) {
                Ok(PushMessage::TrackChanged(track)) => {
                    tracing::debug!(track_id = track.id, "Track change pushed");
                    driver.dispatch(PlayerEvent::TrackPushed(track)).await;
                }
                Ok(PushMessage::ListenerCount(count)) => {
                    tracing::info!(count, "Listeners tuned in");
                }
                Err(e) => tracing::warn!(error = %e, "Ignoring unrecognised push message"),
            },
            Input::Push(Some(Ok(Message::Close(_)))) | Input::Push(None) => {
                return Err(ClientError::Protocol("Push channel closed".into()));
            }
            Input::Push(Some(Ok(_))) => {}
            Input::Push(Some(Err(e))) => {
                return Err(ClientError::Protocol(e.to_string()));
            }
            Input::Sink(SinkEvent::Progress(position)) => {
                driver.dispatch(PlayerEvent::Progress(position)).await;
            }
            Input::Sink(SinkEvent::Ended) => {
                tracing::debug!("Playback ended");
                driver.dispatch(PlayerEvent::Ended).await;
            }
            Input::Control(Control::Play) => driver.dispatch(PlayerEvent::PlayPressed).await,
            Input::Control(Control::Pause) => driver.dispatch(PlayerEvent::PausePressed).await,
            Input::Control(Control::ToggleLike) => driver.toggle_like().await,
            Input::Control(Control::Quit) => {
                tracing::info!("Listener quit");
                let _ = driver.sink.pause();
                return Ok(());
            }
        }
    }
}

impl<S: AudioSink> Driver<'_, S> {
    /// Feed one event to the player and carry out every command it yields,
    /// including those produced by the advance round trip.
    async fn dispatch(&mut self, event: PlayerEvent) {
        let mut pending: VecDeque<Command> = self.player.handle(event).into();

        while let Some(command) = pending.pop_front() {
            match command {
                Command::LoadAudio { url } => self.load(&url),
                Command::StartAudio => {
                    if let Err(e) = self.sink.play() {
                        tracing::warn!(error = %e, "Failed to start audio");
                    }
                }
                Command::PauseAudio => {
                    if let Err(e) = self.sink.pause() {
                        tracing::warn!(error = %e, "Failed to pause audio");
                    }
                }
                Command::RequestAdvance => {
                    let outcome = match self.client.advance().await {
                        Ok(track) => {
                            tracing::info!(track_id = track.id, "Station advanced");
                            PlayerEvent::AdvanceCompleted(track)
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "Advance request failed");
                            PlayerEvent::AdvanceFailed
                        }
                    };
                    pending.extend(self.player.handle(outcome));
                }
            }
        }
    }

    fn load(&mut self, url: &str) {
        let Some(track) = self.player.current_track() else {
            return;
        };
        let duration = track.duration.map(|secs| secs as f64);

        let message = dj::station_message(&track.title, &mut rand::rng());
        tracing::info!(
            track_id = track.id,
            title = %track.title,
            mood = %track.mood,
            likes = track.likes,
            "{message}"
        );

        if let Err(e) = self.sink.load(url, duration) {
            tracing::warn!(error = %e, url, "Failed to load audio");
        }
    }

    async fn toggle_like(&mut self) {
        let Some(track_id) = self.player.current_track().map(|t| t.id) else {
            tracing::info!("Nothing on air to like");
            return;
        };

        let result = if self.liked.contains(&track_id) {
            self.client.unlike(track_id).await.map(|likes| {
                self.liked.remove(&track_id);
                likes
            })
        } else {
            match self.client.like(track_id).await {
                Ok(likes) => {
                    self.liked.insert(track_id);
                    Ok(likes)
                }
                Err(e) if e.is_already_liked() => {
                    self.liked.insert(track_id);
                    tracing::info!(track_id, "Already liked");
                    return;
                }
                Err(e) => Err(e),
            }
        };

        match result {
            Ok(likes) => tracing::info!(
                track_id,
                liked = self.liked.contains(&track_id),
                likes,
                "Like updated"
            ),
            Err(e) => tracing::warn!(error = %e, track_id, "Like request failed"),
        }
    }
}
