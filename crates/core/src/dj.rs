//! On-air DJ chatter shown alongside the now-playing track.
//!
//! Lines are picked at random from small fixed pools; callers pass the RNG
//! so tests can seed it.

use rand::seq::IndexedRandom;
use rand::Rng;

/// DJ persona name used in sign-offs.
pub const DJ_NAME: &str = "Signal Thief";

/// Station identifier appended to intros.
pub const STATION_ID: &str = "Pirate.fm";

const INTROS: &[&str] = &[
    "You're locked in with the underground.",
    "Welcome back to the unlicensed airwaves.",
    "The signal is strong tonight.",
    "Somewhere in the static, a song is waiting.",
    "Coming to you from an undisclosed location.",
    "Keep your dial right where it is.",
];

const OUTROS: &[&str] = &[
    "Keep that dial locked. More incoming.",
    "Another transmission from the void.",
    "Stay tuned. The frequency holds.",
    "That one was for the night shift.",
];

/// Pick a random intro line, prefixed with the DJ name and station id.
pub fn intro<R: Rng + ?Sized>(rng: &mut R) -> String {
    let line = INTROS.choose(rng).copied().unwrap_or_default();
    format!("This is {DJ_NAME}. {line} {STATION_ID}")
}

/// Pick a random outro line.
pub fn outro<R: Rng + ?Sized>(rng: &mut R) -> String {
    let line = OUTROS.choose(rng).copied().unwrap_or_default();
    format!("{line} -{DJ_NAME}")
}

/// Compose the full message displayed when `track_title` starts.
pub fn station_message<R: Rng + ?Sized>(track_title: &str, rng: &mut R) -> String {
    [
        intro(rng),
        format!("Now spinning: {track_title}"),
        outro(rng),
    ]
    .join(" | ")
}
