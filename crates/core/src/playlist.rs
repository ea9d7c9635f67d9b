//! Track rotation rule for the station's single playlist pointer.
//!
//! The catalog is rotated in ascending id order. The database layer loads
//! the ids and the current pointer, asks [`next_track_id`] for the
//! successor, and persists the answer inside one transaction.

use crate::types::DbId;

/// Choose the track that follows `current` in a catalog of `sorted_ids`.
///
/// `sorted_ids` must be in ascending order. The successor of the last id
/// wraps around to the first one. A station with no pointer yet is on air
/// with the first id (see [`effective_current_id`]), so it advances to the
/// second. A `current` id that is not part of the catalog (deleted track)
/// falls back to the first id.
///
/// Returns `None` only when the catalog is empty.
pub fn next_track_id(sorted_ids: &[DbId], current: Option<DbId>) -> Option<DbId> {
    let first = *sorted_ids.first()?;

    let current = current.unwrap_or(first);
    match sorted_ids.binary_search(&current).ok() {
        Some(index) => Some(sorted_ids[(index + 1) % sorted_ids.len()]),
        None => Some(first),
    }
}

/// Resolve which track should be reported as "now playing".
///
/// The pointer wins when it names an existing track. Otherwise the first
/// track in id order is reported, without moving the pointer.
pub fn effective_current_id(sorted_ids: &[DbId], pointer: Option<DbId>) -> Option<DbId> {
    match pointer {
        Some(id) if sorted_ids.binary_search(&id).is_ok() => Some(id),
        _ => sorted_ids.first().copied(),
    }
}
