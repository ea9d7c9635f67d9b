//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod headline_repo;
pub mod like_repo;
pub mod playlist_repo;
pub mod track_repo;

pub use headline_repo::HeadlineRepo;
pub use like_repo::LikeRepo;
pub use playlist_repo::PlaylistRepo;
pub use track_repo::TrackRepo;
