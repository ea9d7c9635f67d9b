//! Audio file references: resolution against the media root, content
//! types, and HTTP byte-range arithmetic.
//!
//! Track rows store a `file_path` that is either catalog-relative
//! (`/music/synthwave/neon.mp3`, `music/neon.mp3`) or an external URL.
//! Only catalog-relative references can be streamed.

use std::path::{Component, Path, PathBuf};

/// Resolve a track's file reference to a path under `media_root`.
///
/// Returns `None` for references that cannot name a local catalog file:
/// empty strings, URLs (`scheme://...`), and paths that would escape the
/// root through `..` or a drive/root prefix after the leading `/` has been
/// stripped.
pub fn resolve_media_path(media_root: &Path, file_ref: &str) -> Option<PathBuf> {
    let trimmed = file_ref.trim();
    if trimmed.is_empty() || trimmed.contains("://") {
        return None;
    }

    let relative = Path::new(trimmed.trim_start_matches('/'));
    let mut resolved = media_root.to_path_buf();
    let mut pushed = false;
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                resolved.push(part);
                pushed = true;
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }

    pushed.then_some(resolved)
}

/// Map a file name to an audio content type by its extension.
///
/// Returns `None` for anything that is not a known audio format, including
/// dotfiles and extensionless names. Such files are never streamed.
pub fn audio_content_type(path: &str) -> Option<&'static str> {
    let ext = Path::new(path).extension()?.to_str()?.to_lowercase();
    let content_type = match ext.as_str() {
        "mp3" => "audio/mpeg",
        "ogg" | "oga" => "audio/ogg",
        "opus" => "audio/opus",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "m4a" | "aac" => "audio/aac",
        "webm" => "audio/webm",
        _ => return None,
    };
    Some(content_type)
}

/// Outcome of matching a `Range` header against a file size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteRange {
    /// No usable range: serve the whole file.
    Full,
    /// Serve the inclusive byte span `start..=end`.
    Partial { start: u64, end: u64 },
    /// The range lies outside the file.
    Unsatisfiable,
}

impl ByteRange {
    /// Interpret an optional `Range` header value for a file of `file_size`
    /// bytes. Multi-range and suffix (`bytes=-N`) requests are served in full.
    pub fn from_header(header: Option<&str>, file_size: u64) -> Self {
        let Some((start, end)) = header.and_then(parse_range_header) else {
            return Self::Full;
        };

        if file_size == 0 || start >= file_size {
            return Self::Unsatisfiable;
        }

        let end = end.map_or(file_size - 1, |e| e.min(file_size - 1));
        if start > end {
            return Self::Unsatisfiable;
        }

        Self::Partial { start, end }
    }
}

/// Parse a `Range: bytes=START-END` header value.
/// Returns `(start, optional_end)`.
fn parse_range_header(range: &str) -> Option<(u64, Option<u64>)> {
    let range = range.trim().strip_prefix("bytes=")?;
    if range.contains(',') {
        return None;
    }
    let (start, end) = range.split_once('-')?;
    let start = start.trim().parse::<u64>().ok()?;
    let end = match end.trim() {
        "" => None,
        value => Some(value.parse::<u64>().ok()?),
    };
    Some((start, end))
}
