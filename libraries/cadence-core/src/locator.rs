//! Embed locator parsing
//!
//! Users paste full video-platform page URLs. The embedded player wants the
//! bare video id, so this module pulls it out of the common URL shapes
//! (`watch?v=`, `youtu.be/`, `/embed/`, `/v/`). Extraction failure is an
//! expected outcome for arbitrary pasted text, hence `Option` rather than
//! an error.

use url::Url;

/// Platform video ids are fixed-width
const EMBED_ID_LEN: usize = 11;

/// Extract the embed video id from a pasted URL
///
/// Returns `None` when the input is not a URL, not a known video-platform
/// host, or carries no well-formed id.
///
/// # Example
///
/// ```rust
/// use cadence_core::locator::extract_embed_id;
///
/// let id = extract_embed_id("https://www.youtube.com/watch?v=jfKfPfyJRdk");
/// assert_eq!(id.as_deref(), Some("jfKfPfyJRdk"));
///
/// assert!(extract_embed_id("https://example.com/song.mp3").is_none());
/// ```
#[must_use]
pub fn extract_embed_id(locator: &str) -> Option<String> {
    let url = Url::parse(locator).ok()?;
    let host = url.host_str()?;

    let candidate = if host == "youtu.be" {
        url.path_segments()?.next().map(str::to_owned)
    } else if host == "youtube.com" || host.ends_with(".youtube.com") {
        match url.path() {
            "/watch" => url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned()),
            _ => {
                let mut segments = url.path_segments()?;
                match segments.next() {
                    Some("embed" | "v") => segments.next().map(str::to_owned),
                    _ => None,
                }
            }
        }
    } else {
        None
    };

    candidate.filter(|id| is_valid_embed_id(id))
}

/// Whether a pasted locator points at the embed platform at all
///
/// Cheaper than full extraction; used to classify user input before
/// deciding which backend a track belongs to.
#[must_use]
pub fn is_embed_locator(locator: &str) -> bool {
    extract_embed_id(locator).is_some()
}

fn is_valid_embed_id(id: &str) -> bool {
    id.len() == EMBED_ID_LEN
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
