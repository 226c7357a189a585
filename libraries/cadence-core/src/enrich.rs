//! Metadata enrichment for pasted locators
//!
//! When the user pastes a raw URL there is no tag data to read. An external
//! lookup (an oEmbed endpoint, typically) may supply a title/author pair;
//! when it cannot, the track is still accepted with placeholder metadata.
//! Enrichment failure is never fatal to queueing.

use crate::error::Result;
use crate::locator::extract_embed_id;
use crate::types::{SourceKind, Track};

/// Placeholder title for an embed locator nothing more is known about
const PLACEHOLDER_EMBED_TITLE: &str = "Untitled video";
/// Placeholder title for a plain stream URL
const PLACEHOLDER_STREAM_TITLE: &str = "Web audio";
/// Placeholder artist when the lookup supplies none
const PLACEHOLDER_ARTIST: &str = "Unknown";

/// Title/author pair supplied by an external lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteMetadata {
    /// Track title
    pub title: String,
    /// Uploader or channel name
    pub author: String,
}

/// External metadata lookup collaborator
///
/// Implementations usually perform network I/O; this crate only consumes
/// the result and never requires one to be present.
pub trait MetadataLookup {
    /// Resolve title/author for a pasted locator
    fn lookup(&self, locator: &str) -> Result<RemoteMetadata>;
}

impl Track {
    /// Build a track from a user-pasted locator
    ///
    /// Classifies the locator (an extractable embed id means
    /// [`SourceKind::StreamingEmbed`], anything else is treated as a
    /// directly streamable [`SourceKind::Local`] URL), derives a thumbnail
    /// cover for embeds, and applies the lookup result when one is
    /// available. A missing or failing lookup falls back to placeholders.
    pub fn from_remote_locator(
        id: impl Into<String>,
        locator: impl Into<String>,
        lookup: Option<&dyn MetadataLookup>,
    ) -> Self {
        let locator = locator.into();
        let embed_id = extract_embed_id(&locator);

        let (source, default_title, cover_url) = match &embed_id {
            Some(video_id) => (
                SourceKind::StreamingEmbed,
                PLACEHOLDER_EMBED_TITLE,
                Some(format!("https://img.youtube.com/vi/{video_id}/mqdefault.jpg")),
            ),
            None => (SourceKind::Local, PLACEHOLDER_STREAM_TITLE, None),
        };

        let (title, artist) = match lookup.map(|l| l.lookup(&locator)) {
            Some(Ok(meta)) => (meta.title, meta.author),
            Some(Err(err)) => {
                tracing::warn!(locator = %locator, error = %err, "metadata lookup failed, using placeholders");
                (default_title.to_owned(), PLACEHOLDER_ARTIST.to_owned())
            }
            None => (default_title.to_owned(), PLACEHOLDER_ARTIST.to_owned()),
        };

        let mut track = Track::new(id, title, artist, source, locator);
        track.cover_url = cover_url;
        track
    }
}
