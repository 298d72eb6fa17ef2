pub mod kind;

pub use kind::MediaKind;

use serde::{Deserialize, Serialize};

/// Format descriptor of a single selectable track.
///
/// Every numeric property is optional; `None` means the source did not
/// report a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackFormat {
    pub kind: MediaKind,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub frame_rate: Option<f32>,
    /// Bits per second
    pub bitrate: Option<u64>,
    /// Codec identifier, e.g. `avc1.64001f`
    pub codecs: Option<String>,
    /// Language tag, `und` when undefined
    pub language: Option<String>,
    pub channel_count: Option<u32>,
    pub sample_rate: Option<u32>,
}

impl TrackFormat {
    /// Video track with the given dimensions
    pub fn video(width: u32, height: u32) -> Self {
        Self {
            kind: MediaKind::Video,
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn audio() -> Self {
        Self {
            kind: MediaKind::Audio,
            ..Self::default()
        }
    }

    pub fn text() -> Self {
        Self {
            kind: MediaKind::Text,
            ..Self::default()
        }
    }

    /// Empty descriptor whose kind is derived from a MIME type
    pub fn from_mime_type(mime_type: &str) -> Self {
        Self {
            kind: MediaKind::from_mime_type(mime_type),
            ..Self::default()
        }
    }

    pub fn with_frame_rate(mut self, frame_rate: f32) -> Self {
        self.frame_rate = Some(frame_rate);
        self
    }

    pub fn with_bitrate(mut self, bitrate: u64) -> Self {
        self.bitrate = Some(bitrate);
        self
    }

    pub fn with_codecs(mut self, codecs: impl Into<String>) -> Self {
        self.codecs = Some(codecs.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_channels(mut self, channel_count: u32, sample_rate: u32) -> Self {
        self.channel_count = Some(channel_count);
        self.sample_rate = Some(sample_rate);
        self
    }
}
