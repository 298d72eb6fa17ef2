//! Track Label Module
//!
//! Builds the short display name shown for a track in the selection list.

pub mod fragments;

use crate::config::LabelConfig;
use crate::error::LabelError;
use crate::tracks::{MediaKind, TrackFormat};
use tracing::{debug, trace};

/// Builds display labels for tracks
#[derive(Debug, Clone, Default)]
pub struct TrackLabelBuilder {
    config: LabelConfig,
}

impl TrackLabelBuilder {
    pub fn new(config: LabelConfig) -> Self {
        Self { config }
    }

    /// Builder configured from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, LabelError> {
        Ok(Self::new(LabelConfig::from_toml_str(content)?))
    }

    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    /// Build the label for a track.
    ///
    /// Video: resolution, frame rate, bitrate, codec, HDR.
    /// Audio: language, channels and sample rate, bitrate, codec, 5.1 hint.
    /// Anything else: language, bitrate, codec.
    pub fn build(&self, format: &TrackFormat) -> String {
        let parts = match format.kind {
            MediaKind::Video => vec![
                fragments::resolution(format, self.config.resolution_tolerance),
                fragments::frame_rate(format),
                fragments::bitrate(format),
                fragments::codec(format),
                fragments::hdr(format),
            ],
            MediaKind::Audio => vec![
                fragments::language(format),
                fragments::audio_properties(format),
                fragments::bitrate(format),
                fragments::codec(format),
                fragments::channel_hint(format, self.config.surround_bitrate_threshold),
            ],
            MediaKind::Text | MediaKind::Other => vec![
                fragments::language(format),
                fragments::bitrate(format),
                fragments::codec(format),
            ],
        };

        let label = parts.into_iter().fold(String::new(), |acc, part| {
            join_with_separator(&acc, &part, &self.config.separator)
        });

        if label.is_empty() {
            debug!("No label fragments for {} track", format.kind);
            return self.config.unknown_label.clone();
        }

        trace!("Built label for {} track: {}", format.kind, label);
        label
    }
}

/// Build a track label with the default settings
pub fn build_track_label(format: &TrackFormat) -> String {
    TrackLabelBuilder::default().build(format)
}

/// Join two fragments, dropping whichever one is empty
pub fn join_with_separator(first: &str, second: &str, separator: &str) -> String {
    if first.is_empty() {
        second.to_string()
    } else if second.is_empty() {
        first.to_string()
    } else {
        format!("{}{}{}", first, separator, second)
    }
}
