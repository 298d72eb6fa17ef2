//! Short display labels for media tracks.
//!
//! A label such as `1080p, 29.97fps, 5Mbit, vp9, HDR` is assembled from the
//! format metadata of a video, audio or text track.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod label;
pub mod playback;
pub mod tracks;
pub mod utils;

pub use analyzer::{codec_name_short, is_hdr_codec};
pub use config::LabelConfig;
pub use error::LabelError;
pub use label::{TrackLabelBuilder, build_track_label, join_with_separator};
pub use playback::{PlaybackState, playback_code_to_string, playback_state_to_string};
pub use tracks::{MediaKind, TrackFormat};
