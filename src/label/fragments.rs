//! Label fragments.
//!
//! Each function looks at one aspect of a [`TrackFormat`] and returns an
//! empty string when that aspect is unknown.

use crate::analyzer::{self, codec_name_short, is_hdr_codec};
use crate::tracks::TrackFormat;
use crate::utils::{format_float, format_float_f32, round_to};
use tracing::debug;

pub const UNDEFINED_LANGUAGE: &str = "und";
const HDR_FRAGMENT: &str = "HDR";
const SURROUND_FRAGMENT: &str = "5.1";

/// Vertical resolution, e.g. `1080p`
pub fn resolution(format: &TrackFormat, tolerance: u32) -> String {
    let (Some(width), Some(height)) = (format.width, format.height) else {
        return String::new();
    };

    let shown = analyzer::display_height(width, height, tolerance);
    if shown != height {
        debug!("Normalized {}x{} to {}p", width, height, shown);
    }
    format!("{}p", shown)
}

/// Frame rate, e.g. `29.97fps`
pub fn frame_rate(format: &TrackFormat) -> String {
    match format.frame_rate {
        Some(fps) if fps.is_finite() => format!("{}fps", format_float_f32(fps)),
        _ => String::new(),
    }
}

/// Bitrate in megabits rounded to two decimals, e.g. `5Mbit`
pub fn bitrate(format: &TrackFormat) -> String {
    let Some(bitrate) = format.bitrate else {
        return String::new();
    };

    let mbit = round_to(bitrate as f64 / 1_000_000.0, 2);
    if mbit == 0.0 {
        return String::new();
    }
    format!("{}Mbit", format_float(mbit))
}

/// Codec family, e.g. `avc`
pub fn codec(format: &TrackFormat) -> String {
    codec_name_short(format.codecs.as_deref()).unwrap_or_default()
}

pub fn hdr(format: &TrackFormat) -> String {
    if is_hdr_codec(format.codecs.as_deref()) {
        HDR_FRAGMENT.to_string()
    } else {
        String::new()
    }
}

/// Language tag, skipped when missing or `und`
pub fn language(format: &TrackFormat) -> String {
    match format.language.as_deref() {
        Some(lang) if !lang.is_empty() && lang != UNDEFINED_LANGUAGE => lang.to_string(),
        _ => String::new(),
    }
}

/// Channel count and sample rate, e.g. `2ch, 48000Hz`
pub fn audio_properties(format: &TrackFormat) -> String {
    match (format.channel_count, format.sample_rate) {
        (Some(channels), Some(sample_rate)) => format!("{}ch, {}Hz", channels, sample_rate),
        _ => String::new(),
    }
}

/// Guess at a surround layout from the bitrate alone.
///
/// No channel layout is known here, so high-bitrate stereo is reported as
/// 5.1 as well.
pub fn channel_hint(format: &TrackFormat, threshold: u64) -> String {
    match format.bitrate {
        Some(bitrate) if bitrate > threshold => SURROUND_FRAGMENT.to_string(),
        _ => String::new(),
    }
}
