use serde::{Deserialize, Serialize};

/// Subtitle MIME types that do not live under `text/`
const TEXT_APPLICATION_TYPES: &[&str] = &[
    "application/ttml+xml",
    "application/x-subrip",
    "application/x-quicktime-tx3g",
    "application/cea-608",
    "application/cea-708",
    "application/x-mp4-cea-608",
    "application/x-mp4-vtt",
    "application/pgs",
    "application/dvbsubs",
    "application/vobsub",
];

/// Media kind of a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
    /// Subtitles and captions
    Text,
    #[default]
    Other,
}

impl MediaKind {
    /// Classify a sample MIME type such as `video/avc` or `audio/mp4a-latm`
    pub fn from_mime_type(mime_type: &str) -> Self {
        let essence = mime_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if essence.starts_with("video/") {
            MediaKind::Video
        } else if essence.starts_with("audio/") {
            MediaKind::Audio
        } else if essence.starts_with("text/") || TEXT_APPLICATION_TYPES.contains(&essence.as_str())
        {
            MediaKind::Text
        } else {
            MediaKind::Other
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MediaKind::Video => "Video",
            MediaKind::Audio => "Audio",
            MediaKind::Text => "Text",
            MediaKind::Other => "Other",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_prefixes() {
        assert_eq!(MediaKind::from_mime_type("video/x-vnd.on2.vp9"), MediaKind::Video);
        assert_eq!(MediaKind::from_mime_type("audio/mp4a-latm"), MediaKind::Audio);
        assert_eq!(MediaKind::from_mime_type("text/vtt"), MediaKind::Text);
        assert_eq!(MediaKind::from_mime_type("application/x-subrip"), MediaKind::Text);
        assert_eq!(MediaKind::from_mime_type("application/id3"), MediaKind::Other);
        assert_eq!(MediaKind::from_mime_type(""), MediaKind::Other);
    }

    #[test]
    fn test_mime_case_and_parameters() {
        assert_eq!(MediaKind::from_mime_type("Video/MP4"), MediaKind::Video);
        assert_eq!(
            MediaKind::from_mime_type("audio/webm; codecs=\"opus\""),
            MediaKind::Audio
        );
        assert_eq!(MediaKind::from_mime_type(" application/TTML+xml "), MediaKind::Text);
    }

    #[test]
    fn test_display() {
        assert_eq!(MediaKind::Video.to_string(), "Video");
        assert_eq!(MediaKind::Other.to_string(), "Other");
    }
}
