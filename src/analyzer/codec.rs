pub const CODEC_SHORT_AVC: &str = "avc";
pub const CODEC_SHORT_VP9: &str = "vp9";
/// VP9 profile 2, the only codec string treated as HDR
pub const CODEC_SHORT_VP9_HDR: &str = "vp9.2";
pub const CODEC_SHORT_MP4A: &str = "mp4a";
pub const CODEC_SHORT_VORBIS: &str = "vorbis";

/// Short names in match priority order
const CODEC_SHORT_NAMES: [&str; 4] = [
    CODEC_SHORT_AVC,
    CODEC_SHORT_VP9,
    CODEC_SHORT_MP4A,
    CODEC_SHORT_VORBIS,
];

/// Shorten a full codec string such as `avc1.64001f` to its family name.
///
/// The codec string is lowercased and searched for the known families in
/// priority order. Unknown codecs are returned lowercased but otherwise
/// untouched. `None` stays `None`.
pub fn codec_name_short(codec: Option<&str>) -> Option<String> {
    let codec = codec?.to_lowercase();

    let short = CODEC_SHORT_NAMES
        .into_iter()
        .find(|name| codec.contains(name));

    Some(short.map(str::to_string).unwrap_or(codec))
}

/// Check if a codec string denotes HDR video.
///
/// Exact match against `vp9.2` only.
pub fn is_hdr_codec(codec: Option<&str>) -> bool {
    codec == Some(CODEC_SHORT_VP9_HDR)
}
