pub mod classifier;
pub mod codec;

pub use classifier::{RESOLUTION_TABLE, canonical_height, display_height, size_equals};
pub use codec::{
    CODEC_SHORT_AVC, CODEC_SHORT_MP4A, CODEC_SHORT_VORBIS, CODEC_SHORT_VP9, CODEC_SHORT_VP9_HDR,
    codec_name_short, is_hdr_codec,
};
