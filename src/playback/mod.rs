pub mod state;

pub use state::{PlaybackState, playback_code_to_string, playback_state_to_string};
