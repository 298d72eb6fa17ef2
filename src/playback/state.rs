//! Player state names.

/// Player state codes as reported by the player
pub const STATE_IDLE: i32 = 1;
pub const STATE_BUFFERING: i32 = 2;
pub const STATE_READY: i32 = 3;
pub const STATE_ENDED: i32 = 4;

/// Playback state of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackState {
    /// No media loaded
    Idle,
    /// Waiting for data
    Buffering,
    /// Able to play immediately
    Ready,
    /// Finished playing
    Ended,
}

impl PlaybackState {
    /// Map a raw player state code, treating unknown codes as ended
    pub fn from_code(code: i32) -> Self {
        match code {
            STATE_IDLE => PlaybackState::Idle,
            STATE_BUFFERING => PlaybackState::Buffering,
            STATE_READY => PlaybackState::Ready,
            _ => PlaybackState::Ended,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            PlaybackState::Idle => STATE_IDLE,
            PlaybackState::Buffering => STATE_BUFFERING,
            PlaybackState::Ready => STATE_READY,
            PlaybackState::Ended => STATE_ENDED,
        }
    }
}

impl From<i32> for PlaybackState {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl std::fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", playback_state_to_string(*self))
    }
}

/// Name of a playback state, e.g. `STATE_READY`
pub fn playback_state_to_string(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Buffering => "STATE_BUFFERING",
        PlaybackState::Ready => "STATE_READY",
        PlaybackState::Idle => "STATE_IDLE",
        PlaybackState::Ended => "STATE_ENDED",
    }
}

/// Name of a raw player state code
pub fn playback_code_to_string(code: i32) -> &'static str {
    playback_state_to_string(PlaybackState::from_code(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_names() {
        assert_eq!(playback_state_to_string(PlaybackState::Buffering), "STATE_BUFFERING");
        assert_eq!(playback_state_to_string(PlaybackState::Ready), "STATE_READY");
        assert_eq!(playback_state_to_string(PlaybackState::Idle), "STATE_IDLE");
        assert_eq!(playback_state_to_string(PlaybackState::Ended), "STATE_ENDED");
        assert_eq!(PlaybackState::Ready.to_string(), "STATE_READY");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(PlaybackState::from_code(1), PlaybackState::Idle);
        assert_eq!(PlaybackState::from_code(2), PlaybackState::Buffering);
        assert_eq!(PlaybackState::from_code(3), PlaybackState::Ready);
        assert_eq!(PlaybackState::from_code(4), PlaybackState::Ended);
        assert_eq!(PlaybackState::from(3), PlaybackState::Ready);
    }

    #[test]
    fn test_unknown_codes_are_ended() {
        assert_eq!(PlaybackState::from_code(0), PlaybackState::Ended);
        assert_eq!(PlaybackState::from_code(-1), PlaybackState::Ended);
        assert_eq!(playback_code_to_string(42), "STATE_ENDED");
        assert_eq!(playback_code_to_string(2), "STATE_BUFFERING");
    }

    #[test]
    fn test_code_matches_from_code() {
        for state in [
            PlaybackState::Idle,
            PlaybackState::Buffering,
            PlaybackState::Ready,
            PlaybackState::Ended,
        ] {
            assert_eq!(PlaybackState::from_code(state.code()), state);
        }
    }
}
