/// Canonical width to vertical resolution, 16:9 ladder
pub const RESOLUTION_TABLE: &[(u32, u32)] = &[
    (256, 144),
    (426, 240),
    (640, 360),
    (854, 480),
    (1280, 720),
    (1920, 1080),
    (2560, 1440),
    (3840, 2160),
    (7680, 4320),
];

/// Canonical height for a standard width, if the width is on the ladder
pub fn canonical_height(width: u32) -> Option<u32> {
    RESOLUTION_TABLE
        .iter()
        .find(|(w, _)| *w == width)
        .map(|(_, h)| *h)
}

/// Check if two sizes differ by no more than `tolerance` pixels
pub fn size_equals(a: u32, b: u32, tolerance: u32) -> bool {
    a.abs_diff(b) <= tolerance
}

/// Height to show for a frame size.
///
/// Widths on the ladder snap to their canonical height when the real height
/// is within `tolerance`; anything else keeps the real height.
pub fn display_height(width: u32, height: u32, tolerance: u32) -> u32 {
    match canonical_height(width) {
        Some(canonical) if size_equals(canonical, height, tolerance) => canonical,
        _ => height,
    }
}
