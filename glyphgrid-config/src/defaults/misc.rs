//! Default values that do not belong to a single focused subsystem.

// ── Primitive helpers ──────────────────────────────────────────────────────

pub fn bool_true() -> bool {
    true
}

// ── Glyph cache ────────────────────────────────────────────────────────────

pub fn glyph_cache_capacity() -> usize {
    512 // Enough for a full printable-ASCII set in ~5 color pairs
}

// ── Cells ──────────────────────────────────────────────────────────────────

pub fn blink_interval_ms() -> u64 {
    1000
}

pub fn underline_thickness() -> i32 {
    2
}

// ── Widgets ────────────────────────────────────────────────────────────────

pub fn button_starting_character() -> char {
    '<'
}

pub fn button_ending_character() -> char {
    '>'
}

/// Printable ASCII letters, digits, punctuation and space.
pub fn allowed_character_pattern() -> String {
    r#"^[a-zA-Z0-9$-/:-?{-~!"^_`\[\]@# ]$"#.to_string()
}
