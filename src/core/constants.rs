//! Fixed scales and defaults used by the table renderer.

/// Rendering constants shared across the crate
pub mod qplay_constants {
    /// Number of glyphs in a full amplitude bar (magnitude 1).
    pub const BAR_SCALE: usize = 24;
    /// Largest supported number of decimal digits.
    pub const MAX_DECIMALS: usize = 10;
    /// Decimal digits used when the caller does not choose.
    pub const DEFAULT_DECIMALS: usize = 4;
    /// Glyph repeated to draw the amplitude bar.
    pub const DEFAULT_SYMBOL: char = '\u{2588}';
}
