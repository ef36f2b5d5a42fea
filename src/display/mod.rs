// src/display/mod.rs

//! Renders an amplitude vector as a state table.
//!
//! One row per basis outcome, with the outcome index, its binary label, the
//! rounded amplitude, magnitude, phase direction, a coloured intensity bar
//! and the probability. Rendering is a pure function of the amplitudes,
//! the [`DisplayMode`], the decimal count and the bar glyph.
//!
//! ```
//! use num_complex::Complex;
//! use qplay::display::{render_state_table, DisplayMode};
//!
//! let h = std::f64::consts::FRAC_1_SQRT_2;
//! let bell = [Complex::new(h, 0.0), Complex::new(0.0, 0.0), Complex::new(0.0, 0.0), Complex::new(h, 0.0)];
//! let table = render_state_table(&bell, DisplayMode::Plain, 4, '\u{2588}').unwrap();
//! assert_eq!(table.lines().count(), 7); // blank, header, separator, four rows
//! ```

pub mod color;
pub mod layout;
pub mod row;

pub use color::{complex_to_rgb, complex_to_rgb_ints};
pub use layout::{Column, TableLayout};
pub use row::StateRow;

use crate::core::{state, PlayError, StateVector, DEFAULT_DECIMALS, DEFAULT_SYMBOL, MAX_DECIMALS};
use layout::CELL_GAP;
use log::trace;
use num_complex::Complex;

/// How the amplitude bar is coloured. Numeric content is identical in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Inline `<font style="color:rgb(..)">` markup, for browser panes.
    #[default]
    Rich,
    /// ANSI 24-bit foreground escapes, for terminals.
    Plain,
}

/// Rendering settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableOptions {
    pub mode: DisplayMode,
    /// Decimal digits, at most 10.
    pub decimals: usize,
    /// Bar glyph.
    pub symbol: char,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self { mode: DisplayMode::default(), decimals: DEFAULT_DECIMALS, symbol: DEFAULT_SYMBOL }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }

    /// Renders `amplitudes` with these settings.
    pub fn render(&self, amplitudes: &[Complex<f64>]) -> Result<String, PlayError> {
        render_state_table(amplitudes, self.mode, self.decimals, self.symbol)
    }

    /// Renders a validated state vector with these settings.
    pub fn render_state(&self, state: &StateVector) -> Result<String, PlayError> {
        self.render(state.amplitudes())
    }
}

/// Derives one [`StateRow`] per amplitude, in ascending outcome order.
///
/// # Errors
/// * `Precision` if `decimals > 10`.
/// * `InvalidState` if the length is not a power of two of at least 2, or
///   an amplitude is NaN or infinite.
pub fn state_rows(amplitudes: &[Complex<f64>], decimals: usize) -> Result<Vec<StateRow>, PlayError> {
    if decimals > MAX_DECIMALS {
        return Err(PlayError::Precision { decimals, max: MAX_DECIMALS });
    }
    let num_qubits = state::qubit_count(amplitudes.len())?;
    if let Some(k) = amplitudes.iter().position(|a| !a.is_finite()) {
        return Err(PlayError::invalid_state(format!("amplitude {} is not finite: {}", k, amplitudes[k])));
    }
    Ok(amplitudes
        .iter()
        .enumerate()
        .map(|(k, a)| StateRow::derive(k, *a, num_qubits, decimals))
        .collect())
}

/// Renders the state table.
///
/// Output: a blank line, the header, a dash separator as wide as the header,
/// then one newline-terminated row per outcome.
///
/// # Errors
/// * `Precision` if `decimals > 10`.
/// * `InvalidState` if the length is not a power of two of at least 2, or
///   an amplitude is NaN or infinite.
///   All are checked before any text is produced.
pub fn render_state_table(
    amplitudes: &[Complex<f64>],
    mode: DisplayMode,
    decimals: usize,
    symbol: char,
) -> Result<String, PlayError> {
    let layout = TableLayout::new(amplitudes.len(), decimals)?;
    let rows = state_rows(amplitudes, decimals)?;

    let mut output = String::from("\n");
    output.push_str(&layout.header());
    output.push('\n');
    output.push_str(&layout.separator());
    output.push('\n');

    for row in &rows {
        trace!("row {} |{}> magnitude {}", row.outcome, row.binary_label, row.magnitude);
        output.push_str(&render_row(&layout, row, mode, decimals, symbol));
        output.push('\n');
    }
    Ok(output)
}

/// Formats one row against a precomputed layout. The probability cell is
/// the last one and is left unpadded.
pub fn render_row(layout: &TableLayout, row: &StateRow, mode: DisplayMode, decimals: usize, symbol: char) -> String {
    let bar = layout.pad(Column::Bar, &row.bar_text(symbol));
    let cells = [
        layout.pad(Column::Outcome, &row.outcome.to_string()),
        layout.pad(Column::Binary, &row.binary_label),
        layout.pad(Column::Amplitude, &row.amplitude_text(decimals)),
        layout.pad(Column::Magnitude, &row.magnitude_text(decimals)),
        layout.pad(Column::Direction, &row.direction_text()),
        colorize(&bar, complex_to_rgb_ints(row.amplitude), mode),
        row.probability_text(decimals),
    ];
    cells.join(CELL_GAP)
}

fn colorize(text: &str, (r, g, b): (u8, u8, u8), mode: DisplayMode) -> String {
    match mode {
        DisplayMode::Rich => format!("<font style=\"color:rgb({}, {}, {})\">{}</font>", r, g, b, text),
        DisplayMode::Plain => format!("\x1b[38;2;{};{};{}m{}\x1b[39m", r, g, b, text),
    }
}
