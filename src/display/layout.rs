// src/display/layout.rs

//! Column widths for the state table, kept apart from row rendering.

use crate::core::{state, PlayError, BAR_SCALE, MAX_DECIMALS};

/// Width of `"-180.00°"`, the widest direction text.
const DIRECTION_MIN_WIDTH: usize = 8;
/// Gap between adjacent cells.
pub(crate) const CELL_GAP: &str = "  ";

/// Table columns, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Outcome,
    Binary,
    Amplitude,
    Magnitude,
    Direction,
    Bar,
    Probability,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Outcome,
        Column::Binary,
        Column::Amplitude,
        Column::Magnitude,
        Column::Direction,
        Column::Bar,
        Column::Probability,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Outcome => "Outcome",
            Column::Binary => "Binary",
            Column::Amplitude => "Amplitude",
            Column::Magnitude => "Magnitude",
            Column::Direction => "Direction",
            Column::Bar => "Amplitude Bar",
            Column::Probability => "Probability",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Resolved width of every column for one `(dimension, decimals)` pair.
///
/// Each width is the larger of the header text and the widest value the
/// column can hold, so no cell is ever truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    widths: [usize; 7],
}

impl TableLayout {
    /// Computes the layout for a `dim`-outcome vector shown with `decimals` digits.
    ///
    /// # Errors
    /// * `Precision` if `decimals > 10`.
    /// * `InvalidState` if `dim` is not a power of two of at least 2.
    pub fn new(dim: usize, decimals: usize) -> Result<Self, PlayError> {
        if decimals > MAX_DECIMALS {
            return Err(PlayError::Precision { decimals, max: MAX_DECIMALS });
        }
        let num_qubits = state::qubit_count(dim)?;

        let mut widths = [0; 7];
        for column in Column::ALL {
            let minimum = match column {
                Column::Outcome => (dim - 1).to_string().len(),
                Column::Binary => num_qubits,
                // sign, "d.dddd", " + i", "d.dddd", plus one spare
                Column::Amplitude => 2 * (decimals + 2) + 6,
                Column::Magnitude => decimals + 2,
                Column::Direction => DIRECTION_MIN_WIDTH,
                Column::Bar => BAR_SCALE,
                Column::Probability => decimals + 2,
            };
            widths[column.index()] = column.header().len().max(minimum);
        }
        Ok(Self { widths })
    }

    /// Character width of `column`.
    pub fn width(&self, column: Column) -> usize {
        self.widths[column.index()]
    }

    /// Left-justifies `text` to the column width, counting characters.
    pub fn pad(&self, column: Column, text: &str) -> String {
        format!("{:<width$}", text, width = self.width(column))
    }

    /// Every header padded to its column, joined by the cell gap.
    pub fn header(&self) -> String {
        Column::ALL
            .iter()
            .map(|c| self.pad(*c, c.header()))
            .collect::<Vec<_>>()
            .join(CELL_GAP)
    }

    /// Dashes spanning the full header.
    pub fn separator(&self) -> String {
        "-".repeat(self.total_width())
    }

    /// Width of a full header line, gaps included.
    pub fn total_width(&self) -> usize {
        self.widths.iter().sum::<usize>() + CELL_GAP.len() * (self.widths.len() - 1)
    }
}
