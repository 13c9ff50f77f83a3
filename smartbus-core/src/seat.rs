use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Zero-based seat position parsed from a label such as `"12B"` (row 11, column 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatLabel {
    pub row: u32,
    pub col: u32,
}

impl SeatLabel {
    pub fn from_position(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parses `<digits><letters>`. The first letter picks the column (A→0), case-insensitive.
    pub fn parse(label: &str) -> CoreResult<Self> {
        let trimmed = label.trim();
        let digits_end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let (digits, letters) = trimmed.split_at(digits_end);

        if digits.is_empty() {
            return Err(CoreError::InvalidSeatLabel(format!("'{}' has no row number", label)));
        }
        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::InvalidSeatLabel(format!("'{}' has no column letter", label)));
        }

        let row_number: u32 = digits
            .parse()
            .map_err(|_| {
                CoreError::InvalidSeatLabel(format!("'{}' row number out of range", label))
            })?;
        if row_number == 0 {
            return Err(CoreError::InvalidSeatLabel(format!("'{}' rows start at 1", label)));
        }

        let letter = letters.as_bytes()[0].to_ascii_uppercase();
        Ok(Self {
            row: row_number - 1,
            col: u32::from(letter - b'A'),
        })
    }

    /// Whether the seat lies inside a `total_rows` x `total_cols` grid.
    pub fn fits(&self, total_rows: u32, total_cols: u32) -> bool {
        self.row < total_rows && self.col < total_cols
    }
}

impl FromStr for SeatLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SeatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut column = String::new();
        let mut n = self.col;
        // A..Z, then AA, AB, ... for very wide layouts
        loop {
            column.insert(0, char::from(b'A' + (n % 26) as u8));
            if n < 26 {
                break;
            }
            n = n / 26 - 1;
        }
        write!(f, "{}{}", self.row + 1, column)
    }
}

/// Seat position scaled into [0, 1] by the vehicle dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSeat {
    pub norm_row: f64,
    pub norm_col: f64,
}

fn divisor(dimension: u32) -> f64 {
    f64::from(dimension.saturating_sub(1).max(1))
}

fn scale(index: u32, dimension: u32) -> f64 {
    if dimension <= 1 {
        return 0.0;
    }
    f64::from(index) / divisor(dimension)
}

/// Divides by `max(dimension - 1, 1)`; a single-row or single-column vehicle maps to 0.
pub fn normalize(seat: SeatLabel, total_rows: u32, total_cols: u32) -> NormalizedSeat {
    NormalizedSeat {
        norm_row: scale(seat.row, total_rows),
        norm_col: scale(seat.col, total_cols),
    }
}

/// Inverse of [`normalize`] for seats inside the grid.
pub fn denormalize(seat: NormalizedSeat, total_rows: u32, total_cols: u32) -> SeatLabel {
    SeatLabel {
        row: (seat.norm_row * divisor(total_rows)).round().max(0.0) as u32,
        col: (seat.norm_col * divisor(total_cols)).round().max(0.0) as u32,
    }
}
