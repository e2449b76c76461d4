//! Packing of specification fields into fixed-width rows.
//!
//! Fields are placed left to right in specification order. A field that does
//! not fit in what is left of the current row is split: the first piece fills
//! the row exactly and the remainder continues on the next row(s) as
//! continuation segments. The last row is never padded.

use log::{debug, trace};

use crate::{
    errors::ConfigError,
    field::Specification,
    segment::{Row, Segment},
};

/// Rows computed for one specification at one line width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub bits_per_line: usize,
    pub rows: Vec<Row>,
}

impl Layout {
    /// Sum of segment widths over all rows.
    pub fn total_bits(&self) -> usize {
        self.rows.iter().map(Row::width).sum()
    }
}

/// Lays `spec` out over rows of `bits_per_line` bits.
pub fn layout(spec: &Specification, bits_per_line: usize) -> Result<Layout, ConfigError> {
    if bits_per_line == 0 {
        return Err(ConfigError::InvalidLineWidth(bits_per_line));
    }

    let mut rows = Vec::new();
    let mut current = Row::default();
    let mut remaining = bits_per_line;

    for (index, field) in spec.fields().iter().enumerate() {
        let mut left = field.bit_width;
        let mut continuation = false;

        while left > 0 {
            let width = left.min(remaining);

            current.segments.push(if continuation {
                Segment::continuation(&field.name, index, width)
            } else {
                Segment::new(&field.name, index, width)
            });

            left -= width;
            remaining -= width;
            continuation = true;

            if remaining == 0 {
                trace!("closing row {} ({} segments)", rows.len(), current.segments.len());
                rows.push(std::mem::take(&mut current));
                remaining = bits_per_line;
            }
        }
    }

    if !current.is_empty() {
        rows.push(current);
    }

    debug!(
        "laid out {} fields over {} rows of {} bits",
        spec.len(),
        rows.len(),
        bits_per_line
    );

    Ok(Layout {
        bits_per_line,
        rows,
    })
}
