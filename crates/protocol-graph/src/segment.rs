/// The part of one field placed within a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub field_name: String,
    /// Index of the owning field in the [crate::field::Specification].
    pub field_index: usize,
    pub width: usize,
    /// True when this is the remainder of a field that started on an earlier row.
    pub is_continuation: bool,
}

impl Segment {
    pub fn new(field_name: impl Into<String>, field_index: usize, width: usize) -> Self {
        Segment {
            field_name: field_name.into(),
            field_index,
            width,
            is_continuation: false,
        }
    }

    pub fn continuation(field_name: impl Into<String>, field_index: usize, width: usize) -> Self {
        Segment {
            is_continuation: true,
            ..Segment::new(field_name, field_index, width)
        }
    }
}

/// One line's worth of bit positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub segments: Vec<Segment>,
}

impl Row {
    /// Total number of bits covered by the row.
    pub fn width(&self) -> usize {
        self.segments.iter().map(|s| s.width).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments in display order for the given direction.
    pub fn display_order(&self, direction: crate::config::Direction) -> Vec<&Segment> {
        match direction {
            crate::config::Direction::LeftToRight => self.segments.iter().collect(),
            crate::config::Direction::RightToLeft => self.segments.iter().rev().collect(),
        }
    }
}
