//! Header fields and the ordered specification they form.

use crate::errors::SyntaxError;

/// Widest field accepted, in bits.
pub const MAX_FIELD_WIDTH: usize = 1 << 20;

/// A single named, fixed-width portion of a protocol header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Label printed inside the field box. Not required to be unique.
    pub name: String,
    /// Width of the field in bits, always at least one.
    pub bit_width: usize,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, bit_width: usize) -> Self {
        FieldSpec {
            name: name.into(),
            bit_width,
        }
    }
}

/// Ordered, non-empty list of fields describing a full header.
///
/// Field order is display order (before any right-to-left inversion done by
/// the renderer). Use [Specification::new] or [crate::spec::parse] to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specification {
    fields: Vec<FieldSpec>,
    total_bits: usize,
}

impl Specification {
    /// Builds a specification, rejecting an empty field list, unnamed fields
    /// and widths outside `1..=MAX_FIELD_WIDTH`.
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, SyntaxError> {
        if fields.is_empty() {
            return Err(SyntaxError::EmptySpec);
        }

        let mut total_bits: usize = 0;

        for (position, field) in fields.iter().enumerate() {
            if field.name.trim().is_empty() {
                return Err(SyntaxError::MissingName { position });
            }
            if field.bit_width == 0 {
                return Err(SyntaxError::NonPositiveWidth {
                    name: field.name.clone(),
                    width: 0,
                });
            }
            if field.bit_width > MAX_FIELD_WIDTH {
                return Err(SyntaxError::WidthTooLarge {
                    name: field.name.clone(),
                    width: field.bit_width,
                });
            }
            total_bits = total_bits
                .checked_add(field.bit_width)
                .ok_or(SyntaxError::TotalWidthOverflow)?;
        }

        Ok(Specification { fields, total_bits })
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Sum of all field widths.
    pub fn total_bits(&self) -> usize {
        self.total_bits
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false; kept for parity with [Vec].
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl std::str::FromStr for Specification {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::spec::parse(s)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<crate::serde::SpecificationDef> for Specification {
    type Error = SyntaxError;

    fn try_from(value: crate::serde::SpecificationDef) -> Result<Self, Self::Error> {
        Specification::new(
            value
                .fields
                .into_iter()
                .map(|f| FieldSpec::new(f.name, f.bits))
                .collect(),
        )
    }
}
