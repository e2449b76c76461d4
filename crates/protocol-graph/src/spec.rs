//! Parser for the compact `name:width,name:width,...` field specification syntax.
//!
//! Fields are separated by `,` and each field is `name:width` where `width` is
//! a decimal integer. Whitespace around names and widths is ignored. There is
//! no escaping, so names cannot contain `,` or `:`.
//!
//! A field may also be a bare `name`, in which case its width is resolved by a
//! [WidthLookup] supplied by the caller (see [parse_with_lookup]).

use log::trace;

use crate::{
    errors::SyntaxError,
    field::{FieldSpec, Specification},
};

pub const FIELD_SEPARATOR: char = ',';
pub const WIDTH_SEPARATOR: char = ':';

/// Resolves the width of a field given only by name.
pub trait WidthLookup {
    fn width_of(&self, name: &str) -> Option<usize>;
}

impl<F> WidthLookup for F
where
    F: Fn(&str) -> Option<usize>,
{
    fn width_of(&self, name: &str) -> Option<usize> {
        self(name)
    }
}

/// Lookup that never resolves anything: every field needs an explicit width.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl WidthLookup for NoLookup {
    fn width_of(&self, _name: &str) -> Option<usize> {
        None
    }
}

/// Parses a specification where every field carries an explicit width.
pub fn parse(spec: &str) -> Result<Specification, SyntaxError> {
    parse_with_lookup(spec, &NoLookup)
}

/// Parses a specification, resolving bare field names through `lookup`.
pub fn parse_with_lookup<L>(spec: &str, lookup: &L) -> Result<Specification, SyntaxError>
where
    L: WidthLookup + ?Sized,
{
    if spec.trim().is_empty() {
        return Err(SyntaxError::EmptySpec);
    }

    let mut fields = Vec::new();

    for (position, token) in spec.split(FIELD_SEPARATOR).enumerate() {
        let field = parse_field(token.trim(), position, lookup)?;
        trace!("parsed field {} ({} bits)", field.name, field.bit_width);
        fields.push(field);
    }

    Specification::new(fields)
}

fn parse_field<L>(token: &str, position: usize, lookup: &L) -> Result<FieldSpec, SyntaxError>
where
    L: WidthLookup + ?Sized,
{
    if token.is_empty() {
        return Err(SyntaxError::EmptyField { position });
    }

    let parts: Vec<&str> = token.split(WIDTH_SEPARATOR).map(str::trim).collect();

    match parts.as_slice() {
        [name] => {
            let width = lookup
                .width_of(name)
                .ok_or_else(|| SyntaxError::MissingWidth {
                    name: name.to_string(),
                })?;
            if width == 0 {
                return Err(SyntaxError::NonPositiveWidth {
                    name: name.to_string(),
                    width: 0,
                });
            }
            Ok(FieldSpec::new(*name, width))
        }
        [name, width] => {
            if name.is_empty() {
                return Err(SyntaxError::MissingName { position });
            }
            Ok(FieldSpec::new(*name, parse_width(name, width)?))
        }
        _ => Err(SyntaxError::MalformedField {
            field: token.to_string(),
        }),
    }
}

fn parse_width(name: &str, width: &str) -> Result<usize, SyntaxError> {
    if width.is_empty() {
        return Err(SyntaxError::MissingWidth {
            name: name.to_string(),
        });
    }

    let value: i64 = width.parse().map_err(|_| SyntaxError::InvalidWidth {
        name: name.to_string(),
        width: width.to_string(),
    })?;

    if value <= 0 {
        return Err(SyntaxError::NonPositiveWidth {
            name: name.to_string(),
            width: value,
        });
    }

    usize::try_from(value).map_err(|_| SyntaxError::InvalidWidth {
        name: name.to_string(),
        width: width.to_string(),
    })
}
