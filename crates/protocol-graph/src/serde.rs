//! Deserializable style and specification definitions.
//!
//! These types describe diagram styles and field lists as they appear in
//! configuration files (TOML or JSON) or in JavaScript objects, and are
//! converted into core `protocol-graph` types with `TryFrom`. Character
//! options are plain strings here and are checked to be a single character
//! during conversion.

use serde::{Deserialize, Serialize};

use crate::{
    config::{ConfigOverrides, Direction, placeholder_units, single_char},
    errors::ConfigError,
};

/// Field display order.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderDef {
    /// Most significant bit first.
    Msb,
    /// Least significant bit first.
    Lsb,
}

/// Rendering style. Every field is optional; unset fields keep their current value.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StyleDef {
    pub bits: Option<usize>,
    pub numbers: Option<bool>,
    pub placeholder: Option<usize>,
    pub order: Option<OrderDef>,
    pub startchar: Option<String>,
    pub endchar: Option<String>,
    pub oddchar: Option<String>,
    pub evenchar: Option<String>,
    pub sepchar: Option<String>,
}

impl TryFrom<StyleDef> for ConfigOverrides {
    type Error = ConfigError;

    fn try_from(value: StyleDef) -> Result<Self, Self::Error> {
        if let Some(bits) = value.bits.filter(|b| *b == 0) {
            return Err(ConfigError::InvalidLineWidth(bits));
        }

        let char_of = |option: &'static str, v: Option<String>| {
            v.map(|s| single_char(option, &s)).transpose()
        };

        Ok(ConfigOverrides {
            bits_per_line: value.bits,
            show_numbering: value.numbers,
            placeholder_units_per_bit: value.placeholder.map(placeholder_units).transpose()?,
            direction: value.order.map(|o| match o {
                OrderDef::Msb => Direction::LeftToRight,
                OrderDef::Lsb => Direction::RightToLeft,
            }),
            border_start_char: char_of("startchar", value.startchar)?,
            border_end_char: char_of("endchar", value.endchar)?,
            fill_char_odd: char_of("oddchar", value.oddchar)?,
            fill_char_even: char_of("evenchar", value.evenchar)?,
            separator_char: char_of("sepchar", value.sepchar)?,
        })
    }
}

/// A single field of a [SpecificationDef].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FieldSpecDef {
    pub name: String,
    /// Width in bits.
    pub bits: usize,
}

/// Field list as an alternative to the compact `name:width,...` string.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SpecificationDef {
    pub fields: Vec<FieldSpecDef>,
}
