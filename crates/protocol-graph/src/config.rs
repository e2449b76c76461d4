//! Rendering configuration and the per-diagram option overrides layered on top of it.

use crate::errors::{ConfigError, SyntaxError};

pub const DEFAULT_BITS_PER_LINE: usize = 32;

/// Most interior columns a single bit may take.
pub const MAX_PLACEHOLDER_UNITS: usize = 64;

/// Order in which the segments of a row (and the bit numbers) are displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Most significant bit first, the usual RFC layout.
    #[default]
    LeftToRight,
    /// Least significant bit first.
    RightToLeft,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::LeftToRight => Direction::RightToLeft,
            Direction::RightToLeft => Direction::LeftToRight,
        }
    }
}

/// Everything the renderer needs besides the layout itself.
///
/// Fields are public and meant to be assigned directly between renders. The
/// `set_*_char` helpers accept user input as `&str` and reject anything that
/// is not exactly one printable character.
///
/// # Example
///
/// ```
/// use protocol_graph::config::{Direction, RenderConfig};
///
/// let mut config = RenderConfig::default();
/// config.bits_per_line = 16;
/// config.direction = Direction::RightToLeft;
/// config.set_separator_char("!").unwrap();
/// assert!(config.set_separator_char("||").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub bits_per_line: usize,
    pub show_numbering: bool,
    pub border_start_char: char,
    pub border_end_char: char,
    /// Border character on bit boundaries.
    pub fill_char_odd: char,
    /// Border character inside a bit cell.
    pub fill_char_even: char,
    pub separator_char: char,
    pub direction: Direction,
    /// Interior columns used to draw one bit.
    pub placeholder_units_per_bit: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bits_per_line: DEFAULT_BITS_PER_LINE,
            show_numbering: true,
            border_start_char: '+',
            border_end_char: '+',
            fill_char_odd: '+',
            fill_char_even: '-',
            separator_char: '|',
            direction: Direction::LeftToRight,
            placeholder_units_per_bit: 1,
        }
    }
}

impl RenderConfig {
    pub fn left_to_right(&self) -> bool {
        self.direction == Direction::LeftToRight
    }

    pub fn set_border_start_char(&mut self, value: &str) -> Result<&mut Self, ConfigError> {
        self.border_start_char = single_char("startchar", value)?;
        Ok(self)
    }

    pub fn set_border_end_char(&mut self, value: &str) -> Result<&mut Self, ConfigError> {
        self.border_end_char = single_char("endchar", value)?;
        Ok(self)
    }

    pub fn set_fill_char_odd(&mut self, value: &str) -> Result<&mut Self, ConfigError> {
        self.fill_char_odd = single_char("oddchar", value)?;
        Ok(self)
    }

    pub fn set_fill_char_even(&mut self, value: &str) -> Result<&mut Self, ConfigError> {
        self.fill_char_even = single_char("evenchar", value)?;
        Ok(self)
    }

    pub fn set_separator_char(&mut self, value: &str) -> Result<&mut Self, ConfigError> {
        self.separator_char = single_char("sepchar", value)?;
        Ok(self)
    }

    /// Checks numeric limits and that no configured character is a control character.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bits_per_line == 0 {
            return Err(ConfigError::InvalidLineWidth(self.bits_per_line));
        }
        self.validate_style()
    }

    /// Like [RenderConfig::validate] but ignores `bits_per_line`, which the
    /// renderer takes from the layout instead.
    pub fn validate_style(&self) -> Result<(), ConfigError> {
        placeholder_units(self.placeholder_units_per_bit)?;

        let chars = [
            ("startchar", self.border_start_char),
            ("endchar", self.border_end_char),
            ("oddchar", self.fill_char_odd),
            ("evenchar", self.fill_char_even),
            ("sepchar", self.separator_char),
        ];
        for (option, c) in chars {
            if c.is_control() {
                return Err(ConfigError::InvalidChar {
                    option,
                    value: c.escape_default().to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Checks that `units` is in `1..=MAX_PLACEHOLDER_UNITS`.
pub fn placeholder_units(units: usize) -> Result<usize, ConfigError> {
    if (1..=MAX_PLACEHOLDER_UNITS).contains(&units) {
        Ok(units)
    } else {
        Err(ConfigError::InvalidPlaceholder(units))
    }
}

/// Converts user input into a single printable character.
pub fn single_char(option: &'static str, value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_control() => Ok(c),
        _ => Err(ConfigError::InvalidChar {
            option,
            value: value.to_string(),
        }),
    }
}

/// Optional replacements for [RenderConfig] fields, merged in precedence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub bits_per_line: Option<usize>,
    pub show_numbering: Option<bool>,
    pub border_start_char: Option<char>,
    pub border_end_char: Option<char>,
    pub fill_char_odd: Option<char>,
    pub fill_char_even: Option<char>,
    pub separator_char: Option<char>,
    pub direction: Option<Direction>,
    pub placeholder_units_per_bit: Option<usize>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        *self == ConfigOverrides::default()
    }

    /// Writes every set override into `config`.
    pub fn apply_to(&self, config: &mut RenderConfig) {
        if let Some(bits) = self.bits_per_line {
            config.bits_per_line = bits;
        }
        if let Some(show) = self.show_numbering {
            config.show_numbering = show;
        }
        if let Some(c) = self.border_start_char {
            config.border_start_char = c;
        }
        if let Some(c) = self.border_end_char {
            config.border_end_char = c;
        }
        if let Some(c) = self.fill_char_odd {
            config.fill_char_odd = c;
        }
        if let Some(c) = self.fill_char_even {
            config.fill_char_even = c;
        }
        if let Some(c) = self.separator_char {
            config.separator_char = c;
        }
        if let Some(direction) = self.direction {
            config.direction = direction;
        }
        if let Some(units) = self.placeholder_units_per_bit {
            config.placeholder_units_per_bit = units;
        }
    }

    /// Returns `self` with any value set in `other` taking precedence.
    pub fn merged_with(self, other: &ConfigOverrides) -> Self {
        ConfigOverrides {
            bits_per_line: other.bits_per_line.or(self.bits_per_line),
            show_numbering: other.show_numbering.or(self.show_numbering),
            border_start_char: other.border_start_char.or(self.border_start_char),
            border_end_char: other.border_end_char.or(self.border_end_char),
            fill_char_odd: other.fill_char_odd.or(self.fill_char_odd),
            fill_char_even: other.fill_char_even.or(self.fill_char_even),
            separator_char: other.separator_char.or(self.separator_char),
            direction: other.direction.or(self.direction),
            placeholder_units_per_bit: other
                .placeholder_units_per_bit
                .or(self.placeholder_units_per_bit),
        }
    }
}

pub const OPTIONS_SEPARATOR: char = '?';

/// Splits `spec?options` into the field part and the option part, if any.
pub fn split_options(input: &str) -> (&str, Option<&str>) {
    match input.split_once(OPTIONS_SEPARATOR) {
        Some((fields, options)) => (fields, Some(options)),
        None => (input, None),
    }
}

/// Parses the `key=value,...` list that may follow a spec after `?`.
///
/// Recognised keys: `bits`, `numbers`, `startchar`, `endchar`, `evenchar`,
/// `oddchar`, `sepchar`, `placeholder` and `order`.
///
/// Entries are split on every `,`, so `,` cannot be used as a character
/// value here: `sepchar=,` reads as `sepchar=` and fails with
/// [SyntaxError::InvalidOption]. Only the first `?` of a spec starts the
/// options, so `?` itself is a valid value (`sepchar=?`).
pub fn parse_options(options: &str) -> Result<ConfigOverrides, SyntaxError> {
    let mut overrides = ConfigOverrides::default();

    for entry in options.split(',') {
        if entry.trim().is_empty() {
            continue;
        }

        let (key, value) = entry.split_once('=').ok_or_else(|| SyntaxError::InvalidOption {
            key: entry.trim().to_string(),
            value: String::new(),
        })?;
        let key = key.trim();

        let invalid = || SyntaxError::InvalidOption {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "bits" => {
                let bits: usize = value.trim().parse().map_err(|_| invalid())?;
                if bits == 0 {
                    return Err(invalid());
                }
                overrides.bits_per_line = Some(bits);
            }
            "placeholder" => {
                let units: usize = value.trim().parse().map_err(|_| invalid())?;
                overrides.placeholder_units_per_bit =
                    Some(placeholder_units(units).map_err(|_| invalid())?);
            }
            "numbers" => {
                overrides.show_numbering = Some(match value.trim() {
                    "y" | "yes" | "true" | "1" => true,
                    "n" | "no" | "false" | "0" => false,
                    _ => return Err(invalid()),
                });
            }
            "order" => {
                overrides.direction = Some(match value.trim() {
                    "msb" | "ltr" => Direction::LeftToRight,
                    "lsb" | "rtl" => Direction::RightToLeft,
                    _ => return Err(invalid()),
                });
            }
            "startchar" => {
                let c = single_char("startchar", value).map_err(|_| invalid())?;
                overrides.border_start_char = Some(c);
            }
            "endchar" => {
                let c = single_char("endchar", value).map_err(|_| invalid())?;
                overrides.border_end_char = Some(c);
            }
            "oddchar" => {
                let c = single_char("oddchar", value).map_err(|_| invalid())?;
                overrides.fill_char_odd = Some(c);
            }
            "evenchar" => {
                let c = single_char("evenchar", value).map_err(|_| invalid())?;
                overrides.fill_char_even = Some(c);
            }
            "sepchar" => {
                let c = single_char("sepchar", value).map_err(|_| invalid())?;
                overrides.separator_char = Some(c);
            }
            _ => {
                return Err(SyntaxError::UnknownOption {
                    key: key.to_string(),
                });
            }
        }
    }

    Ok(overrides)
}
