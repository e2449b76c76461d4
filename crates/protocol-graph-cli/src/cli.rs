use std::path::PathBuf;

use clap::Parser;
use protocol_graph::{
    config::{ConfigOverrides, Direction, placeholder_units, single_char},
    errors::ConfigError,
};

#[derive(Parser, Debug)]
#[command(name = "protocol")]
#[command(version)]
#[command(about = "Prints ASCII RFC-style headers for network protocols")]
#[command(long_about = "
Prints ASCII RFC-style headers for network protocols.

Each argument is either the name of a builtin protocol (any unambiguous
prefix works, see --list) or a custom spec of the form

    \"Field:bits,Field:bits,...\"

Either form may be followed by an option list that applies to that diagram
only, e.g. \"tcp?bits=16,numbers=n\" or \"Type:8,Length:24?order=lsb\".
Recognised options: bits, numbers, placeholder, order, startchar, endchar,
evenchar, oddchar and sepchar.
")]
pub struct Cli {
    /// Protocol names or field specs
    #[arg(value_name = "PROTOCOL|SPEC")]
    pub protocols: Vec<String>,

    /// Read specs from a file, one per line
    #[arg(short, long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// TOML or JSON style file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of bits per line
    #[arg(short, long)]
    pub bits: Option<usize>,

    /// Number of characters drawn per bit
    #[arg(short, long, alias = "ph", value_name = "N")]
    pub placeholder: Option<usize>,

    /// Draw fields from the least significant bit
    #[arg(long)]
    pub lsb: bool,

    /// Hide the bit numbering
    #[arg(short, long)]
    pub no_numbers: bool,

    /// Fill character for even bit positions
    #[arg(long, value_name = "CHAR")]
    pub evenchar: Option<String>,

    /// Fill character for odd bit positions
    #[arg(long, value_name = "CHAR")]
    pub oddchar: Option<String>,

    /// First character of every border line
    #[arg(long, value_name = "CHAR")]
    pub startchar: Option<String>,

    /// Last character of every border line
    #[arg(long, value_name = "CHAR")]
    pub endchar: Option<String>,

    /// Field separator character
    #[arg(long, value_name = "CHAR")]
    pub sepchar: Option<String>,

    /// List builtin protocols and exit
    #[arg(short, long)]
    pub list: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Style overrides given as flags. Flags that were not passed stay unset.
    pub fn overrides(&self) -> Result<ConfigOverrides, ConfigError> {
        if let Some(bits) = self.bits.filter(|b| *b == 0) {
            return Err(ConfigError::InvalidLineWidth(bits));
        }

        let char_of = |option: &'static str, value: &Option<String>| {
            value.as_deref().map(|v| single_char(option, v)).transpose()
        };

        Ok(ConfigOverrides {
            bits_per_line: self.bits,
            show_numbering: self.no_numbers.then_some(false),
            border_start_char: char_of("startchar", &self.startchar)?,
            border_end_char: char_of("endchar", &self.endchar)?,
            fill_char_odd: char_of("oddchar", &self.oddchar)?,
            fill_char_even: char_of("evenchar", &self.evenchar)?,
            separator_char: char_of("sepchar", &self.sepchar)?,
            direction: self.lsb.then_some(Direction::RightToLeft),
            placeholder_units_per_bit: self.placeholder.map(placeholder_units).transpose()?,
        })
    }
}
