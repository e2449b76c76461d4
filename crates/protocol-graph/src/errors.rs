//! Error types for spec parsing, layout/render configuration and protocol lookup.

/// Errors produced while parsing a field specification string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// The specification is empty or only whitespace.
    #[error("empty protocol specification")]
    EmptySpec,
    /// Two consecutive commas, or a trailing comma.
    #[error("empty field specification at position {position}")]
    EmptyField { position: usize },
    /// A `:width` token with nothing before the colon.
    #[error("field at position {position} has no name")]
    MissingName { position: usize },
    /// A field without a width, or a bare name nothing could resolve.
    #[error("missing width for field '{name}'")]
    MissingWidth { name: String },
    /// More than one `:` inside a single field.
    #[error("malformed field specification '{field}'")]
    MalformedField { field: String },
    /// The width is not a decimal integer.
    #[error("invalid width '{width}' for field '{name}'")]
    InvalidWidth { name: String, width: String },
    /// The width is zero or negative.
    #[error("invalid width {width} for field '{name}': width must be >= 1")]
    NonPositiveWidth { name: String, width: i64 },
    /// The width is above [crate::field::MAX_FIELD_WIDTH].
    #[error("width {width} for field '{name}' exceeds the maximum of {max} bits", max = crate::field::MAX_FIELD_WIDTH)]
    WidthTooLarge { name: String, width: usize },
    /// The field widths add up to more than a `usize` can hold.
    #[error("total width of the specification overflows")]
    TotalWidthOverflow,
    /// A key in the `?key=value` suffix that is not recognised.
    #[error("unknown option '{key}'")]
    UnknownOption { key: String },
    /// A recognised option with a value that cannot be used.
    #[error("invalid value '{value}' for option '{key}'")]
    InvalidOption { key: String, value: String },
}

/// Errors produced by invalid layout or rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Bits per line must be at least one.
    #[error("invalid number of bits per line ({0})")]
    InvalidLineWidth(usize),
    /// Placeholder units per bit must be between one and [crate::config::MAX_PLACEHOLDER_UNITS].
    #[error("invalid number of placeholder units per bit ({0}), expected 1 to {max}", max = crate::config::MAX_PLACEHOLDER_UNITS)]
    InvalidPlaceholder(usize),
    /// A border, fill or separator character that is not exactly one printable character.
    #[error("a single character is expected for {option}, got '{value}'")]
    InvalidChar { option: &'static str, value: String },
}

/// Errors produced when resolving a protocol name against the builtin table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("supplied protocol '{name}' does not exist")]
    Unknown { name: String },
    /// More than one protocol starts with the supplied prefix.
    #[error("ambiguous protocol specifier '{name}', did you mean any of these: {}", candidates.join(", "))]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },
}

/// Umbrella error for operations that span parsing, lookup and rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagramError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}
