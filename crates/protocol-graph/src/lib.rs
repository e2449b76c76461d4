//! # protocol-graph
//!
//! Render RFC-style ASCII diagrams of network protocol headers.
//!
//! A header is described by a compact specification such as
//! `"Source Port:16,Destination Port:16"`. The specification is parsed into
//! fields, the fields are laid out over rows of a fixed number of bits
//! (splitting fields that cross a row boundary), and the rows are drawn with
//! configurable border, fill and separator characters, optional bit numbers,
//! a configurable number of columns per bit, and MSB-first or LSB-first order.
//!
//! ## Example
//!
//! ```
//! use protocol_graph::diagram::ProtocolDiagram;
//! use protocol_graph::spec::parse;
//!
//! let spec = parse("Source Port:16,Destination Port:16,Length:16,Checksum:16").unwrap();
//! let mut diagram = ProtocolDiagram::with_defaults(spec);
//! diagram.config.bits_per_line = 16;
//!
//! let text = diagram.to_text().unwrap();
//! // four rows, each with two numbering lines and a content line, plus five rules
//! assert_eq!(text.lines().count(), 4 * 3 + 5);
//! ```

pub mod config;
pub mod diagram;
pub mod errors;
pub mod field;
pub mod layout;
pub mod protocols;
pub mod render;
pub mod segment;
pub mod spec;

#[cfg(feature = "serde")]
pub mod serde;

pub use config::{ConfigOverrides, Direction, RenderConfig};
pub use diagram::ProtocolDiagram;
pub use errors::{ConfigError, DiagramError, LookupError, SyntaxError};
pub use field::{FieldSpec, Specification};
pub use layout::{Layout, layout};
pub use render::render;
pub use segment::{Row, Segment};
pub use spec::{WidthLookup, parse, parse_with_lookup};
