//! The [ProtocolDiagram] aggregate: one specification plus the configuration used to draw it.

use std::str::FromStr;

use crate::{
    config::{ConfigOverrides, RenderConfig, parse_options, split_options},
    errors::DiagramError,
    field::Specification,
    layout::layout,
    render::render,
    spec::{WidthLookup, parse_with_lookup},
};

/// A header diagram ready to be rendered.
///
/// `config` is public so callers can override any field between renders.
/// [ProtocolDiagram::to_text] recomputes the layout every time, so changing
/// `bits_per_line` or the direction always yields a fresh, correct diagram.
///
/// # Example
///
/// ```
/// use protocol_graph::diagram::ProtocolDiagram;
///
/// let mut diagram: ProtocolDiagram = "Type:8,Code:8,Checksum:16".parse().unwrap();
/// diagram.config.show_numbering = false;
/// assert_eq!(
///     diagram.to_text().unwrap(),
///     "+-+-+-+-+-+-+-+-|-+-+-+-+-+-+-+-|-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+\n\
///      |      Type     |      Code     |            Checksum           |\n\
///      +-+-+-+-+-+-+-+-|-+-+-+-+-+-+-+-|-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolDiagram {
    spec: Specification,
    pub config: RenderConfig,
}

impl ProtocolDiagram {
    pub fn new(spec: Specification, config: RenderConfig) -> Self {
        ProtocolDiagram { spec, config }
    }

    pub fn with_defaults(spec: Specification) -> Self {
        Self::new(spec, RenderConfig::default())
    }

    /// Parses `fields?options`, resolving bare field names through `lookup`.
    pub fn parse_with_lookup<L>(input: &str, lookup: &L) -> Result<Self, DiagramError>
    where
        L: WidthLookup + ?Sized,
    {
        let (fields, options) = split_options(input);
        let spec = parse_with_lookup(fields, lookup)?;

        let mut diagram = Self::with_defaults(spec);
        if let Some(options) = options {
            diagram.apply(&parse_options(options)?);
        }

        Ok(diagram)
    }

    pub fn spec(&self) -> &Specification {
        &self.spec
    }

    /// Applies every override that is set.
    pub fn apply(&mut self, overrides: &ConfigOverrides) -> &mut Self {
        overrides.apply_to(&mut self.config);
        self
    }

    /// Lays out and renders the diagram with the current configuration.
    pub fn to_text(&self) -> Result<String, DiagramError> {
        let layout = layout(&self.spec, self.config.bits_per_line)?;
        Ok(render(&layout, &self.config)?)
    }
}

impl FromStr for ProtocolDiagram {
    type Err = DiagramError;

    /// Parses a spec with an optional `?key=value,...` suffix, e.g. `"Data:64?bits=16,numbers=n"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_lookup(s, &crate::spec::NoLookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Direction,
        errors::{ConfigError, SyntaxError},
    };

    #[test]
    fn test_rerender_after_changing_bits() {
        let mut diagram: ProtocolDiagram = "A:20,B:20".parse().unwrap();
        diagram.config.show_numbering = false;

        let wide = diagram.to_text().unwrap();
        assert_eq!(wide.lines().count(), 5);

        diagram.config.bits_per_line = 8;
        let narrow = diagram.to_text().unwrap();
        assert_eq!(narrow.lines().count(), 11);
        assert_ne!(wide, narrow);

        diagram.config.bits_per_line = 32;
        assert_eq!(diagram.to_text().unwrap(), wide);
    }

    #[test]
    fn test_to_text_is_idempotent() {
        let diagram: ProtocolDiagram = "Version:4,IHL:4,Type:8,Total Length:16".parse().unwrap();
        assert_eq!(diagram.to_text().unwrap(), diagram.to_text().unwrap());
    }

    #[test]
    fn test_direction_toggle_round_trips() {
        let mut diagram: ProtocolDiagram = "A:3,B:13,C:16".parse().unwrap();
        let original = diagram.to_text().unwrap();

        diagram.config.direction = Direction::RightToLeft;
        let reversed = diagram.to_text().unwrap();
        assert_ne!(original, reversed);

        diagram.config.direction = Direction::LeftToRight;
        assert_eq!(diagram.to_text().unwrap(), original);
    }

    #[test]
    fn test_option_suffix() {
        let diagram: ProtocolDiagram = "Source:16,TTL:8,Reserved:40?bits=16,numbers=n,sepchar=!"
            .parse()
            .unwrap();

        assert_eq!(diagram.config.bits_per_line, 16);
        assert!(!diagram.config.show_numbering);
        assert_eq!(diagram.config.separator_char, '!');
        assert!(diagram.to_text().unwrap().starts_with("+-+"));
    }

    #[test]
    fn test_zero_bits_fails_at_render() {
        let mut diagram: ProtocolDiagram = "A:8".parse().unwrap();
        diagram.config.bits_per_line = 0;
        assert_eq!(
            diagram.to_text().unwrap_err(),
            DiagramError::Config(ConfigError::InvalidLineWidth(0))
        );
    }

    #[test]
    fn test_empty_spec_fails() {
        assert_eq!(
            "".parse::<ProtocolDiagram>().unwrap_err(),
            DiagramError::Syntax(SyntaxError::EmptySpec)
        );
    }

    #[test]
    fn test_huge_widths_fail_without_panicking() {
        let err = "A:9223372036854775807,B:9223372036854775807"
            .parse::<ProtocolDiagram>()
            .unwrap_err();
        assert!(matches!(
            err,
            DiagramError::Syntax(SyntaxError::WidthTooLarge { .. })
        ));
    }

    #[test]
    fn test_numbering_above_every_row() {
        let diagram: ProtocolDiagram = "A:20,B:20".parse().unwrap();
        let text = diagram.to_text().unwrap();
        let numbering: Vec<&str> = text.lines().filter(|l| l.starts_with(' ')).collect();

        assert_eq!(numbering.len(), 3);
        assert_eq!(numbering[2], " 0 1 2 3 4 5 6 7");
    }

    #[test]
    fn test_diagrams_render_on_separate_threads() {
        let diagrams: Vec<ProtocolDiagram> = ["A:8,B:24", "C:32,D:16", "E:1,F:7"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let expected: Vec<String> = diagrams.iter().map(|d| d.to_text().unwrap()).collect();

        let handles: Vec<_> = diagrams
            .into_iter()
            .map(|d| std::thread::spawn(move || d.to_text().unwrap()))
            .collect();
        let rendered: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(rendered, expected);
    }
}
