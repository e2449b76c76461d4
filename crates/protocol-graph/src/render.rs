//! ASCII rendering of a [Layout].
//!
//! Every bit is drawn as a cell of `placeholder_units_per_bit` interior columns
//! followed by one boundary column, so a line covering `w` bits is
//! `1 + w * (units + 1)` columns wide. Numbering, border and content lines all
//! use the same geometry and stay aligned. With one unit per bit the output
//! follows the RFC 791 header style:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-|-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          Source Port          |        Destination Port       |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-|-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Each row is preceded by its bit numbers (when enabled) and the rule above
//! it. Rules are shared between neighbouring rows, so `N` rows take `N + 1`
//! rules.

use log::debug;

use crate::{
    config::{Direction, RenderConfig},
    errors::ConfigError,
    layout::Layout,
    segment::Row,
};

const ELLIPSIS: &str = "...";

/// Renders `layout` into a multi-line string (no trailing newline).
pub fn render(layout: &Layout, config: &RenderConfig) -> Result<String, ConfigError> {
    if layout.bits_per_line == 0 {
        return Err(ConfigError::InvalidLineWidth(layout.bits_per_line));
    }
    config.validate_style()?;

    let Some(last) = layout.rows.last() else {
        return Ok(String::new());
    };

    let mut lines = Vec::with_capacity(layout.rows.len() * 4 + 1);

    for (i, row) in layout.rows.iter().enumerate() {
        if config.show_numbering {
            lines.extend(numbering_lines(row.width(), config));
        }

        // The rule above a row is shared with the row before it.
        let above = match i.checked_sub(1) {
            Some(prev) => border_line(&[&layout.rows[prev], row], config),
            None => border_line(&[row], config),
        };
        lines.push(above);
        lines.push(content_line(row, config));
    }
    lines.push(border_line(&[last], config));

    debug!(
        "rendered {} rows into {} lines ({} units per bit)",
        layout.rows.len(),
        lines.len(),
        config.placeholder_units_per_bit
    );

    Ok(lines.join("\n"))
}

/// Columns taken by one bit: its interior plus the boundary after it.
fn cell_width(config: &RenderConfig) -> usize {
    config.placeholder_units_per_bit + 1
}

/// Number of decimal digits needed to print `n`.
fn decimal_digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Bit index shown at display position `position` of a `bits` wide row.
fn index_at(position: usize, bits: usize, direction: Direction) -> usize {
    match direction {
        Direction::LeftToRight => position,
        Direction::RightToLeft => bits - 1 - position,
    }
}

/// Bit numbers for a row of `bits` bits.
///
/// When the largest index fits in a cell's interior it is printed whole on a
/// single line. Otherwise the digits are stacked, most significant place
/// first; above the units line a digit is only printed where the index is a
/// multiple of that place.
fn numbering_lines(bits: usize, config: &RenderConfig) -> Vec<String> {
    let units = config.placeholder_units_per_bit;
    let digits = decimal_digits(bits.saturating_sub(1));

    if digits <= units {
        let mut line = String::from(" ");
        for position in 0..bits {
            let index = index_at(position, bits, config.direction);
            line.push_str(&format!("{:<width$}", index, width = cell_width(config)));
        }
        return vec![line.trim_end().to_string()];
    }

    let padding = " ".repeat(units);

    (0..digits)
        .rev()
        .map(|place| {
            let divisor = 10usize.pow(place as u32);
            let mut line = String::from(" ");

            for position in 0..bits {
                let index = index_at(position, bits, config.direction);
                if place == 0 || index % divisor == 0 {
                    let digit = (index / divisor) % 10;
                    line.push(char::from(b'0' + digit as u8));
                } else {
                    line.push(' ');
                }
                line.push_str(&padding);
            }

            line.trim_end().to_string()
        })
        .collect()
}

/// Horizontal rule under or over `rows`.
///
/// It spans the widest of the rows and carries the separator character at
/// every segment boundary of any of them.
fn border_line(rows: &[&Row], config: &RenderConfig) -> String {
    let bits = rows.iter().map(|r| r.width()).max().unwrap_or(0);

    let mut edges = vec![false; bits + 1];
    for row in rows {
        let mut offset = 0;
        for segment in row.display_order(config.direction) {
            offset += segment.width;
            edges[offset] = true;
        }
    }

    let mut line = String::with_capacity(1 + bits * cell_width(config));
    line.push(config.border_start_char);

    for bit in 1..=bits {
        for _ in 0..config.placeholder_units_per_bit {
            line.push(config.fill_char_even);
        }
        line.push(if bit == bits {
            config.border_end_char
        } else if edges[bit] {
            config.separator_char
        } else {
            config.fill_char_odd
        });
    }

    line
}

/// Field boxes of one row, in display order.
fn content_line(row: &Row, config: &RenderConfig) -> String {
    let cell = cell_width(config);
    let mut line = String::with_capacity(1 + row.width() * cell);
    line.push(config.separator_char);

    for segment in row.display_order(config.direction) {
        let inner = segment.width * cell - 1;
        let label = if segment.is_continuation {
            ""
        } else {
            segment.field_name.as_str()
        };

        line.push_str(&fit_label(label, inner));
        line.push(config.separator_char);
    }

    line
}

/// Centers `label` in `width` columns, truncating it when it does not fit.
///
/// When the padding cannot be split evenly the extra column goes to the left
/// if `width` is odd and to the right otherwise.
fn fit_label(label: &str, width: usize) -> String {
    let len = label.chars().count();

    if len > width {
        return truncate_label(label, width);
    }

    let pad = width - len;
    let left = pad / 2 + (pad & width & 1);
    let right = pad - left;

    format!("{}{}{}", " ".repeat(left), label, " ".repeat(right))
}

fn truncate_label(label: &str, width: usize) -> String {
    match width {
        0 => String::new(),
        1 => label.chars().take(1).collect(),
        2 | 3 => {
            let mut out: String = label.chars().take(width - 1).collect();
            out.push('.');
            out
        }
        _ => {
            let mut out: String = label.chars().take(width - ELLIPSIS.len()).collect();
            out.push_str(ELLIPSIS);
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{field::FieldSpec, field::Specification, layout::layout, spec::parse};

    fn render_spec(spec: &str, config: &RenderConfig) -> String {
        let spec = parse(spec).unwrap();
        render(&layout(&spec, config.bits_per_line).unwrap(), config).unwrap()
    }

    #[test]
    fn test_udp_header() {
        let expected = [
            " 0                   1                   2                   3",
            " 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1",
            "+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-|-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+",
            "|          Source Port          |        Destination Port       |",
            " 0                   1                   2                   3",
            " 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1",
            "+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-|-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+",
            "|             Length            |            Checksum           |",
            "+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-|-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+",
        ]
        .join("\n");

        let text = render_spec(
            "Source Port:16,Destination Port:16,Length:16,Checksum:16",
            &RenderConfig::default(),
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_split_field_and_short_last_row() {
        let config = RenderConfig {
            show_numbering: false,
            ..Default::default()
        };
        let expected = [
            "+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-|-+-+-+-+-+-+-+-+-+-+-+-+",
            "|                   A                   |           B           |",
            "+-+-+-+-+-+-+-+-|-+-+-+-+-+-+-+-+-+-+-+-|-+-+-+-+-+-+-+-+-+-+-+-+",
            "|               |",
            "+-+-+-+-+-+-+-+-+",
        ]
        .join("\n");

        assert_eq!(render_spec("A:20,B:20", &config), expected);
    }

    #[test]
    fn test_custom_characters() {
        let mut config = RenderConfig {
            bits_per_line: 8,
            show_numbering: false,
            ..Default::default()
        };
        config
            .set_border_start_char("#")
            .unwrap()
            .set_border_end_char("#")
            .unwrap()
            .set_fill_char_even("=")
            .unwrap()
            .set_fill_char_odd(".")
            .unwrap()
            .set_separator_char("!")
            .unwrap();

        let expected = ["#=.=.=.=!=.=.=.=#", "!   Hi  !   Lo  !", "#=.=.=.=!=.=.=.=#"].join("\n");
        assert_eq!(render_spec("Hi:4,Lo:4", &config), expected);
    }

    #[test]
    fn test_every_row_gets_its_own_numbering() {
        let expected = [
            " 0                   1                   2                   3",
            " 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1",
            "+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-|-+-+-+-+-+-+-+-+-+-+-+-+",
            "|                   A                   |           B           |",
            " 0 1 2 3 4 5 6 7",
            "+-+-+-+-+-+-+-+-|-+-+-+-+-+-+-+-+-+-+-+-|-+-+-+-+-+-+-+-+-+-+-+-+",
            "|               |",
            "+-+-+-+-+-+-+-+-+",
        ]
        .join("\n");

        assert_eq!(render_spec("A:20,B:20", &RenderConfig::default()), expected);
    }

    #[test]
    fn test_separator_marks_segment_edges_in_borders() {
        let config = RenderConfig {
            show_numbering: false,
            separator_char: '!',
            ..Default::default()
        };
        let expected = [
            "+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-!-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+",
            "!               A               !               B               !",
            "+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-!-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+",
        ]
        .join("\n");

        assert_eq!(render_spec("A:16,B:16", &config), expected);
    }

    #[test]
    fn test_right_to_left() {
        let config = RenderConfig {
            bits_per_line: 8,
            direction: Direction::RightToLeft,
            ..Default::default()
        };
        let expected = [
            " 7 6 5 4 3 2 1 0",
            "+-+-+-+-|-+-+-+-+",
            "|   Lo  |   Hi  |",
            "+-+-+-+-|-+-+-+-+",
        ]
        .join("\n");

        assert_eq!(render_spec("Hi:4,Lo:4", &config), expected);
    }

    #[test]
    fn test_wide_placeholder_prints_whole_numbers() {
        let config = RenderConfig {
            bits_per_line: 12,
            placeholder_units_per_bit: 2,
            ..Default::default()
        };
        let expected = [
            " 0  1  2  3  4  5  6  7  8  9  10 11",
            "+--+--+--+--+--+--+--+--|--+--+--+--+",
            "|          Type         |    Code   |",
            "+--+--+--+--+--+--+--+--|--+--+--+--+",
        ]
        .join("\n");

        assert_eq!(render_spec("Type:8,Code:4", &config), expected);
    }

    #[test]
    fn test_stacked_numbering_for_wide_rows() {
        let config = RenderConfig {
            bits_per_line: 128,
            ..Default::default()
        };
        let text = render_spec("Address:128", &config);
        let lines: Vec<&str> = text.lines().collect();

        // hundreds, tens, units
        assert!(lines[0].starts_with(" 0"));
        assert_eq!(lines[0].trim_end().len(), 1 + 100 * 2 + 1);
        assert!(lines[1].starts_with(" 0                   1"));
        assert!(lines[2].starts_with(" 0 1 2 3"));
        assert!(lines[3].starts_with("+-+"));
    }

    #[test]
    fn test_continuation_label_not_repeated() {
        let config = RenderConfig {
            bits_per_line: 8,
            show_numbering: false,
            ..Default::default()
        };
        let text = render_spec("Payload:24", &config);
        assert_eq!(text.matches("Payload").count(), 1);
    }

    #[test]
    fn test_truncated_labels() {
        assert_eq!(fit_label("Destination Port", 7), "Dest...");
        assert_eq!(fit_label("Offset", 3), "Of.");
        assert_eq!(fit_label("URG", 1), "U");
        assert_eq!(fit_label("ok", 2), "ok");
    }

    #[test]
    fn test_zero_line_width_layout_rejected() {
        let layout = Layout {
            bits_per_line: 0,
            rows: vec![],
        };
        assert_eq!(
            render(&layout, &RenderConfig::default()).unwrap_err(),
            ConfigError::InvalidLineWidth(0)
        );
    }

    #[test]
    fn test_control_char_rejected() {
        let spec = parse("A:8").unwrap();
        let config = RenderConfig {
            separator_char: '\t',
            ..Default::default()
        };
        assert!(render(&layout(&spec, 32).unwrap(), &config).is_err());
    }

    fn arb_spec() -> impl Strategy<Value = Specification> {
        prop::collection::vec(("[A-Za-z ]{1,12}", 1usize..=80), 1..12).prop_map(|fields| {
            Specification::new(
                fields
                    .into_iter()
                    .map(|(name, w)| FieldSpec::new(format!("x{}", name), w))
                    .collect(),
            )
            .unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_row_lines_are_aligned(spec in arb_spec(), bits in 1usize..=64, units in 1usize..=3) {
            let config = RenderConfig {
                bits_per_line: bits,
                placeholder_units_per_bit: units,
                show_numbering: false,
                ..Default::default()
            };
            let layout = layout(&spec, bits).unwrap();
            let text = render(&layout, &config).unwrap();
            let lines: Vec<&str> = text.lines().collect();

            prop_assert_eq!(lines.len(), layout.rows.len() * 2 + 1);
            for (i, row) in layout.rows.iter().enumerate() {
                let expected = 1 + row.width() * (units + 1);
                prop_assert_eq!(lines[2 * i + 1].chars().count(), expected);

                let below = layout.rows.get(i + 1).map_or(row.width(), |n| n.width().max(row.width()));
                prop_assert_eq!(lines[2 * i + 2].chars().count(), 1 + below * (units + 1));
            }
        }

        #[test]
        fn prop_render_is_idempotent(spec in arb_spec(), bits in 1usize..=64) {
            let config = RenderConfig { bits_per_line: bits, ..Default::default() };
            let layout = layout(&spec, bits).unwrap();
            prop_assert_eq!(render(&layout, &config).unwrap(), render(&layout, &config).unwrap());
        }

        #[test]
        fn prop_double_reversal_is_identity(spec in arb_spec(), bits in 1usize..=64) {
            let mut config = RenderConfig { bits_per_line: bits, ..Default::default() };
            let layout = layout(&spec, bits).unwrap();
            let original = render(&layout, &config).unwrap();

            config.direction = config.direction.reversed();
            config.direction = config.direction.reversed();
            prop_assert_eq!(render(&layout, &config).unwrap(), original);
        }
    }
}
