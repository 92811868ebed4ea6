/// One piece of a parsed output template.
///
/// A directive is `%`, an optional `-`, optional digits, then `N` or `L`.
/// Anything else, including a `%` that does not complete a directive, is
/// literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, copied through unchanged.
    Literal(String),
    /// A `%N` directive: the 0-based line index as a decimal integer,
    /// honoring the captured printf-style flags.
    Index {
        left_align: bool,
        zero_pad: bool,
        width: Option<usize>,
    },
    /// A `%L` directive: the raw line text.
    Line,
}

/// A parsed output template, one segment per literal run or directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template string. Parsing is total: every input produces a
    /// segment list, with unrecognized `%` sequences kept as literals.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(pos) = rest.find('%') {
            literal.push_str(&rest[..pos]);
            let candidate = &rest[pos..];
            if let Some((segment, len)) = parse_directive(candidate) {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(segment);
                rest = &candidate[len..];
            } else {
                // Not a directive; the '%' is ordinary text. Rescan from
                // the next character so "%%L" still finds the "%L".
                literal.push('%');
                rest = &candidate[1..];
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// Expand the template against one line and its 0-based index. The
    /// trailing newline is the emitter's job, not the template's.
    pub fn render(&self, index: usize, line: &str) -> String {
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Line => out.push_str(line),
                Segment::Index {
                    left_align,
                    zero_pad,
                    width,
                } => {
                    let formatted = match *width {
                        Some(w) => {
                            if *zero_pad && !*left_align {
                                format!("{:0>width$}", index, width = w)
                            } else if *left_align {
                                format!("{:<width$}", index, width = w)
                            } else {
                                format!("{:>width$}", index, width = w)
                            }
                        }
                        None => index.to_string(),
                    };
                    out.push_str(&formatted);
                }
            }
        }

        out
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Try to read one directive at the start of `input`, which is known to
/// begin with `%`. Returns the segment and the number of bytes consumed.
fn parse_directive(input: &str) -> Option<(Segment, usize)> {
    let bytes = input.as_bytes();
    let mut i = 1;

    let left_align = bytes.get(i) == Some(&b'-');
    if left_align {
        i += 1;
    }

    let digits_start = i;
    while matches!(bytes.get(i), Some(b) if b.is_ascii_digit()) {
        i += 1;
    }
    let digits = &input[digits_start..i];

    match bytes.get(i) {
        Some(b'N') => {
            let segment = Segment::Index {
                left_align,
                zero_pad: digits.starts_with('0'),
                width: digits.parse().ok(),
            };
            Some((segment, i + 1))
        }
        // Width flags parse on %L too but have no meaning for raw text.
        Some(b'L') => Some((Segment::Line, i + 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal_only() {
        let template = Template::parse("plain text");
        assert_eq!(
            template.segments(),
            &[Segment::Literal("plain text".to_string())]
        );
    }

    #[test]
    fn test_parse_empty() {
        let template = Template::parse("");
        assert!(template.segments().is_empty());
    }

    #[test]
    fn test_parse_line_directive() {
        let template = Template::parse("%L");
        assert_eq!(template.segments(), &[Segment::Line]);
    }

    #[test]
    fn test_parse_index_directive() {
        let template = Template::parse("%N");
        assert_eq!(
            template.segments(),
            &[Segment::Index {
                left_align: false,
                zero_pad: false,
                width: None,
            }]
        );
    }

    #[test]
    fn test_parse_index_width() {
        let template = Template::parse("%8N");
        assert_eq!(
            template.segments(),
            &[Segment::Index {
                left_align: false,
                zero_pad: false,
                width: Some(8),
            }]
        );
    }

    #[test]
    fn test_parse_index_left_align() {
        let template = Template::parse("%-8N");
        assert_eq!(
            template.segments(),
            &[Segment::Index {
                left_align: true,
                zero_pad: false,
                width: Some(8),
            }]
        );
    }

    #[test]
    fn test_parse_index_zero_pad() {
        let template = Template::parse("%08N");
        assert_eq!(
            template.segments(),
            &[Segment::Index {
                left_align: false,
                zero_pad: true,
                width: Some(8),
            }]
        );
    }

    #[test]
    fn test_parse_mixed() {
        let template = Template::parse("a%Nb%Lc");
        assert_eq!(
            template.segments(),
            &[
                Segment::Literal("a".to_string()),
                Segment::Index {
                    left_align: false,
                    zero_pad: false,
                    width: None,
                },
                Segment::Literal("b".to_string()),
                Segment::Line,
                Segment::Literal("c".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_unknown_specifier_is_literal() {
        let template = Template::parse("%x");
        assert_eq!(template.segments(), &[Segment::Literal("%x".to_string())]);
    }

    #[test]
    fn test_parse_trailing_percent_is_literal() {
        let template = Template::parse("100%");
        assert_eq!(template.segments(), &[Segment::Literal("100%".to_string())]);
    }

    #[test]
    fn test_parse_double_percent_finds_directive() {
        // There is no %% escape; the first '%' is literal and the scan
        // resumes right after it, picking up "%L".
        let template = Template::parse("%%L");
        assert_eq!(
            template.segments(),
            &[Segment::Literal("%".to_string()), Segment::Line]
        );
    }

    #[test]
    fn test_parse_aborted_directive_is_literal() {
        let template = Template::parse("%-5%L");
        assert_eq!(
            template.segments(),
            &[Segment::Literal("%-5".to_string()), Segment::Line]
        );
    }

    #[test]
    fn test_parse_flags_on_line_directive_swallowed() {
        let template = Template::parse("%-10L");
        assert_eq!(template.segments(), &[Segment::Line]);
    }

    #[test]
    fn test_render_line() {
        let template = Template::parse("%L");
        assert_eq!(template.render(0, "hello"), "hello");
    }

    #[test]
    fn test_render_index_and_line() {
        let template = Template::parse("%N: %L");
        assert_eq!(template.render(3, "x"), "3: x");
    }

    #[test]
    fn test_render_width_right_justified() {
        let template = Template::parse("%5N");
        assert_eq!(template.render(42, ""), "   42");
    }

    #[test]
    fn test_render_width_left_justified() {
        let template = Template::parse("%-5N");
        assert_eq!(template.render(42, ""), "42   ");
    }

    #[test]
    fn test_render_zero_padded() {
        let template = Template::parse("%05N");
        assert_eq!(template.render(42, ""), "00042");
    }

    #[test]
    fn test_render_zero_flag_ignored_when_left_aligned() {
        let template = Template::parse("%-05N");
        assert_eq!(template.render(42, ""), "42   ");
    }

    #[test]
    fn test_render_width_never_truncates() {
        let template = Template::parse("%2N");
        assert_eq!(template.render(12345, ""), "12345");
    }

    #[test]
    fn test_render_bare_flags() {
        assert_eq!(Template::parse("%-N").render(42, ""), "42");
        assert_eq!(Template::parse("%0N").render(42, ""), "42");
    }

    #[test]
    fn test_render_flags_ignored_on_line() {
        let template = Template::parse("%-10L");
        assert_eq!(template.render(0, "abc"), "abc");
    }

    #[test]
    fn test_render_multibyte_literals() {
        let template = Template::parse("→%L←");
        assert_eq!(template.render(0, "mid"), "→mid←");
    }

    #[test]
    fn test_render_empty_template() {
        let template = Template::parse("");
        assert_eq!(template.render(9, "ignored"), "");
    }
}
