use std::io::Write;

use regex::Regex;

use crate::error::Result;
use crate::template::Template;
use crate::window::Window;

/// Search configuration, one field per command-line flag.
#[derive(Debug, Clone)]
pub struct Options {
    /// Pattern used to find the trigger line (`--regex`).
    pub pattern: String,
    /// Invert the match predicate (`--not`).
    pub invert: bool,
    /// Signed adjustment applied to the trigger index (`--offset`).
    pub offset: i64,
    /// Include all lines before the selection index (`--head`).
    pub head: bool,
    /// Include all lines after the selection index (`--tail`).
    pub tail: bool,
    /// Output template (`--format`).
    pub format: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pattern: ".*".to_string(),
            invert: false,
            offset: 0,
            head: false,
            tail: false,
            format: "%L".to_string(),
        }
    }
}

/// Scan lines in ascending order for the first one where the (possibly
/// inverted) predicate holds.
///
/// The match is a substring search anywhere in the line, not a full-line
/// anchor. Returns `None` when no line qualifies, which is also the
/// immediate answer for an empty sequence.
pub fn find_trigger(lines: &[String], regex: &Regex, invert: bool) -> Option<usize> {
    lines.iter().position(|line| regex.is_match(line) != invert)
}

/// A compiled search: pattern and template are processed once here, then
/// the pipeline can run over any loaded line sequence.
#[derive(Debug)]
pub struct Search {
    regex: Regex,
    invert: bool,
    offset: i64,
    head: bool,
    tail: bool,
    template: Template,
}

impl Search {
    /// Compile the configuration. An invalid pattern fails here, before
    /// any input is read.
    pub fn new(options: &Options) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(&options.pattern)?,
            invert: options.invert,
            offset: options.offset,
            head: options.head,
            tail: options.tail,
            template: Template::parse(&options.format),
        })
    }

    /// Locate the trigger, select the window, and write each selected
    /// line through the template in ascending line order.
    ///
    /// No trigger means no output; that is a normal outcome, not an
    /// error.
    pub fn run<W: Write>(&self, lines: &[String], out: &mut W) -> Result<()> {
        let Some(trigger) = find_trigger(lines, &self.regex, self.invert) else {
            return Ok(());
        };

        let window = Window::select(trigger, self.offset, self.head, self.tail, lines.len());
        for (index, line) in lines.iter().enumerate() {
            if window.contains(index) {
                writeln!(out, "{}", self.template.render(index, line))?;
            }
        }

        Ok(())
    }
}
