//! linesearch - find a trigger line by regex and print a window around it
//!
//! This crate scans a sequence of text lines for the first line matching
//! (or, inverted, first not matching) a regular expression, then prints a
//! configurable window of lines around that trigger line, each formatted
//! per a small template language: a minimal `grep -A/-B` with custom
//! output formatting.
//!
//! # Example
//!
//! ```
//! use linesearch::{Options, Search};
//!
//! let lines = vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()];
//! let options = Options {
//!     pattern: "bet".to_string(),
//!     ..Options::default()
//! };
//!
//! let search = Search::new(&options).unwrap();
//! let mut output = Vec::new();
//! search.run(&lines, &mut output).unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "beta\n");
//! ```
//!
//! # Context Window Example
//!
//! ```
//! use linesearch::{Options, Search};
//!
//! let lines: Vec<String> = ["ok", "error: boom", "trace a", "trace b"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! // Print the trigger line and everything after it, numbered.
//! let options = Options {
//!     pattern: "error".to_string(),
//!     tail: true,
//!     format: "%N: %L".to_string(),
//!     ..Options::default()
//! };
//!
//! let search = Search::new(&options).unwrap();
//! let mut output = Vec::new();
//! search.run(&lines, &mut output).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "1: error: boom\n2: trace a\n3: trace b\n"
//! );
//! ```
//!
//! # Template Example
//!
//! ```
//! use linesearch::Template;
//!
//! // %N is the 0-based line index (with printf-style width flags),
//! // %L is the raw line text.
//! let template = Template::parse("line %-4N|%L|");
//! assert_eq!(template.render(7, "text"), "line 7   |text|");
//! ```

pub mod error;
pub mod input;
pub mod search;
pub mod template;
pub mod window;

pub use error::{Error, Result};
pub use search::{Options, Search, find_trigger};
pub use template::{Segment, Template};
pub use window::Window;
