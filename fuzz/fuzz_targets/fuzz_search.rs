#![no_main]

use libfuzzer_sys::fuzz_target;
use linesearch::{Options, Search, Segment, Template, input};
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Limit input size to prevent hangs
    if data.len() > 100000 {
        return;
    }

    // Split the data: first third is the pattern, second third is the
    // format string, the rest is the input text
    let third = data.len() / 3;
    let (pattern_bytes, rest) = data.split_at(third);
    let (format_bytes, input_bytes) = rest.split_at(third);

    let pattern = match std::str::from_utf8(pattern_bytes) {
        Ok(s) => s,
        Err(_) => return,
    };
    let format = match std::str::from_utf8(format_bytes) {
        Ok(s) => s,
        Err(_) => return,
    };
    let text = match std::str::from_utf8(input_bytes) {
        Ok(s) => s,
        Err(_) => return,
    };

    // Skip format strings that ask for an enormous pad width
    let template = Template::parse(format);
    let padded = template.segments().iter().any(
        |segment| matches!(segment, Segment::Index { width: Some(w), .. } if *w > 4096),
    );
    if padded {
        return;
    }

    // Derive the window options from the inputs so the corpus explores
    // the head/tail/invert combinations
    let options = Options {
        pattern: pattern.to_string(),
        invert: pattern.len() % 2 == 0,
        offset: format.len() as i64 - 8,
        head: text.len() % 2 == 0,
        tail: text.len() % 3 == 0,
        format: format.to_string(),
    };

    // Invalid patterns are rejected at compile time, not a crash
    let search = match Search::new(&options) {
        Ok(s) => s,
        Err(_) => return,
    };

    let lines = input::load_reader(Cursor::new(text));
    let mut output = Vec::new();
    let _ = search.run(&lines, &mut output);
});
