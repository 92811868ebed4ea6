#![no_main]

use libfuzzer_sys::fuzz_target;
use linesearch::{Segment, Template};

fuzz_target!(|data: &str| {
    // Limit input size to prevent hangs
    if data.len() > 10000 {
        return;
    }

    // Parsing is total and must never panic
    let template = Template::parse(data);

    // Skip rendering when a directive asks for an enormous pad width
    let padded = template.segments().iter().any(
        |segment| matches!(segment, Segment::Index { width: Some(w), .. } if *w > 4096),
    );
    if padded {
        return;
    }

    let _ = template.render(0, data);
    let _ = template.render(12345, "sample line");
});
