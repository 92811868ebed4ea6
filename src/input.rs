use std::fs;
use std::io::BufRead;

use crate::error::Result;

/// Read a whole file into the line sequence.
///
/// The file content is split on `'\n'`. A file that ends with a newline
/// produces one trailing empty element from the split; that element is
/// dropped so the sequence holds exactly the lines of the file. Any read
/// failure is fatal and propagated to the caller.
pub fn load_file(path: &str) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    if let Some(last) = lines.last()
        && last.is_empty()
    {
        lines.pop();
    }
    Ok(lines)
}

/// Read lines from a stream until end-of-stream.
///
/// Each line has its trailing `'\n'` stripped; a partial final line
/// without a trailing newline is included. A read failure mid-stream ends
/// the input like end-of-stream does, keeping the lines read so far.
pub fn load_reader<R: BufRead>(mut reader: R) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                }
                lines.push(line.clone());
            }
        }
    }

    lines
}
