use std::env;
use std::io;
use std::process;

use linesearch::{Options, Search, input};

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args[1..]) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("linesearch: {}", e);
            process::exit(2);
        }
    }
}

fn run(args: &[String]) -> Result<i32, Box<dyn std::error::Error>> {
    let mut options = Options::default();
    let mut input_path = String::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if arg == "--help" || arg == "-h" {
            print_help();
            return Ok(0);
        }

        if arg == "--version" {
            println!("linesearch {}", env!("CARGO_PKG_VERSION"));
            return Ok(0);
        }

        if arg == "--head" {
            options.head = true;
        } else if arg == "--tail" {
            options.tail = true;
        } else if arg == "--not" {
            options.invert = true;
        } else if arg == "--regex" {
            i += 1;
            if i >= args.len() {
                return Err("option --regex requires an argument".into());
            }
            options.pattern = args[i].clone();
        } else if let Some(value) = arg.strip_prefix("--regex=") {
            options.pattern = value.to_string();
        } else if arg == "--offset" {
            i += 1;
            if i >= args.len() {
                return Err("option --offset requires an argument".into());
            }
            options.offset = parse_offset(&args[i])?;
        } else if let Some(value) = arg.strip_prefix("--offset=") {
            options.offset = parse_offset(value)?;
        } else if arg == "--input" {
            i += 1;
            if i >= args.len() {
                return Err("option --input requires an argument".into());
            }
            input_path = args[i].clone();
        } else if let Some(value) = arg.strip_prefix("--input=") {
            input_path = value.to_string();
        } else if arg == "--format" {
            i += 1;
            if i >= args.len() {
                return Err("option --format requires an argument".into());
            }
            options.format = args[i].clone();
        } else if let Some(value) = arg.strip_prefix("--format=") {
            options.format = value.to_string();
        } else if arg == "--" {
            // End of options; the tool takes no positional arguments.
            if let Some(extra) = args.get(i + 1) {
                return Err(format!("unexpected argument: {}", extra).into());
            }
            break;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(format!("unknown option: {}", arg).into());
        } else {
            return Err(format!("unexpected argument: {}", arg).into());
        }

        i += 1;
    }

    // Compile before touching the input so a bad pattern is reported even
    // when the input is missing or empty.
    let search = Search::new(&options)?;

    let lines = if input_path.is_empty() || input_path == "-" {
        let stdin = io::stdin();
        input::load_reader(stdin.lock())
    } else {
        input::load_file(&input_path)?
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();
    search.run(&lines, &mut output)?;

    Ok(0)
}

fn parse_offset(value: &str) -> Result<i64, Box<dyn std::error::Error>> {
    value
        .parse()
        .map_err(|_| format!("invalid offset: {}", value).into())
}

fn print_help() {
    println!(
        r#"Usage: linesearch [OPTIONS]

Scan input for the first line matching a regular expression and print a
window of lines around it.

Options:
  --regex pattern    Regex on which to trigger (default: ".*", every line)
  --not              Invert sense of regex, trigger when absent
  --offset n         Offset for the trigger line (default: 0)
  --head             Show lines before and including the trigger
  --tail             Show lines after and including the trigger
  --input path       Input file (default: standard input; "-" also reads
                     standard input)
  --format template  Format for how lines are displayed (default: "%L").
                     %N expands to the 0-based line number and honors
                     printf-style width flags (%6N, %-6N, %06N); %L
                     expands to the raw line text.
  --version          Print version information
  --help             Print this help message

Examples:
  linesearch --regex ERROR --tail --input server.log
  linesearch --regex 'fn main' --format '%N: %L' --input src/main.rs
  dmesg | linesearch --regex usb --offset -2 --head
"#
    );
}
