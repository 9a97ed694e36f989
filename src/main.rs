//! sumsheet - evaluate batches of sum-formula spreadsheets.

mod error;
mod reader;

use std::env;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use sumsheet_engine::ColumnCodec;

fn print_usage() {
    eprintln!("Usage: sumsheet [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]        Batch input file; \"-\" or no argument reads stdin");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -h, --help    Print help");
    eprintln!();
    eprintln!("The input starts with the number of sheets. Each sheet has a");
    eprintln!("\"cols rows\" header followed by that many rows of cells, where a");
    eprintln!("cell is an integer or a sum formula such as =A1+B2. The output");
    eprintln!("repeats each sheet with every formula replaced by its value.");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut file_path: Option<PathBuf> = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            arg if arg.starts_with('-') && arg != "-" => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if file_path.is_none() {
                    file_path = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }

    if let Err(e) = run(file_path.as_deref()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(path: Option<&Path>) -> anyhow::Result<()> {
    let input = match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("cannot read {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read stdin")?;
            buf
        }
    };

    let codec = ColumnCodec::new();
    let sheets = reader::read_batch(&input, &codec)?;

    let mut stdout = std::io::stdout().lock();
    for (i, mut sheet) in sheets.into_iter().enumerate() {
        sheet.compute();
        if i > 0 {
            writeln!(stdout)?;
        }
        write!(stdout, "{}", sheet.render())?;
    }
    Ok(())
}
