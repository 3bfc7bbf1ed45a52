//! CLI tool for batch PDF table extraction to XLSX workbooks

use pdf_tabular::process_directory;
use std::env;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <input_dir> [output_dir]", args[0]);
        eprintln!();
        eprintln!("Extracts tables from every PDF in <input_dir> and writes one");
        eprintln!("workbook per document ({{name}}_tables.xlsx) into [output_dir]");
        eprintln!("(default: <input_dir>/output_tables).");
        process::exit(1);
    }

    let input = PathBuf::from(&args[1]);
    let output = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| input.join("output_tables"));

    let start = Instant::now();

    match process_directory(&input, &output) {
        Ok(summary) => {
            println!("Batch PDF Table Extraction");
            println!("==========================");
            println!("Input:  {}", input.display());
            println!("Output: {}", output.display());
            println!();
            println!("PDF files found: {}", summary.files_seen);
            println!("Workbooks written: {}", summary.processed);
            println!("Elapsed: {}ms", start.elapsed().as_millis());

            // Scripting contract: candidate files present, none succeeded.
            if summary.files_seen > 0 && summary.processed == 0 {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
