//! CLI tool for inspecting the tables detected in a single PDF

use pdf_tabular::extract_tables;
use std::env;
use std::process;
use std::time::Instant;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <pdf_file>", args[0]);
        eprintln!("       {} <pdf_file> --json", args[0]);
        process::exit(1);
    }

    let pdf_path = &args[1];
    let json_output = args.get(2).map(|a| a == "--json").unwrap_or(false);

    let start = Instant::now();

    match extract_tables(pdf_path) {
        Ok(tables) => {
            let elapsed = start.elapsed();

            if json_output {
                let entries: Vec<String> = tables
                    .iter()
                    .map(|t| {
                        let header: Vec<String> = t
                            .columns
                            .iter()
                            .map(|c| format!("\"{}\"", c.replace('\\', "\\\\").replace('"', "\\\"")))
                            .collect();
                        format!(
                            r#"{{"page":{},"columns":{},"rows":{},"header":[{}]}}"#,
                            t.page,
                            t.width(),
                            t.rows.len(),
                            header.join(",")
                        )
                    })
                    .collect();
                println!(
                    r#"{{"table_count":{},"tables":[{}],"detection_time_ms":{}}}"#,
                    tables.len(),
                    entries.join(","),
                    elapsed.as_millis()
                );
            } else {
                println!("Table Detection Results");
                println!("=======================");
                println!("File: {}", pdf_path);
                println!();
                println!("Tables found: {}", tables.len());
                println!("Detection time: {}ms", elapsed.as_millis());

                for (i, table) in tables.iter().enumerate() {
                    println!();
                    println!(
                        "Table {} (page {}): {} columns x {} rows",
                        i + 1,
                        table.page,
                        table.width(),
                        table.rows.len()
                    );
                    println!("  Header: {}", table.columns.join(" | "));
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
