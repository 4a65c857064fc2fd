//! Build script to embed the built-in puzzle list
//!
//! Copies the rows of `data/puzzles.csv` into a generated const array; rows are
//! validated at runtime by the same parser that reads user-supplied files.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_rows(
        "data/puzzles.csv",
        &Path::new(&out_dir).join("puzzles.rs"),
        "PUZZLE_ROWS",
        "Built-in puzzle rows: phrase,category[,date,game_type]",
    );

    println!("cargo:rerun-if-changed=data/puzzles.csv");
}

fn generate_rows(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let count = rows.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
    for row in rows {
        writeln!(output, "    {row:?},").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of rows in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
