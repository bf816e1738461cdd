// src/csv.rs
//
// Tabular text layer: quote-aware row writing, a tolerant row parser for
// re-import, and the course export.

use std::collections::HashSet;
use std::io::{self, Write};
use std::mem::take;

use crate::course::Course;

pub const EXPORT_HEADER: &[&str] = &[
    "College", "Department", "Code", "Name", "Credits", "Tags", "Prerequisites",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
        }
    }
}

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser (quotes + CRLF tolerant).
pub fn parse_rows(text: &str, delim: Delim) -> Vec<Vec<String>> {
    let sep = delim.sep();
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if !row.is_empty() && !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Flush a trailing unterminated row (tolerates missing final newline
    // and unterminated quotes).
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], delim: Delim) -> io::Result<()> {
    let sep = delim.sep();
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, "{sep}")?;
        } else {
            first = false;
        }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{escaped}\"")?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/* ---------------- Course export ---------------- */

/// Serialize the deduplicated course set: header row, then one row per
/// course in ascending record order, tags and prerequisites comma-joined
/// into single fields.
pub fn export_courses<W: Write>(
    mut w: W,
    courses: &HashSet<Course>,
    delim: Delim,
) -> io::Result<()> {
    let mut sorted: Vec<&Course> = courses.iter().collect();
    sorted.sort();

    let header: Vec<String> = EXPORT_HEADER.iter().map(|h| s!(*h)).collect();
    write_row(&mut w, &header, delim)?;

    for course in sorted {
        write_row(&mut w, &export_row(course), delim)?;
    }
    Ok(())
}

fn export_row(course: &Course) -> Vec<String> {
    vec![
        course.college.clone(),
        course.department.clone(),
        course.code.clone(),
        course.name.clone(),
        course.credits.to_string(),
        course.tags.join(","),
        course.prerequisites.join(","),
    ]
}
