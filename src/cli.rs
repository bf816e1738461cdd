// src/cli.rs
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use crate::config::consts::COLLEGES;
use crate::config::options::Params;
use crate::crawl;
use crate::csv::{self, Delim};
use crate::driver::ChromeCatalog;
use crate::progress::Progress;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    if params.list_colleges {
        for (name, url) in COLLEGES {
            println!("{name},{url}");
        }
        return Ok(());
    }

    let colleges = resolve_colleges(&params)?;

    let mut cat = ChromeCatalog::launch()?;
    let mut progress = StderrProgress;
    let courses = crawl::run(&mut cat, &colleges, Some(&mut progress))?;

    // Export once, at the end, only on full success
    match &params.out {
        Some(path) => {
            let file = BufWriter::new(File::create(path)?);
            csv::export_courses(file, &courses, params.format)?;
        }
        None => {
            csv::export_courses(io::stdout().lock(), &courses, params.format)?;
        }
    }
    logf!("Exported {} course(s)", courses.len());
    Ok(())
}

fn resolve_colleges(params: &Params) -> Result<Vec<(&'static str, &'static str)>, Box<dyn Error>> {
    let Some(filter) = &params.colleges else {
        return Ok(COLLEGES.to_vec());
    };

    let mut out = Vec::with_capacity(filter.len());
    for want in filter {
        match COLLEGES.iter().find(|(name, _)| name.eq_ignore_ascii_case(want)) {
            Some(entry) => out.push(*entry),
            None => return Err(format!("Unknown college: {want}").into()),
        }
    }
    Ok(out)
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-c" | "--college" => {
                let v = args.next().ok_or("Missing value for --college")?;
                let list = params.colleges.get_or_insert_with(Vec::new);
                for part in v.split(',') {
                    let part = part.trim();
                    if !part.is_empty() {
                        list.push(part.to_string());
                    }
                }
            }
            "--list-colleges" => params.list_colleges = true,
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {other}").into()),
                };
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }
    Ok(())
}

/// Terminal progress sink: status on stderr, export on stdout.
struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Scraping {total} college(s)");
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn term_done(&mut self, college: &str, term: &str) {
        eprintln!("  {college}: quarter {term} done");
    }
}
