// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::params::{self, IconlessPolicy, Params};
use crate::progress::Progress;
use crate::runner;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&params, Some(&mut progress))?;

    for p in &summary.files_written {
        println!("Wrote {}", p.display());
    }
    if summary.skipped_rows > 0 {
        println!(
            "Dropped {} row(s) without a rarity icon. Rerun with --include-iconless to keep them.",
            summary.skipped_rows
        );
    }
    if summary.null_fields > 0 {
        println!(
            "{} null field(s) across {} item(s) — check the output for null values.",
            summary.null_fields, summary.items
        );
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-c" | "--category" => {
                let v = args.next().ok_or("Missing value for --category")?;
                params.categories = match v.to_ascii_lowercase().as_str() {
                    "characters" => vec![params::characters()],
                    "weapons" => vec![params::weapons()],
                    "all" => vec![params::characters(), params::weapons()],
                    other => return Err(format!("Unknown category: {}", other).into()),
                };
            }
            "-o" | "--out" => {
                params.out_dir =
                    Some(PathBuf::from(args.next().ok_or("Missing output directory")?));
            }
            "--include-iconless" => params.iconless = IconlessPolicy::IncludeDefault,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

/// Prints progress to stdout, one line per event.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        println!("{} row(s) to process", total);
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, name: &str) {
        self.done += 1;
        println!("[{}/{}] {}", self.done, self.total, name);
    }
    fn item_failed(&mut self, name: &str, what: &str) {
        println!("Failed to get {}: {}", what, name);
    }
}
