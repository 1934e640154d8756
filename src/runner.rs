// src/runner.rs
use std::{error::Error, path::PathBuf};

use crate::{
    file,
    params::Params,
    progress::Progress,
    scrape::{self, CategoryBundle},
};

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub items: usize,
    pub skipped_rows: usize,
    /// Null `description`/`image_url` fields across all emitted items.
    pub null_fields: usize,
}

/// Top-level runner: scrape every configured category and export each one
/// to its JSON file. Categories are independent; they run in order.
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let mut summary = RunSummary {
        files_written: Vec::new(),
        items: 0,
        skipped_rows: 0,
        null_fields: 0,
    };

    for opts in &params.categories {
        let CategoryBundle { items, skipped_rows } =
            scrape::collect_category(opts, params.iconless, progress.as_deref_mut())?;

        let path = file::resolve_out_path(params.out_dir.as_deref(), opts.out_file);
        file::write_json(&path, &items)?;
        logf!("{}: wrote {} items to {}", opts.name, items.len(), path.display());

        summary.items += items.len();
        summary.skipped_rows += skipped_rows;
        summary.null_fields += items
            .iter()
            .map(|i| i.description.is_none() as usize + i.image_url.is_none() as usize)
            .sum::<usize>();
        summary.files_written.push(path);
    }

    Ok(summary)
}
