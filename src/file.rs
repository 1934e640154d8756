// src/file.rs

use std::{
    error::Error,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

/// Serialize `value` to `path` as UTF-8 JSON indented with four spaces,
/// overwriting any existing file. No trailing newline: rerunning against an
/// unchanged source must produce a byte-identical file.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    {
        let fmt = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut out, fmt);
        value.serialize(&mut ser)?;
    }
    out.flush()?;
    Ok(())
}

/// Category files land in `out_dir` when given, else the working directory.
pub fn resolve_out_path(out_dir: Option<&Path>, filename: &str) -> PathBuf {
    match out_dir {
        Some(dir) => dir.join(filename),
        None => PathBuf::from(filename),
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
