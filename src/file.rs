// src/file.rs

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use crate::config::options::TableFormat;
use crate::csv::{parse_table, write_table};
use crate::error::CrawlError;

/// Read a whole table file. Delimiter follows the file extension.
pub fn read_table_file(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>), CrawlError> {
    let file = File::open(path)?;
    let delim = TableFormat::from_path(path).delim();
    Ok(parse_table(BufReader::new(file), delim)?)
}

/// Ensure parent dir exists; create/truncate the file; write header + every row.
/// No partial writes: the file is always rewritten from scratch.
pub fn write_table_file(path: &Path, headers: &[String], rows: &[Vec<String>]) -> Result<(), CrawlError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    let delim = TableFormat::from_path(path).delim();
    write_table(&mut out, headers, rows, delim)?;
    out.flush()?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), CrawlError> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
