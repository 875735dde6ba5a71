// src/csv.rs
use std::io::{Read, Write};

/* ---------------- Parsing ---------------- */

/// Read a delimited table: first record is the header. Rows must match the header width.
pub fn parse_table<R: Read>(input: R, delim: u8) -> Result<(Vec<String>, Vec<Vec<String>>), csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delim)
        .has_headers(true)
        .from_reader(input);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok((headers, rows))
}

/* ---------------- Writing ---------------- */

/// Write header + rows. Quoting is handled by the writer (fields with the
/// delimiter, quotes or newlines get quoted).
pub fn write_table<W: Write>(
    out: W,
    headers: &[String],
    rows: &[Vec<String>],
    delim: u8,
) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new().delimiter(delim).from_writer(out);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
