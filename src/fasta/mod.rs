use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::{Error, Result};

pub const DEFAULT_LINE_WIDTH: usize = 60;

/// A single FASTA record. `header` carries no leading `>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FastaRecord {
    pub header: String,
    pub sequence: String,
}

pub fn fasta_filename(seq_id: &str) -> String {
    format!("{}.fasta", seq_id)
}

pub fn build_header(seq_id: &str, description: &str) -> String {
    format!("{} {}", seq_id, description)
}

/// Splits `sequence` into lines of at most `width` characters.
/// A width of zero disables wrapping.
pub fn wrap(sequence: &str, width: usize) -> Vec<&str> {
    if sequence.is_empty() {
        return Vec::new();
    }
    if width == 0 {
        return vec![sequence];
    }

    let mut lines = Vec::with_capacity(sequence.len() / width + 1);
    let mut start = 0;
    let mut chars = 0;
    for (i, _) in sequence.char_indices() {
        if chars == width {
            lines.push(&sequence[start..i]);
            start = i;
            chars = 0;
        }
        chars += 1;
    }
    if start < sequence.len() {
        lines.push(&sequence[start..]);
    }
    lines
}

pub fn write_record<W: Write>(writer: &mut W, header: &str, sequence: &str, width: usize) -> Result<()> {
    writeln!(writer, ">{}", header)?;
    for line in wrap(sequence, width) {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Writes a single-record FASTA file, truncating `path` if it exists.
/// An existing file keeps its permissions; a symlink is written through.
pub fn save_to_fasta<P: AsRef<Path>>(path: P, header: &str, sequence: &str, width: usize) -> Result<()> {
    if width == 0 {
        return Err(Error::InvalidInput("line width must be greater than zero".to_string()));
    }

    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_record(&mut writer, header, sequence, width)?;
    writer.flush()?;

    info!("wrote {} characters to {}", sequence.chars().count(), path.display());
    Ok(())
}

/// Reads the first record of a FASTA file. Sequence lines are concatenated.
pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<FastaRecord> {
    let file = File::open(path)?;
    read_record(BufReader::new(file))
}

pub fn read_record<R: BufRead>(reader: R) -> Result<FastaRecord> {
    let mut header: Option<String> = None;
    let mut sequence = String::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if let Some(rest) = line.strip_prefix('>') {
            if header.is_some() {
                break;
            }
            header = Some(rest.to_string());
        } else if header.is_some() {
            sequence.push_str(line);
        } else if !line.trim().is_empty() {
            return Err(Error::Parse("sequence data before the first '>' header".to_string()));
        }
    }

    match header {
        Some(header) => Ok(FastaRecord { header, sequence }),
        None => Err(Error::Parse("no '>' header line found".to_string())),
    }
}
