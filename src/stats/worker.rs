use std::io::{self, Read};
use std::path::Path;

use thiserror::Error;

use crate::common::io::open_noatime;
use crate::common::io_error_msg;

use super::core::{count_chars, count_lines, WordScanner};

/// Fixed read buffer capacity. One read() returns at most this many bytes;
/// logical lines longer than this are reassembled across chunks (see
/// `process_input`).
pub const READ_BUF_CAP: usize = 64 * 1024;

/// Per-worker failures. Neither variant is fatal to the process: the owning
/// worker reports it and still signals completion.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("cannot open '{name}' for reading: {}", io_error_msg(.source))]
    Open { name: String, source: io::Error },

    #[error("'{name}': read error: {}", io_error_msg(.source))]
    Read { name: String, source: io::Error },
}

/// One input as handed to its worker: the name from the argument list and its
/// position in it.
#[derive(Debug, Clone)]
pub struct Input {
    pub name: String,
    pub index: usize,
}

/// One input's own counts, exclusively owned by its worker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileCounts {
    pub name: String,
    pub lines: u64,
    pub words: u64,
    pub chars: u64,
}

/// Consume one input and return its counts.
///
/// The input is read through a fixed `READ_BUF_CAP` buffer. Chunk boundaries
/// are invisible to the counts: newlines are counted per chunk and the word
/// scanner carries its boundary state across reads, so a logical line longer
/// than the buffer is counted exactly once, never as several lines. A final
/// line without a trailing newline still counts as a line.
///
/// A mid-read IO failure is treated as end-of-input: the counts accumulated
/// so far are kept and a diagnostic goes to stderr. No retries.
pub fn process_input(name: &str) -> Result<FileCounts, StatsError> {
    let mut file = open_noatime(Path::new(name)).map_err(|source| StatsError::Open {
        name: name.to_string(),
        source,
    })?;

    let mut counts = FileCounts {
        name: name.to_string(),
        ..Default::default()
    };
    let mut buf = vec![0u8; READ_BUF_CAP];
    let mut scanner = WordScanner::new();
    let mut last = b'\n';

    loop {
        let n = match file.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                let err = StatsError::Read {
                    name: name.to_string(),
                    source,
                };
                eprintln!("fstats: {err}");
                break;
            }
        };
        let chunk = &buf[..n];
        counts.lines += count_lines(chunk);
        counts.words += scanner.scan(chunk);
        counts.chars += count_chars(chunk);
        last = chunk[n - 1];
    }

    if last != b'\n' {
        counts.lines += 1;
    }

    Ok(counts)
}
