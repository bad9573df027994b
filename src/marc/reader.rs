//! Streaming access to ISO 2709 files.
//!
//! Decoding is done by [`mrrc::MarcReader`] in strict mode: every structural
//! defect surfaces as an error for its record. This module turns those
//! errors into skip-or-stop decisions for the batch.

use super::Record;
use crate::error::{Result, ValidatorError};
use mrrc::MarcReader;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Records of one ISO 2709 stream, in file order
///
/// Yields one `Result` per record. A record with a broken body yields
/// [`ValidatorError::MalformedRecord`] and decoding continues with the next
/// record. Once a [`ValidatorError::UnreadableStream`] has been yielded the
/// stream is exhausted.
pub struct RecordStream<R: Read> {
    reader: MarcReader<R>,
    position: usize,
    exhausted: bool,
}

impl RecordStream<BufReader<File>> {
    /// Open a MARC file for reading
    pub fn open(path: &Path) -> Result<Self> {
        if path.is_dir() {
            return Err(ValidatorError::UnreadableInput {
                path: path.to_path_buf(),
                reason: "is a directory".to_string(),
            });
        }

        let reader = MarcReader::from_path(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ValidatorError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => ValidatorError::UnreadableInput {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })?;

        debug!("Opened MARC input {}", path.display());
        Ok(Self::from_reader(reader))
    }
}

impl<R: Read> RecordStream<R> {
    pub fn new(source: R) -> Self {
        Self::from_reader(MarcReader::new(source))
    }

    fn from_reader(reader: MarcReader<R>) -> Self {
        Self {
            reader,
            position: 0,
            exhausted: false,
        }
    }

    /// Records attempted so far, malformed ones included
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<R: Read> Iterator for RecordStream<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        match self.reader.read_record() {
            Ok(Some(record)) => {
                self.position += 1;
                debug!(
                    "Decoded record {} ({} data fields)",
                    self.position,
                    record.fields().count()
                );
                Some(Ok(record))
            }
            // A partial leader at the end of input also lands here
            Ok(None) => {
                self.exhausted = true;
                None
            }
            Err(source) => {
                self.position += 1;
                let error = ValidatorError::from_marc(self.position, source);
                if error.is_fatal() {
                    self.exhausted = true;
                }
                Some(Err(error))
            }
        }
    }
}
