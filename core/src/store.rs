//! Flat-file persistence for resource identifiers and mirrored values.
//!
//! # Design
//! The format is one resource per line, `identifier` or
//! `identifier<TAB>value`, with the value written as the lowercase token.
//! Whether a file holds a single boolean or a sequence is a parsing rule,
//! not runtime type inspection: exactly one line loads as
//! [`Stored::Single`], any other count loads as [`Stored::Sequence`] in
//! file order. Loading performs no network calls; values are taken as given
//! and not verified against the remote resources.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::bits::BitString;
use crate::boolean::RemoteBool;
use crate::remote::Remote;
use crate::types::to_token;

/// A persisted entity, tagged by shape.
#[derive(Debug, Clone)]
pub enum Stored {
    Single(RemoteBool),
    Sequence(BitString),
}

impl Stored {
    pub fn as_single(&self) -> Option<&RemoteBool> {
        match self {
            Stored::Single(boolean) => Some(boolean),
            Stored::Sequence(_) => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&BitString> {
        match self {
            Stored::Single(_) => None,
            Stored::Sequence(bits) => Some(bits),
        }
    }

    pub fn into_single(self) -> Option<RemoteBool> {
        match self {
            Stored::Single(boolean) => Some(boolean),
            Stored::Sequence(_) => None,
        }
    }

    pub fn into_sequence(self) -> Option<BitString> {
        match self {
            Stored::Single(_) => None,
            Stored::Sequence(bits) => Some(bits),
        }
    }
}

impl From<RemoteBool> for Stored {
    fn from(boolean: RemoteBool) -> Self {
        Stored::Single(boolean)
    }
}

impl From<BitString> for Stored {
    fn from(bits: BitString) -> Self {
        Stored::Sequence(bits)
    }
}

/// Errors from [`save`] and [`load`].
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),

    /// A line had the wrong field count or an unrecognized value token.
    Malformed { line: usize, content: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "I/O failed: {err}"),
            StoreError::Malformed { line, content } => {
                write!(f, "malformed line {line}: {content:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            StoreError::Malformed { .. } => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

/// Write `stored` to `path`, one resource per line in index order.
///
/// With `include_value` each line is `identifier<TAB>value`; without it only
/// the identifier is written and a later [`load`] assumes false.
pub fn save(path: impl AsRef<Path>, stored: &Stored, include_value: bool) -> Result<(), StoreError> {
    let mut contents = String::new();
    match stored {
        Stored::Single(boolean) => write_line(&mut contents, boolean, include_value),
        Stored::Sequence(bits) => {
            for boolean in bits {
                write_line(&mut contents, boolean, include_value);
            }
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

/// Read `path` and reassemble the persisted entity.
///
/// Exactly one line yields [`Stored::Single`]; any other line count yields a
/// [`Stored::Sequence`] whose length is the line count, in file order. The
/// optional value field accepts `true`/`True`/`false`/`False` and defaults
/// to false when absent. The loaded entities attach to `remote` without any
/// network traffic.
pub fn load(path: impl AsRef<Path>, remote: &Remote) -> Result<Stored, StoreError> {
    let contents = fs::read_to_string(path)?;
    let mut booleans = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let (id, value) = parse_line(line).ok_or_else(|| StoreError::Malformed {
            line: index + 1,
            content: line.to_string(),
        })?;
        booleans.push(RemoteBool::attach(remote, id, value));
    }
    if booleans.len() == 1 {
        Ok(Stored::Single(booleans.remove(0)))
    } else {
        Ok(Stored::Sequence(BitString::from_bits(booleans)))
    }
}

fn write_line(contents: &mut String, boolean: &RemoteBool, include_value: bool) {
    contents.push_str(boolean.id());
    if include_value {
        contents.push('\t');
        contents.push_str(to_token(boolean.value()));
    }
    contents.push('\n');
}

fn parse_line(line: &str) -> Option<(&str, bool)> {
    let mut fields = line.split('\t');
    let id = fields.next()?;
    let value = match fields.next() {
        None => false,
        Some("true") | Some("True") => true,
        Some("false") | Some("False") => false,
        Some(_) => return None,
    };
    if fields.next().is_some() {
        return None;
    }
    Some((id, value))
}
