//! Markup file I/O operations
//!
//! This module provides functions for reading and writing worksheet markup files.

use crate::domain::markup::Document;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Markup file errors
#[derive(Debug, Error)]
pub enum MarkupIoError {
    #[error("Input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MarkupIoError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::InputNotFound(path.to_path_buf())
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    Ok(())
}

/// Load markup text
pub fn load_markup(path: impl AsRef<Path>) -> Result<String, MarkupIoError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| MarkupIoError::from_io(path, e))
}

/// Save a document
pub fn save_document(path: impl AsRef<Path>, document: &Document) -> Result<(), MarkupIoError> {
    let path = path.as_ref();
    let io_err = |source| MarkupIoError::Io {
        path: path.to_path_buf(),
        source,
    };

    ensure_parent_dir(path).map_err(io_err)?;
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(document.as_str().as_bytes()).map_err(io_err)?;
    writer.flush().map_err(io_err)
}
