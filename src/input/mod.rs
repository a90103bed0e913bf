//! Input resolution: load a path, decide whether it is an image, decode it.
//!
//! Every failure here happens before any detector runs, so the analysis core
//! only ever sees a fully decoded [`RawInput`].

pub mod io;
pub mod pixels;
pub mod sniffers;

pub use self::io::{IOLimits, SafeFileReader};
pub use self::pixels::PixelGrid;
pub use self::sniffers::{CombinedSniffer, SniffResult};

use crate::error::{Result, StegError};
use image::ImageFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Analysis domain of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Image,
    File,
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileType::Image => write!(f, "image"),
            FileType::File => write!(f, "file"),
        }
    }
}

/// Decoded input handed to the analysis core.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    Image(PixelGrid),
    Bytes(Vec<u8>),
}

impl RawInput {
    pub fn file_type(&self) -> FileType {
        match self {
            RawInput::Image(_) => FileType::Image,
            RawInput::Bytes(_) => FileType::File,
        }
    }
}

/// An input that loaded successfully, with what the sniffers said about it.
#[derive(Debug, Clone)]
pub struct ResolvedInput {
    pub path: PathBuf,
    pub input: RawInput,
    pub mime: Option<String>,
}

fn unreadable(path: &Path, reason: impl ToString) -> StegError {
    StegError::InputUnreadable {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Image format the bundled decoder can read, identified by magic bytes.
fn decodable_format(prefix: &[u8]) -> Option<ImageFormat> {
    image::guess_format(prefix)
        .ok()
        .filter(|format| format.reading_enabled())
}

/// Load `path` and decode it as an image when its content says so.
///
/// Only formats the decoder supports are routed to the image domain; other
/// image formats are analysed as raw bytes. Content in a supported format that
/// fails to decode is reported as unreadable.
pub fn resolve(path: &Path, limits: IOLimits) -> Result<ResolvedInput> {
    if !path.exists() {
        return Err(StegError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = SafeFileReader::open(path, limits).map_err(|e| unreadable(path, e))?;
    let prefix = reader
        .read_prefix(io::MAX_SNIFF_SIZE as u64)
        .map_err(|e| unreadable(path, e))?;

    let sniff = CombinedSniffer::sniff(&prefix, Some(path));
    for conflict in &sniff.conflicts {
        warn!(path = %path.display(), "{}", conflict);
    }
    let format = decodable_format(&prefix);
    if format.is_none() && sniff.is_image() {
        warn!(
            path = %path.display(),
            "Image format {} is not supported by the decoder, analysing as file",
            sniff.mime().unwrap_or("unknown")
        );
    }
    let mime = sniff
        .mime()
        .map(str::to_string)
        .or_else(|| format.map(|f| f.to_mime_type().to_string()));

    let data = reader.read_all().map_err(|e| unreadable(path, e))?;
    let input = match format {
        Some(format) => {
            let decoded =
                image::load_from_memory_with_format(&data, format).map_err(|e| unreadable(path, e))?;
            let grid = PixelGrid::from_dynamic(&decoded);
            info!(
                "Loaded image: {} ({}, {}x{}, {} channels)",
                path.display(),
                mime.as_deref().unwrap_or("unknown"),
                grid.width(),
                grid.height(),
                grid.channels()
            );
            RawInput::Image(grid)
        }
        None => {
            info!("Loaded file: {} ({} bytes)", path.display(), data.len());
            RawInput::Bytes(data)
        }
    };

    Ok(ResolvedInput {
        path: path.to_path_buf(),
        input,
        mime,
    })
}
