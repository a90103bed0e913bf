//! Content and extension sniffers for image detection.
//!
//! Uses `infer` for content-based detection and `mime_guess` for
//! extension-based hints. Content always decides; the extension is only
//! consulted to flag disagreements.

use std::path::Path;
use tracing::debug;

/// Where a hint came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnifferSource {
    Infer,
    MimeGuess,
}

/// A single sniffer hint derived from content or extension.
#[derive(Debug, Clone, PartialEq)]
pub struct SniffHint {
    pub source: SnifferSource,
    pub mime: String,
    pub extension: Option<String>,
}

impl SniffHint {
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// Sniffer for content-based file type detection using `infer`.
pub struct ContentSniffer;

impl ContentSniffer {
    /// Identify the content type from the leading bytes.
    pub fn sniff_bytes(data: &[u8]) -> Option<SniffHint> {
        debug!("Sniffing {} bytes of content", data.len());

        match infer::get(data) {
            Some(kind) => {
                debug!(
                    "Content detected as {} ({})",
                    kind.mime_type(),
                    kind.extension()
                );
                let mime = if kind.matcher_type() == infer::MatcherType::Image
                    && !kind.mime_type().starts_with("image/")
                {
                    format!("image/{}", kind.extension())
                } else {
                    kind.mime_type().to_string()
                };
                Some(SniffHint {
                    source: SnifferSource::Infer,
                    mime,
                    extension: Some(kind.extension().to_string()),
                })
            }
            None => {
                debug!("No content type detected from {} bytes", data.len());
                None
            }
        }
    }
}

/// Sniffer for extension-based file type detection using `mime_guess`.
pub struct ExtensionSniffer;

impl ExtensionSniffer {
    pub fn sniff_path(path: &Path) -> Option<SniffHint> {
        let extension = path.extension()?.to_str()?;
        let mime = mime_guess::from_ext(extension).first()?;
        Some(SniffHint {
            source: SnifferSource::MimeGuess,
            mime: mime.to_string(),
            extension: Some(extension.to_ascii_lowercase()),
        })
    }
}

/// Outcome of running both sniffers.
#[derive(Debug, Clone, Default)]
pub struct SniffResult {
    pub content: Option<SniffHint>,
    pub extension: Option<SniffHint>,
    pub conflicts: Vec<String>,
}

impl SniffResult {
    /// Whether the content itself identifies an image.
    pub fn is_image(&self) -> bool {
        self.content.as_ref().is_some_and(SniffHint::is_image)
    }

    pub fn mime(&self) -> Option<&str> {
        self.content.as_ref().map(|h| h.mime.as_str())
    }
}

/// Combined sniffer that uses both content and extension detection.
pub struct CombinedSniffer;

impl CombinedSniffer {
    pub fn sniff(data: &[u8], path: Option<&Path>) -> SniffResult {
        let content = ContentSniffer::sniff_bytes(data);
        let extension = path.and_then(ExtensionSniffer::sniff_path);
        let conflicts = Self::detect_conflicts(content.as_ref(), extension.as_ref());
        SniffResult {
            content,
            extension,
            conflicts,
        }
    }

    /// Image-ness is the only distinction that matters for routing.
    fn detect_conflicts(content: Option<&SniffHint>, extension: Option<&SniffHint>) -> Vec<String> {
        let Some(ext) = extension else {
            return Vec::new();
        };
        let content_is_image = content.is_some_and(SniffHint::is_image);
        if content_is_image == ext.is_image() {
            return Vec::new();
        }
        let content_desc = content.map_or("unrecognised content", |h| h.mime.as_str());
        vec![format!(
            "Content suggests {} but extension suggests {}",
            content_desc, ext.mime
        )]
    }
}
