/*!
 * Upload File Type Routing
 *
 * Decides which extraction path an uploaded file takes: PDF parsing, plain
 * text decoding, or image OCR. The client filename's extension wins; files
 * without a recognised extension are sniffed by their magic bytes.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Text,
    Image,
    Unsupported,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Pdf => write!(f, "pdf"),
            FileKind::Text => write!(f, "text"),
            FileKind::Image => write!(f, "image"),
            FileKind::Unsupported => write!(f, "unsupported"),
        }
    }
}

const PDF_EXTENSIONS: [&str; 1] = [".pdf"];
const TEXT_EXTENSIONS: [&str; 1] = [".txt"];
const IMAGE_EXTENSIONS: [&str; 8] = [".png", ".jpg", ".jpeg", ".bmp", ".gif", ".tif", ".tiff", ".webp"];

/// Classify a file by its filename extension only
pub fn file_kind_from_name(filename: &str) -> Option<FileKind> {
    let extension = extract_extension(filename);
    if extension.is_empty() {
        return None;
    }

    if PDF_EXTENSIONS.contains(&extension.as_str()) {
        Some(FileKind::Pdf)
    } else if TEXT_EXTENSIONS.contains(&extension.as_str()) {
        Some(FileKind::Text)
    } else if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Some(FileKind::Image)
    } else {
        Some(FileKind::Unsupported)
    }
}

/// Classify a file by its leading bytes
pub fn file_kind_from_bytes(data: &[u8]) -> FileKind {
    match infer::get(data) {
        Some(kind) if kind.mime_type() == "application/pdf" => FileKind::Pdf,
        Some(kind) if kind.matcher_type() == infer::MatcherType::Image => FileKind::Image,
        _ => FileKind::Unsupported,
    }
}

/// Determine how an upload should be processed.
///
/// An extension we know about is trusted as-is, including an explicitly
/// unsupported one such as `.docx`. Missing extensions fall back to sniffing.
pub fn detect_file_kind(filename: &str, data: &[u8]) -> FileKind {
    match file_kind_from_name(filename) {
        Some(kind) => kind,
        None => file_kind_from_bytes(data),
    }
}

/// Extract file extension from filename (lowercased)
fn extract_extension(filename: &str) -> String {
    let basename = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    match basename.rfind('.') {
        Some(pos) if pos > 0 => basename[pos..].to_lowercase(),
        _ => String::new(),
    }
}
