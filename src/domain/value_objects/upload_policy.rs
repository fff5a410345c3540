use crate::domain::value_objects::MediaKind;

const MIB: u64 = 1024 * 1024;

/// Per-kind upload policy: accepted extensions and size ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    allowed_extensions: &'static [&'static str],
    max_bytes: u64,
    type_hint: &'static str,
}

impl UploadPolicy {
    pub const IMAGE: UploadPolicy = UploadPolicy {
        allowed_extensions: &["jpg", "jpeg", "png", "gif", "bmp", "webp"],
        max_bytes: 10 * MIB,
        type_hint: "JPG, PNG, GIF, BMP, or WebP images",
    };

    pub const DOCUMENT: UploadPolicy = UploadPolicy {
        allowed_extensions: &["pdf", "doc", "docx", "txt", "xlsx", "xls", "ppt", "pptx"],
        max_bytes: 100 * MIB,
        type_hint: "PDF, Word, Excel, PowerPoint, or Text files",
    };

    pub fn for_kind(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Image => Self::IMAGE,
            MediaKind::Document => Self::DOCUMENT,
        }
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    pub fn allowed_extensions(&self) -> &'static [&'static str] {
        self.allowed_extensions
    }

    /// Human-readable list of accepted formats, used in rejection messages
    pub fn type_hint(&self) -> &'static str {
        self.type_hint
    }

    /// Size ceiling rendered in whole MiB ("10MB")
    pub fn size_label(&self) -> String {
        format!("{}MB", self.max_bytes / MIB)
    }

    /// Case-insensitive membership test; `extension` carries no leading dot
    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }
}
