/// Kind of file an upload targets; selects the upload policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Product image, stored in the object store
    Image,
    /// Contract document, stored in the file share
    Document,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Document => write!(f, "document"),
        }
    }
}
