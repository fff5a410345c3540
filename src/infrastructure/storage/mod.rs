mod content_hasher;
mod local_file_share;
mod local_object_store;
mod local_root;
mod path_builder;

pub use content_hasher::ContentHasher;
pub use local_file_share::LocalFileShare;
pub use local_object_store::LocalObjectStore;
pub use local_root::{DirEntry, LocalRoot};
pub use path_builder::PathBuilder;
