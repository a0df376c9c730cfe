pub mod document;

pub use document::DocumentMeta;
pub use document::load_manifest;
