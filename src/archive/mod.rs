pub mod bundle;
pub mod metadata;

pub use bundle::{Bundle, BundleArchive, FixReport};
pub use metadata::{find_scene_id, is_collection_1_line, rewrite_metadata, MetadataRewrite};
