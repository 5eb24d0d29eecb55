mod manager;
mod persistence;

pub use manager::FeedCatalog;
pub use persistence::{builtin_catalog, load_catalog, parse_catalog};
