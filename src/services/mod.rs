pub mod catalog_loader;

pub use catalog_loader::fetch_catalog;
