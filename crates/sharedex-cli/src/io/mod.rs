pub mod catalog_file;
pub mod deck_file;
