/// loading of the reference dataset from JSON files
pub mod load_from_file;
