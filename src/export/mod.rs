pub mod json;

pub use json::{output_path_for_sheet, write_json_files, FailedSheet, WriteReport};
