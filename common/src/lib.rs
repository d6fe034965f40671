//! sheet2json Common Library
//!
//! 設定シートのマッピング読み込みとシート単位の行変換を行うコア。
//! ファイルI/Oは持たず、ワークブックへのアクセスは [`Grid`] トレイト経由で行う。

pub mod error;
pub mod grid;
pub mod json;
pub mod options;
pub mod reader;
pub mod selector;
pub mod settings;
pub mod transformer;
pub mod types;

pub use error::{Error, Result};
pub use grid::{Grid, MemorySheet};
pub use json::records_to_json;
pub use options::TransformOptions;
pub use reader::{read_sheet_with_mappings, RowPhase};
pub use selector::{select_sheet, skip_marker, SheetDecision};
pub use settings::load_settings_mappings;
pub use transformer::{SheetStatus, SheetTransformer, TransformOutcome};
pub use types::{ColumnMapping, FieldMapping, SheetRecord, SheetResult};
