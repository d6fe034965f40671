//! sheet2json
//!
//! 設定シートのマッピングに従って、ワークブックの各シートをJSONファイルに変換する。

pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod export;
pub mod logging;
pub mod workbook;

pub use sheet2json_common as common;
