//! 変換パイプライン
//!
//! ワークブック読み込み → 変換 → JSON出力 を順に実行する。

use crate::error::Result;
use crate::export::{write_json_files, WriteReport};
use crate::workbook::Workbook;
use sheet2json_common::{
    ColumnMapping, SheetStatus, SheetTransformer, TransformOptions, TransformOutcome,
};
use std::path::Path;

/// 1回の変換の結果
#[derive(Debug)]
pub struct ConversionSummary {
    pub outcome: TransformOutcome,
    pub report: WriteReport,
    /// 読み込めなかったシートのエラーメッセージ
    pub unreadable: Vec<String>,
}

impl ConversionSummary {
    pub fn is_success(&self) -> bool {
        self.report.is_success() && self.unreadable.is_empty()
    }
}

/// ワークブックを変換してJSONを書き出す
pub fn convert_workbook(
    input: &Path,
    output_dir: &Path,
    options: TransformOptions,
    pretty: bool,
) -> Result<ConversionSummary> {
    let transformer = SheetTransformer::new(options)?;
    let workbook = Workbook::open(input)?;

    let outcome = transformer.transform(workbook.sheets());
    let report = write_json_files(&outcome.sheets, output_dir, pretty)?;

    Ok(ConversionSummary {
        outcome,
        report,
        unreadable: workbook.unreadable().iter().map(|e| e.to_string()).collect(),
    })
}

/// 設定シートのマッピングだけを読む
pub fn load_mappings(input: &Path, options: TransformOptions) -> Result<ColumnMapping> {
    let transformer = SheetTransformer::new(options)?;
    let workbook = Workbook::open(input)?;
    Ok(transformer.load_mappings(workbook.sheets()))
}

/// 各シートの変換可否を一覧する（出力なし）
pub fn survey_workbook(input: &Path, options: TransformOptions) -> Result<Vec<SheetStatus>> {
    let transformer = SheetTransformer::new(options)?;
    let workbook = Workbook::open(input)?;
    Ok(transformer.survey(workbook.sheets()))
}
