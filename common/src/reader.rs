//! データシートの行読み込み
//!
//! 行インデックスで段階が決まる:
//! `Reserved`(行0) → `HeaderCapture`(行1) → `DataRows`(行2以降)

use crate::grid::Grid;
use crate::types::{ColumnMapping, SheetRecord};

/// 行インデックスに対応する読み込み段階
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPhase {
    /// スキップマーカーやメタ情報用の予約行
    Reserved,
    /// 列見出し行
    HeaderCapture,
    /// データ行
    DataRows,
}

impl RowPhase {
    pub fn for_row(row: usize) -> Self {
        match row {
            0 => RowPhase::Reserved,
            1 => RowPhase::HeaderCapture,
            _ => RowPhase::DataRows,
        }
    }
}

/// シートの各データ行をカテゴリ別マッピングで変換する
///
/// カテゴリ（列0）が空、またはマッピングに無い行は出力しない。
/// マッピングされた見出しが1つも無くてもカテゴリが一致すれば空レコードを出力する。
pub fn read_sheet_with_mappings<G: Grid + ?Sized>(
    sheet: &G,
    mappings: &ColumnMapping,
) -> Vec<SheetRecord> {
    let mut records = Vec::new();
    let mut headers: Vec<String> = Vec::new();

    let Some(last_row) = sheet.last_row() else {
        return records;
    };

    tracing::debug!(sheet = sheet.name(), "シート読み込み");

    for row in 0..=last_row {
        match RowPhase::for_row(row) {
            RowPhase::Reserved => {}
            RowPhase::HeaderCapture => {
                headers = sheet.header_row(row);
                tracing::debug!(sheet = sheet.name(), ?headers, "列見出しを設定");
            }
            RowPhase::DataRows => {
                let category = sheet.trimmed(row, 0);
                if category.is_empty() {
                    continue;
                }
                let Some(fields) = mappings.category(&category) else {
                    tracing::debug!(sheet = sheet.name(), row, %category, "未定義カテゴリの行を除外");
                    continue;
                };

                let mut record = SheetRecord::new();
                for (i, header) in headers.iter().enumerate() {
                    if let Some(field) = fields.get(header) {
                        record.insert(field.clone(), sheet.trimmed(row, i + 1));
                    }
                }

                tracing::trace!(sheet = sheet.name(), row, ?record, "行を変換");
                records.push(record);
            }
        }
    }

    records
}
