//! ワークブック読み込み（calamine）
//!
//! xlsx/xlsm/xlsb/xls/ods を拡張子から自動判定して開き、
//! 各シートを [`Grid`] として公開する。

use crate::error::{Sheet2JsonError, Result};
use calamine::{open_workbook_auto, Data, ExcelDateTime, Range, Reader};
use chrono::NaiveTime;
use sheet2json_common::Grid;
use std::path::Path;

/// calamineのシート1枚
#[derive(Debug, Clone)]
pub struct CalamineSheet {
    name: String,
    range: Range<Data>,
}

impl CalamineSheet {
    pub fn new(name: impl Into<String>, range: Range<Data>) -> Self {
        Self {
            name: name.into(),
            range,
        }
    }

    fn cell(&self, row: usize, col: usize) -> Option<&Data> {
        let row = u32::try_from(row).ok()?;
        let col = u32::try_from(col).ok()?;
        self.range.get_value((row, col))
    }
}

impl Grid for CalamineSheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn last_row(&self) -> Option<usize> {
        self.range.end().map(|(row, _)| row as usize)
    }

    fn last_column(&self, row: usize) -> Option<usize> {
        let (_, first_col) = self.range.start()?;
        let (_, last_col) = self.range.end()?;

        (first_col as usize..=last_col as usize)
            .rev()
            .find(|&col| matches!(self.cell(row, col), Some(cell) if !matches!(cell, Data::Empty)))
    }

    fn cell_text(&self, row: usize, col: usize) -> String {
        self.cell(row, col).map(cell_to_string).unwrap_or_default()
    }
}

/// セル値を文字列に変換
///
/// 数値は最短の10進表記（`30.0` → `"30"`）、日付は `YYYY-MM-DD`
/// （時刻があれば `YYYY-MM-DD HH:MM:SS`）。
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => format_datetime(dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

fn format_datetime(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return dt.as_f64().to_string();
    }
    match dt.as_datetime() {
        Some(value) if value.time() == NaiveTime::MIN => value.format("%Y-%m-%d").to_string(),
        Some(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => dt.as_f64().to_string(),
    }
}

/// 読み込んだワークブック（全シートをメモリに保持）
#[derive(Debug)]
pub struct Workbook {
    sheets: Vec<CalamineSheet>,
    unreadable: Vec<Sheet2JsonError>,
}

impl Workbook {
    /// ワークブックを開いて全シートを読み込む
    ///
    /// ファイル自体が開けない場合はエラー。個別シートの読み込み失敗は
    /// `unreadable()` に記録して残りのシートを読み続ける。
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Sheet2JsonError::FileNotFound(path.display().to_string()));
        }

        let mut workbook = open_workbook_auto(path).map_err(|e| {
            Sheet2JsonError::WorkbookOpen(format!("{}: {}", path.display(), e))
        })?;

        let mut sheets = Vec::new();
        let mut unreadable = Vec::new();

        for name in workbook.sheet_names() {
            match workbook.worksheet_range(&name) {
                Ok(range) => sheets.push(CalamineSheet::new(name, range)),
                Err(e) => {
                    tracing::warn!(sheet = %name, error = %e, "シートを読み込めません");
                    unreadable.push(Sheet2JsonError::SheetRead {
                        sheet: name,
                        message: e.to_string(),
                    });
                }
            }
        }

        tracing::debug!(path = %path.display(), sheets = sheets.len(), "ワークブックを読み込み");
        Ok(Self { sheets, unreadable })
    }

    /// ワークブック順のシート
    pub fn sheets(&self) -> &[CalamineSheet] {
        &self.sheets
    }

    /// 読み込みに失敗したシート
    pub fn unreadable(&self) -> &[Sheet2JsonError] {
        &self.unreadable
    }
}
