//! 変換対象シートの判定

use crate::grid::Grid;
use crate::options::TransformOptions;
use serde::Serialize;
use std::fmt;

/// スキップマーカーのセル位置（行0・列1）
const SKIP_MARKER: (usize, usize) = (0, 1);

/// シートごとの判定結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "marker", rename_all = "camelCase")]
pub enum SheetDecision {
    /// 設定シート
    Settings,
    /// 除外リストに含まれる
    Excluded,
    /// スキップマーカーに値がある（テンプレート・休止中のシート）
    SkipMarker(String),
    /// 変換対象
    Eligible,
}

impl SheetDecision {
    pub fn is_eligible(&self) -> bool {
        matches!(self, SheetDecision::Eligible)
    }
}

impl fmt::Display for SheetDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetDecision::Settings => write!(f, "設定シート"),
            SheetDecision::Excluded => write!(f, "除外シート"),
            SheetDecision::SkipMarker(marker) => write!(f, "B1に値あり ({})", marker),
            SheetDecision::Eligible => write!(f, "変換対象"),
        }
    }
}

/// スキップマーカーの値（トリム後に空でなければ `Some`）
pub fn skip_marker<G: Grid + ?Sized>(sheet: &G) -> Option<String> {
    let (row, col) = SKIP_MARKER;
    let value = sheet.trimmed(row, col);
    (!value.is_empty()).then_some(value)
}

/// シートを変換するかどうかを判定
pub fn select_sheet<G: Grid + ?Sized>(sheet: &G, options: &TransformOptions) -> SheetDecision {
    let name = sheet.name();

    if name == options.settings_sheet {
        return SheetDecision::Settings;
    }
    if options.is_excluded(name) {
        return SheetDecision::Excluded;
    }
    match skip_marker(sheet) {
        Some(marker) => SheetDecision::SkipMarker(marker),
        None => SheetDecision::Eligible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::MemorySheet;

    fn options() -> TransformOptions {
        TransformOptions::default()
    }

    #[test]
    fn test_settings_sheet_is_not_converted() {
        let sheet = MemorySheet::new("Einstellungen", vec![vec!["", ""]]);
        assert_eq!(select_sheet(&sheet, &options()), SheetDecision::Settings);
    }

    #[test]
    fn test_excluded_sheet() {
        let sheet = MemorySheet::new("Vorlage", vec![vec!["", ""]]);
        assert_eq!(select_sheet(&sheet, &options()), SheetDecision::Excluded);
    }

    #[test]
    fn test_name_match_is_exact() {
        let sheet = MemorySheet::new("vorlage", vec![vec!["", ""]]);
        assert!(select_sheet(&sheet, &options()).is_eligible());
    }

    #[test]
    fn test_skip_marker_filled() {
        let sheet = MemorySheet::new("Kunden", vec![vec!["", "x"]]);
        assert_eq!(
            select_sheet(&sheet, &options()),
            SheetDecision::SkipMarker("x".into())
        );
    }

    #[test]
    fn test_whitespace_marker_is_blank() {
        let sheet = MemorySheet::new("Kunden", vec![vec!["Titel", "   "]]);
        assert_eq!(skip_marker(&sheet), None);
        assert!(select_sheet(&sheet, &options()).is_eligible());
    }

    #[test]
    fn test_missing_marker_cell_is_eligible() {
        let sheet = MemorySheet::new::<_, String>("Kunden", vec![]);
        assert!(select_sheet(&sheet, &options()).is_eligible());
    }
}
