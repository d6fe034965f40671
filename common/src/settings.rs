//! 設定シート読み込み
//!
//! 1行目（インデックス0）が列見出し、2行目以降の列0がカテゴリ。
//! 各カテゴリ行のセル値が、その列見出しに対応する出力フィールド名になる。
//!
//! ```text
//!            | Name      | Age
//! Person     | full_name | years
//! Company    | name      |
//! ```

use crate::grid::Grid;
use crate::types::ColumnMapping;

const HEADER_ROW: usize = 0;

/// 設定シートから ColumnMapping を作る
///
/// - カテゴリ列が空の行は無視
/// - 空セルはエントリを作らない（空文字のマッピングにはしない）
/// - 同じカテゴリが複数行にある場合は同じエントリに追記し、
///   衝突した見出しだけ後の行の値で上書きする
pub fn load_settings_mappings<G: Grid + ?Sized>(sheet: &G) -> ColumnMapping {
    let mut mapping = ColumnMapping::new();

    let Some(last_row) = sheet.last_row() else {
        return mapping;
    };

    let headers = sheet.header_row(HEADER_ROW);
    tracing::debug!(sheet = sheet.name(), ?headers, "設定シートの見出し");

    for row in (HEADER_ROW + 1)..=last_row {
        let category = sheet.trimmed(row, 0);
        if category.is_empty() {
            continue;
        }

        if mapping.contains_category(&category) {
            tracing::debug!(%category, row, "カテゴリが重複、既存エントリに上書き");
        }

        let fields = mapping.category_entry(category);
        for (i, header) in headers.iter().enumerate() {
            let mapped = sheet.trimmed(row, i + 1);
            if !mapped.is_empty() {
                fields.insert(header.clone(), mapped);
            }
        }
    }

    mapping
}
