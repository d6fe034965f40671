//! 変換データの型定義
//!
//! - ColumnMapping: 設定シートから作るカテゴリ別の列名マッピング
//! - SheetRecord: データ行1行分の出力（フィールド順を保持）
//! - SheetResult: シート名 → レコード列

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 元の列見出し → 出力フィールド名
pub type FieldMapping = IndexMap<String, String>;

/// 1行分の出力レコード（挿入順 = 列の出現順）
pub type SheetRecord = IndexMap<String, String>;

/// シート名 → レコード列（ワークブック順）
pub type SheetResult = IndexMap<String, Vec<SheetRecord>>;

/// カテゴリ → (列見出し → 出力フィールド名) のマッピング
///
/// 設定シートの読み込み時にのみ組み立てられ、以降は読み取り専用。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMapping {
    categories: IndexMap<String, FieldMapping>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// カテゴリのエントリを取得（なければ空で作成）
    pub(crate) fn category_entry(&mut self, category: String) -> &mut FieldMapping {
        self.categories.entry(category).or_default()
    }

    /// カテゴリに対応する列マッピング
    pub fn category(&self, category: &str) -> Option<&FieldMapping> {
        self.categories.get(category)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// (カテゴリ, 列見出し) から出力フィールド名を引く
    pub fn field_for(&self, category: &str, header: &str) -> Option<&str> {
        self.categories
            .get(category)
            .and_then(|fields| fields.get(header))
            .map(String::as_str)
    }

    /// カテゴリ名一覧（設定シートでの出現順）
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
