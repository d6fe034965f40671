//! 変換オプション

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 既定の設定シート名
pub const DEFAULT_SETTINGS_SHEET: &str = "Einstellungen";

/// 既定の除外シート
pub const DEFAULT_EXCLUDED_SHEETS: &[&str] = &["Vorlage"];

/// 変換器に渡す設定値
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOptions {
    /// マッピングを定義するシート名（完全一致）
    pub settings_sheet: String,
    /// 常に変換対象外とするシート名
    pub excluded_sheets: BTreeSet<String>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            settings_sheet: DEFAULT_SETTINGS_SHEET.into(),
            excluded_sheets: DEFAULT_EXCLUDED_SHEETS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TransformOptions {
    pub fn new<I, S>(settings_sheet: impl Into<String>, excluded_sheets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            settings_sheet: settings_sheet.into(),
            excluded_sheets: excluded_sheets.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_excluded(&self, sheet_name: &str) -> bool {
        self.excluded_sheets.contains(sheet_name)
    }

    /// 設定値の整合性チェック
    ///
    /// 設定シートが除外シートにも含まれていても構わない（設定シートの判定が優先される）。
    pub fn validate(&self) -> Result<()> {
        if self.settings_sheet.trim().is_empty() {
            return Err(Error::Config("設定シート名が空です".into()));
        }
        Ok(())
    }
}
