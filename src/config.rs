use crate::error::{Sheet2JsonError, Result};
use serde::{Deserialize, Serialize};
use sheet2json_common::options::{DEFAULT_EXCLUDED_SHEETS, DEFAULT_SETTINGS_SHEET};
use sheet2json_common::TransformOptions;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// マッピング定義シート名
    pub settings_sheet: String,
    /// 常に変換しないシート名
    pub excluded_sheets: BTreeSet<String>,
    /// JSON出力先ディレクトリ
    pub output_dir: PathBuf,
    /// 整形して出力
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_sheet: DEFAULT_SETTINGS_SHEET.into(),
            excluded_sheets: DEFAULT_EXCLUDED_SHEETS.iter().map(|s| s.to_string()).collect(),
            output_dir: PathBuf::from("out"),
            pretty: false,
        }
    }
}

impl Config {
    /// 既定の場所から読み込み（無ければデフォルト）
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定ファイルから読み込み（無ければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| Sheet2JsonError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("sheet2json").join("config.json"))
    }

    /// 変換器向けのオプション
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions::new(self.settings_sheet.clone(), self.excluded_sheets.iter().cloned())
    }

    /// CLI引数で上書き
    pub fn apply_overrides(
        &mut self,
        settings_sheet: Option<String>,
        exclude: &[String],
        output_dir: Option<PathBuf>,
        pretty: bool,
    ) {
        if let Some(name) = settings_sheet {
            self.settings_sheet = name;
        }
        self.excluded_sheets.extend(exclude.iter().cloned());
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        self.pretty |= pretty;
    }
}
