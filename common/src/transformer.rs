//! シート変換器
//!
//! 設定シート読み込み → シート選別 → 行変換 を1回の呼び出しで行う。

use crate::error::Result;
use crate::grid::Grid;
use crate::options::TransformOptions;
use crate::reader::read_sheet_with_mappings;
use crate::selector::{select_sheet, SheetDecision};
use crate::settings::load_settings_mappings;
use crate::types::{ColumnMapping, SheetResult};
use serde::Serialize;

/// シート1枚分の判定と出力件数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetStatus {
    pub name: String,
    #[serde(flatten)]
    pub decision: SheetDecision,
    /// 変換したレコード数（対象外シートは `None`）
    pub records: Option<usize>,
}

/// 変換結果
#[derive(Debug, Clone, Default)]
pub struct TransformOutcome {
    pub mappings: ColumnMapping,
    pub sheets: SheetResult,
    /// ワークブック順の全シートの判定
    pub statuses: Vec<SheetStatus>,
}

impl TransformOutcome {
    /// 変換対象外になったシート
    pub fn skipped(&self) -> impl Iterator<Item = &SheetStatus> {
        self.statuses.iter().filter(|s| !s.decision.is_eligible())
    }
}

#[derive(Debug, Clone)]
pub struct SheetTransformer {
    options: TransformOptions,
}

impl SheetTransformer {
    pub fn new(options: TransformOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// 設定シートを探してマッピングを作る。無ければ空のマッピング
    pub fn load_mappings<G: Grid>(&self, sheets: &[G]) -> ColumnMapping {
        match sheets.iter().find(|s| s.name() == self.options.settings_sheet) {
            Some(settings) => {
                let mapping = load_settings_mappings(settings);
                tracing::info!(
                    sheet = %self.options.settings_sheet,
                    categories = mapping.len(),
                    "設定シートを読み込み"
                );
                mapping
            }
            None => {
                tracing::warn!(
                    sheet = %self.options.settings_sheet,
                    "設定シートが見つかりません。全データ行が出力対象外になります"
                );
                ColumnMapping::new()
            }
        }
    }

    pub fn decide<G: Grid + ?Sized>(&self, sheet: &G) -> SheetDecision {
        select_sheet(sheet, &self.options)
    }

    /// 全シートの判定だけを行う（出力なし）
    pub fn survey<G: Grid>(&self, sheets: &[G]) -> Vec<SheetStatus> {
        sheets
            .iter()
            .map(|sheet| SheetStatus {
                name: sheet.name().to_string(),
                decision: self.decide(sheet),
                records: None,
            })
            .collect()
    }

    /// ワークブックの全シートを変換する
    pub fn transform<G: Grid>(&self, sheets: &[G]) -> TransformOutcome {
        let mappings = self.load_mappings(sheets);
        let mut result = SheetResult::new();
        let mut statuses = Vec::with_capacity(sheets.len());

        for sheet in sheets {
            let decision = self.decide(sheet);
            let records = match &decision {
                SheetDecision::Eligible => {
                    tracing::info!(sheet = sheet.name(), "シートを変換");
                    let records = read_sheet_with_mappings(sheet, &mappings);
                    let count = records.len();
                    result.insert(sheet.name().to_string(), records);
                    Some(count)
                }
                SheetDecision::SkipMarker(marker) => {
                    tracing::info!(sheet = sheet.name(), %marker, "シートをスキップ (B1に値あり)");
                    None
                }
                SheetDecision::Settings | SheetDecision::Excluded => {
                    tracing::debug!(sheet = sheet.name(), %decision, "変換対象外");
                    None
                }
            };

            statuses.push(SheetStatus {
                name: sheet.name().to_string(),
                decision,
                records,
            });
        }

        TransformOutcome {
            mappings,
            sheets: result,
            statuses,
        }
    }
}
