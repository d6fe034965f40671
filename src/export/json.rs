//! JSONファイル出力
//!
//! シートごとに `<シート名>.json` を書き出す。1ファイルの失敗で全体は止めない。

use crate::error::{Sheet2JsonError, Result};
use sheet2json_common::{records_to_json, SheetRecord, SheetResult};
use std::path::{Path, PathBuf};

/// 書き込みに失敗したシート
#[derive(Debug)]
pub struct FailedSheet {
    pub sheet: String,
    pub path: PathBuf,
    pub error: Sheet2JsonError,
}

/// 出力結果
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<FailedSheet>,
}

impl WriteReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// シート名から出力パスを作る（シート名はそのまま使う）
pub fn output_path_for_sheet(output_dir: &Path, sheet_name: &str) -> PathBuf {
    output_dir.join(format!("{}.json", sheet_name))
}

/// 全シートのJSONを書き出す
///
/// 出力ディレクトリが作れない場合のみエラーを返す。
pub fn write_json_files(
    sheets: &SheetResult,
    output_dir: &Path,
    pretty: bool,
) -> Result<WriteReport> {
    std::fs::create_dir_all(output_dir)?;

    let mut report = WriteReport::default();

    for (sheet_name, records) in sheets {
        let path = output_path_for_sheet(output_dir, sheet_name);
        match write_sheet(&path, records, pretty) {
            Ok(()) => {
                tracing::info!(sheet = %sheet_name, path = %path.display(), records = records.len(), "JSONを保存");
                report.written.push(path);
            }
            Err(error) => {
                tracing::warn!(sheet = %sheet_name, path = %path.display(), %error, "JSONの保存に失敗");
                report.failed.push(FailedSheet {
                    sheet: sheet_name.clone(),
                    path,
                    error,
                });
            }
        }
    }

    Ok(report)
}

fn write_sheet(path: &Path, records: &[SheetRecord], pretty: bool) -> Result<()> {
    let json = records_to_json(records, pretty)?;
    std::fs::write(path, json)?;
    Ok(())
}
