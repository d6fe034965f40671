//! レコード列のJSON化

use crate::error::Result;
use crate::types::SheetRecord;

/// レコード列をJSON配列文字列にする
///
/// キー順はレコードの挿入順、値はすべて文字列。
pub fn records_to_json(records: &[SheetRecord], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}
