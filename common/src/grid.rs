//! シートアクセスの抽象化
//!
//! ワークブック読み込みライブラリに依存せずに変換ロジックを書くためのトレイト。
//! 行・列インデックスはすべて0始まりの絶対位置。

/// 1枚のシートへの読み取りアクセス
pub trait Grid {
    /// シート名
    fn name(&self) -> &str;

    /// 最終行のインデックス（空シートは `None`）
    fn last_row(&self) -> Option<usize>;

    /// 指定行で値の入っている最終列のインデックス
    fn last_column(&self, row: usize) -> Option<usize>;

    /// セルの文字列表現。存在しないセルは空文字として扱う
    fn cell_text(&self, row: usize, col: usize) -> String;

    /// トリム済みのセル値
    fn trimmed(&self, row: usize, col: usize) -> String {
        self.cell_text(row, col).trim().to_string()
    }

    /// 見出し行を読む
    ///
    /// 列0は常に除外し、列1から行の最終列までを位置を保ったまま返す。
    /// 戻り値のインデックス `i` は列 `i + 1` に対応する。
    fn header_row(&self, row: usize) -> Vec<String> {
        match self.last_column(row) {
            Some(last) if last >= 1 => (1..=last).map(|col| self.trimmed(row, col)).collect(),
            _ => Vec::new(),
        }
    }
}

/// メモリ上のシート（テストや他形式からの取り込み用）
#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    name: String,
    rows: Vec<Vec<String>>,
}

impl MemorySheet {
    pub fn new<N, S>(name: N, rows: Vec<Vec<S>>) -> Self
    where
        N: Into<String>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

impl Grid for MemorySheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn last_row(&self) -> Option<usize> {
        self.rows.len().checked_sub(1)
    }

    fn last_column(&self, row: usize) -> Option<usize> {
        self.rows
            .get(row)
            .and_then(|cells| cells.iter().rposition(|cell| !cell.is_empty()))
    }

    fn cell_text(&self, row: usize, col: usize) -> String {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .cloned()
            .unwrap_or_default()
    }
}
