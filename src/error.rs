use thiserror::Error;

#[derive(Error, Debug)]
pub enum Sheet2JsonError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("ワークブックを開けません: {0}")]
    WorkbookOpen(String),

    #[error("シート「{sheet}」の読み込みエラー: {message}")]
    SheetRead { sheet: String, message: String },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] sheet2json_common::Error),
}

pub type Result<T> = std::result::Result<T, Sheet2JsonError>;
