use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheet2json")]
#[command(about = "設定シートのマッピングでExcelワークブックをシート別JSONに変換", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 設定ファイル（省略時: ~/.config/sheet2json/config.json）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ワークブックを変換してシートごとのJSONを出力
    Convert {
        /// 入力ワークブック (xlsx/xlsm/xlsb/xls/ods)
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ディレクトリ（デフォルト: 設定値）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// マッピング定義シート名
        #[arg(short, long)]
        settings_sheet: Option<String>,

        /// 変換しないシート名（複数指定可）
        #[arg(short, long)]
        exclude: Vec<String>,

        /// JSONを整形して出力
        #[arg(long)]
        pretty: bool,
    },

    /// 設定シートのマッピングを表示
    Mappings {
        /// 入力ワークブック
        #[arg(required = true)]
        input: PathBuf,

        /// マッピング定義シート名
        #[arg(short, long)]
        settings_sheet: Option<String>,
    },

    /// 各シートの変換可否を一覧表示（出力なし）
    Sheets {
        /// 入力ワークブック
        #[arg(required = true)]
        input: PathBuf,

        /// マッピング定義シート名
        #[arg(short, long)]
        settings_sheet: Option<String>,

        /// 変換しないシート名（複数指定可）
        #[arg(short, long)]
        exclude: Vec<String>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// マッピング定義シート名を設定
        #[arg(long)]
        set_settings_sheet: Option<String>,

        /// 除外シートを追加
        #[arg(long)]
        add_excluded: Vec<String>,

        /// 除外シートを削除
        #[arg(long)]
        remove_excluded: Vec<String>,

        /// 出力ディレクトリを設定
        #[arg(long)]
        set_output_dir: Option<PathBuf>,
    },
}
