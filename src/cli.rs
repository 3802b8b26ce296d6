use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "series-catalog")]
#[command(about = "TVシリーズカタログ閲覧ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// カタログAPIのURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub catalog_api: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 番号ページ順にシリーズを表示
    Browse {
        /// 並び替えキー（省略時はデフォルト）
        #[arg(short, long)]
        sort: Option<String>,

        /// 読み込むページ数
        #[arg(short, long, default_value = "1")]
        pages: u32,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// JSON出力先ファイル
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// タイトルで検索（全ページを1回で取得）
    Search {
        /// 検索語
        #[arg(required = true)]
        term: String,

        /// 並び替えキー
        #[arg(short, long)]
        sort: Option<String>,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// JSON出力先ファイル
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 対話的に並び替えを選び、ページを追加読み込み
    Interactive,

    /// 並び替えオプションを一覧表示
    Sorts,

    /// 設定を表示/編集
    Config {
        /// カタログAPIのURLを設定
        #[arg(long)]
        set_catalog_api: Option<String>,

        /// デフォルトの並び替えキーを設定
        #[arg(long)]
        set_default_sort: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
