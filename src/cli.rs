use clap::{Parser, Subcommand};
use pokedex_common::ViewMode;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "PokeAPI図鑑ビューア・捕獲タグ管理ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 一覧を表示
    List {
        /// 1ページの件数（省略時は設定値）
        #[arg(short, long)]
        limit: Option<u32>,

        /// 開始オフセット
        #[arg(short, long, default_value = "0")]
        offset: u32,

        /// 読み込むページ数
        #[arg(short, long, default_value = "1", conflicts_with = "all")]
        pages: u32,

        /// 最終ページまで読み込む
        #[arg(long)]
        all: bool,

        /// 名前で検索（部分一致・大文字小文字無視）
        #[arg(short, long)]
        search: Option<String>,

        /// 捕獲済みのみ表示
        #[arg(short, long)]
        captured: bool,

        /// 表示モード (grid/list)
        #[arg(long, default_value = "grid")]
        view: ViewMode,
    },

    /// 1件の詳細を表示
    Show {
        /// 図鑑番号または名前
        #[arg(required = true)]
        pokemon: String,
    },

    /// 捕獲済みタグを付ける
    Capture {
        /// 図鑑番号または名前
        #[arg(required = true)]
        pokemon: String,

        /// ニックネーム（省略時は対話入力）
        #[arg(short, long)]
        nickname: Option<String>,

        /// 捕獲日 MM/DD/YYYY（省略時は対話入力）
        #[arg(short, long, conflicts_with = "today")]
        date: Option<String>,

        /// 今日の日付を使う
        #[arg(long)]
        today: bool,
    },

    /// 保存済みタグを表示
    Tags {
        /// 名前で絞り込み（完全一致）
        #[arg(short, long)]
        character: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// APIベースURLを設定
        #[arg(long)]
        set_api_base: Option<String>,

        /// 1ページの件数を設定
        #[arg(long)]
        set_page_limit: Option<u32>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },

    /// タグ保存ファイルの情報
    Storage,
}
