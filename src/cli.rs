use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chili-ai")]
#[command(about = "Klasifikasi tingkat kekeringan cabai dari citra", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 予測APIのURL（環境変数・設定ファイルより優先）
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像をAPIに送って鮮度を判定
    Predict {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,

        /// 履歴に保存しない
        #[arg(long)]
        no_history: bool,
    },

    /// 直近の判定履歴を表示/削除
    History {
        /// 履歴を削除
        #[arg(long)]
        clear: bool,

        /// 確認なしで削除
        #[arg(short, long)]
        yes: bool,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// ラベルに対応する保存方法のヒントを表示
    Tips {
        /// クラス名 (segar/sedang/kering)
        #[arg(required = true)]
        label: String,
    },

    /// 設定を表示/編集
    Config {
        /// APIのURLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
