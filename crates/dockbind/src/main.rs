mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dockbind")]
#[command(about = "Dockerのバインドマウント指定を解析・正規化する", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// バインド指定をパースして正規形と各フィールドを表示
    Parse {
        /// バインド指定 (例: /host:/container:ro,Z)
        #[arg(required = true)]
        specs: Vec<String>,
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },
    /// 設定ファイルのバインド一覧を検証
    Check {
        /// 設定ファイルのパス（省略時は dockbind.yaml を探索）
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// バージョン情報を表示
    Version,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { specs, json } => commands::parse::handle(&specs, json),
        Commands::Check { file } => commands::check::handle(file),
        Commands::Version => {
            println!("dockbind {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
