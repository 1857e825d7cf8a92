use std::path::Path;

use anyhow::Context;
use comanda_core::{
    AppError, Board, BoardSeed, CommandOutcome, CommandResponse, ErrorCode, SharedBoard, UiCommand,
    ViewPatch, ViewSync, load_seed, setup_environment,
};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

/// One stdout line per command
#[derive(Serialize)]
struct Reply {
    #[serde(flatten)]
    outcome: CommandOutcome,
    patches: Vec<ViewPatch>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment();

    // 2. 加载种子数据
    let seed = match std::env::args().nth(1) {
        Some(path) => load_seed(Path::new(&path)).with_context(|| format!("loading {path}"))?,
        None => BoardSeed::with_free_tables(10),
    };
    let board = Board::from_seed(&config, seed).map_err(AppError::from)?;
    let live = SharedBoard::new(board);

    tracing::info!("🍽  comanda ready, reading commands from stdin");

    // 3. 初始渲染
    let mut view = ViewSync::new();
    let initial = live.with_board(|board| view.sync(board)).await;
    print_line(&CommandResponse::success(initial))?;

    // 4. 命令循环
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cmd: UiCommand = match serde_json::from_str(line) {
            Ok(cmd) => cmd,
            Err(e) => {
                let err =
                    AppError::with_message(ErrorCode::InvalidFormat, format!("bad command: {e}"));
                print_line(&CommandResponse::<()>::from(err))?;
                continue;
            }
        };

        match live.dispatch(&cmd).await {
            Ok(outcome) => {
                let patches = live.with_board(|board| view.sync(board)).await;
                print_line(&CommandResponse::success(Reply { outcome, patches }))?;
            }
            Err(err) => print_line(&CommandResponse::<()>::from(err))?,
        }
    }

    tracing::info!("stdin closed, shutting down");
    Ok(())
}

fn print_line<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
