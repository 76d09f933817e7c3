//! ASN Memo: terminal flash cards for network AS numbers.
//!
//! Controls:
//! - Space: reveal the answer
//! - 1-4: rate recall (Again / Hard / Good / Easy)
//! - Esc: go back
//! - q: quit

mod app;
mod catalog;
mod progress;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use app::App;
use progress::ProgressStore;

/// Flash-card trainer for memorizing AS numbers of major Internet networks.
#[derive(Debug, Parser)]
#[command(name = "asn-memo", version, about)]
struct Cli {
    /// Where learning progress is stored (default: ~/.asn-memo/progress.json)
    #[arg(long, value_name = "PATH")]
    progress_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let path = cli
        .progress_file
        .unwrap_or_else(ProgressStore::default_path);
    log::debug!("progress file: {}", path.display());

    let app = App::new(ProgressStore::new(path));
    tui::run(app)
}
