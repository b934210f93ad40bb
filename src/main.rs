use anyhow::Result;
use std::env;
use tracing::{info, warn};

use monarch_stats::{
    load_monarchs, logging, render_outcome, usage, Config, DataQualityEngine, Mode, Monarch,
    VERSION,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init();

    let arg = env::args().nth(1);
    let mode = match Mode::from_arg(arg.as_deref()) {
        Ok(mode) => mode,
        Err(unknown) => {
            eprintln!("Unknown command: {}\n", unknown);
            eprintln!("{}", usage());
            std::process::exit(2);
        }
    };

    if mode == Mode::Help {
        println!("monarch-stats {}\n", VERSION);
        println!("{}", usage());
        return Ok(());
    }

    let config = Config::from_env();
    info!(?mode, source = ?config.source, "starting");

    // 1. Load + validate
    let outcome = load_monarchs(&config).await?;

    // 2. Bad reign strings are counted as 0 years; say so on stderr
    match outcome.monarchs() {
        Some(monarchs) => {
            info!(count = monarchs.len(), "loaded monarchs");
            if mode != Mode::Quality {
                warn_on_critical(monarchs);
            }
        }
        None => info!("nothing to aggregate"),
    }

    // 3. Report
    print!("{}", render_outcome(&outcome, mode)?);

    Ok(())
}

fn warn_on_critical(monarchs: &[Monarch]) {
    let engine = DataQualityEngine::new();
    let summary = engine.batch_summary(&engine.validate_batch(monarchs));

    if summary.critical_issues_count > 0 {
        warn!(
            critical = summary.critical_issues_count,
            total = summary.total_monarchs,
            "some reign lengths could not be computed reliably; run `monarch-stats quality` for details"
        );
    }
}
