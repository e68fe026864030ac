mod cli;
mod render;

use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use feed_core::{FeedSettings, VoteEventSink};
use feed_engine::{ClientSettings, FeedEngine, LemmyClient};
use feed_logging::{feed_info, LevelFilter, LogDestination};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let destination = match args.log_file.clone() {
        Some(path) => LogDestination::Both(path),
        None => LogDestination::Terminal,
    };
    feed_logging::initialize(destination, level);

    let client = LemmyClient::new(ClientSettings {
        base_url: args.instance.clone(),
        auth_token: args.token.clone(),
        ..ClientSettings::default()
    })
    .with_context(|| format!("cannot use instance {}", args.instance))?;

    let settings = FeedSettings {
        page_size: args.page_size,
        ..FeedSettings::default()
    };
    let mut engine = FeedEngine::new(
        Arc::new(client),
        args.filter(),
        settings,
        VoteEventSink::new(),
    );

    engine.refresh();
    engine.run_until_idle().await;
    for _ in 1..args.pages {
        let snapshot = engine.snapshot();
        if snapshot.error || snapshot.empty_page_streak >= args.max_empty_pages {
            break;
        }
        engine.load_more();
        engine.run_until_idle().await;
    }

    let snapshot = engine.snapshot();
    feed_info!("loaded {} posts for {}", snapshot.len(), snapshot.filter);
    for line in render::render(&snapshot) {
        println!("{line}");
    }

    if snapshot.items.is_none() {
        bail!(
            "{}",
            snapshot
                .error_message
                .unwrap_or_else(|| "no posts loaded".to_string())
        );
    }
    Ok(())
}
