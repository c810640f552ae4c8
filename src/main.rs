// ReelForge Main Entry Point
// Copyright (c) 2026 Xing_The_Creator | ReelForge

use reelforge_core::catalog::option_catalog;
use reelforge_core::config::ServerConfig;
use reelforge_core::content_engine::choice::{ChoiceSource, SeededChoice, ThreadRngChoice};
use reelforge_core::content_engine::{ContentEngine, GenerationRequest, VideoDuration, VideoTone};
use reelforge_core::logging;
use reelforge_core::queue::VideoItem;
use reelforge_core::server;
use reelforge_core::state::AppState;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "reelforge")]
#[command(about = "ReelForge video content generator", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Interface to bind (overrides REELFORGE_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides REELFORGE_PORT / PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate one video package and print it
    Generate {
        /// Channel niche (e.g. "History Facts")
        #[arg(short, long)]
        niche: String,

        /// Video topic
        #[arg(short, long)]
        topic: String,

        /// Target length: 3-5, 8-10 or 12-15
        #[arg(short, long, default_value = "8-10")]
        duration: VideoDuration,

        /// Narration tone
        #[arg(long, default_value = "informative")]
        tone: VideoTone,

        /// Seed for reproducible hook/title selection
        #[arg(long)]
        seed: Option<u64>,

        /// Print the item as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available niches, durations and tones
    Options,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Serve { host, port } => {
            let config = ServerConfig::from_env()?.with_overrides(host, port);
            info!("🌐 Starting ReelForge API on {}:{}...", config.host, config.port);
            server::start_server(&config, AppState::default()).await?;
        }
        Commands::Generate {
            niche,
            topic,
            duration,
            tone,
            seed,
            json,
        } => {
            let chooser: Arc<dyn ChoiceSource> = match seed {
                Some(seed) => Arc::new(SeededChoice::new(seed)),
                None => Arc::new(ThreadRngChoice),
            };
            let engine = ContentEngine::new(chooser);
            let request = GenerationRequest::new(niche, topic)
                .with_duration(duration)
                .with_tone(tone);
            let content = engine.generate(&request);
            let item = VideoItem::new(request, content);

            if json {
                println!("{}", serde_json::to_string_pretty(&item)?);
            } else {
                print_item(&item);
            }
        }
        Commands::Options => {
            let catalog = option_catalog();
            println!("Niches:");
            for niche in catalog.niches {
                println!("  {}", niche);
            }
            println!("\nDurations:");
            for d in catalog.durations {
                println!("  {:<6} {}", d.value, d.label);
            }
            println!("\nTones:");
            for t in catalog.tones {
                println!("  {:<13} {}", t.value, t.label);
            }
        }
    }

    Ok(())
}

fn print_item(item: &VideoItem) {
    println!("=== {} ===", item.title);
    println!(
        "id: {}  status: {}  created: {}",
        item.id,
        item.status.as_str(),
        item.created_at.to_rfc3339()
    );
    println!(
        "niche: {}  duration: {}  tone: {}\n",
        item.niche,
        item.duration.label(),
        item.tone.label()
    );
    println!("{}\n", item.script);
    println!("--- Description ---\n{}\n", item.description);
    println!("--- Tags ---\n{}\n", item.tags.join(", "));
    println!("--- Thumbnail Ideas ---");
    for (i, idea) in item.thumbnail_ideas.iter().enumerate() {
        println!("{}. {}", i + 1, idea);
    }
}
