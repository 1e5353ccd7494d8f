// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use exosearch::catalog::{documents_from_listing, ListingEntry};
use exosearch::worker::{IndexWorker, Request};
use exosearch::{Document, EngineConfig, ExerciseIndex, SearchOptions};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("EXOSEARCH_LOG")
                .unwrap_or_else(|_| EnvFilter::new("exosearch=info")),
        )
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => Ok(EngineConfig::from_json_file(path)?),
        None => Ok(EngineConfig::default()),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn load_index(config: EngineConfig, input: &Path) -> Result<ExerciseIndex> {
    let documents: Vec<Document> = read_json(input)?;
    let mut index = ExerciseIndex::with_config(config);
    let stats = index.build_index(documents);
    info!(
        indexed = stats.indexed_count,
        skipped = stats.skipped_count,
        duration_ms = stats.duration_ms,
        "loaded {}",
        input.display()
    );
    Ok(index)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn serve(mut worker: IndexWorker) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = worker.handle_json(&line);
        serde_json::to_writer(&mut stdout, &response)?;
        writeln!(stdout)?;
        stdout.flush()?;
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let json = cli.json;

    match cli.command {
        Commands::Search {
            input,
            query,
            limit,
            kind,
        } => {
            let index = load_index(config, &input.input)?;
            let outcome = index.search_with(&query, &SearchOptions { limit, kind });
            if json {
                print_json(&outcome.documents())?;
            } else {
                display::print_hits(&query, &outcome);
            }
        }

        Commands::Stats { input } => {
            let index = load_index(config, &input.input)?;
            let stats = index.statistics();
            if json {
                print_json(&stats)?;
            } else {
                display::print_statistics(&stats);
            }
        }

        Commands::Tags {
            input,
            tags,
            all,
            limit,
        } => {
            let index = load_index(config, &input.input)?;
            let limit = limit.unwrap_or(index.config().max_results);
            let page = index.search_by_tags(tags.as_slice(), all, limit);
            if json {
                print_json(&page.documents)?;
            } else {
                let mode = if all { "ALL" } else { "ANY" };
                display::print_page(&format!("TAGS {} [{}]", mode, tags.join(", ")), &page);
            }
        }

        Commands::Category {
            input,
            category,
            limit,
        } => {
            let index = load_index(config, &input.input)?;
            let limit = limit.unwrap_or(index.config().max_results);
            let page = index.search_by_category(&category, limit);
            if json {
                print_json(&page.documents)?;
            } else {
                display::print_page(&format!("CATEGORY {}", category), &page);
            }
        }

        Commands::Difficulty {
            input,
            difficulty,
            limit,
        } => {
            let index = load_index(config, &input.input)?;
            let limit = limit.unwrap_or(index.config().max_results);
            let page = index.search_by_difficulty(&difficulty, limit);
            if json {
                print_json(&page.documents)?;
            } else {
                display::print_page(&format!("DIFFICULTY {}", difficulty), &page);
            }
        }

        Commands::Catalog { listing } => {
            let entries: Vec<ListingEntry> = read_json(&listing)?;
            let documents = documents_from_listing(&entries);
            info!(files = entries.len(), records = documents.len(), "catalog built");
            print_json(&documents)?;
        }

        Commands::Serve { input } => {
            let mut worker = IndexWorker::new(config);
            if let Some(input) = input {
                let documents: Vec<Document> = read_json(&input)?;
                worker.handle(Request::IndexExercises(documents))?;
            }
            info!("serving worker protocol on stdin");
            serve(worker)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    run(Cli::parse())
}
