// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the exosearch command-line interface.
//!
//! Every query command loads a JSON array of exercise records with `--input`,
//! builds an index in memory and prints one report. `catalog` turns a
//! repository listing into such an array, and `serve` speaks the worker
//! protocol over stdin/stdout, one JSON message per line.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "exosearch",
    about = "Search and browse an exercise catalog from the command line",
    version
)]
pub struct Cli {
    /// Engine config (JSON); defaults are used for missing keys
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the records come from.
#[derive(Args)]
pub struct Input {
    /// JSON array of exercise records
    #[arg(short, long)]
    pub input: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ranked substring search over titles, descriptions, tags and content
    Search {
        #[command(flatten)]
        input: Input,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only keep records of this file kind (pdf, txt, image)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Catalog statistics: totals and per-bucket counts
    Stats {
        #[command(flatten)]
        input: Input,
    },

    /// Records carrying any (or, with --all, every) of the given tags
    Tags {
        #[command(flatten)]
        input: Input,

        #[arg(required = true)]
        tags: Vec<String>,

        /// Require every tag instead of any
        #[arg(long)]
        all: bool,

        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Records in one category (exact match)
    Category {
        #[command(flatten)]
        input: Input,

        category: String,

        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Records at one difficulty level (exact match)
    Difficulty {
        #[command(flatten)]
        input: Input,

        difficulty: String,

        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Convert a repository contents listing into exercise records
    Catalog {
        /// JSON array of listing entries (name, path, type, size, download_url)
        #[arg(long)]
        listing: PathBuf,
    },

    /// Answer worker-protocol messages read from stdin, one per line
    Serve {
        /// Records to index before the first message
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}
