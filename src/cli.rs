// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jobstatus")]
#[command(about = "Client for the batch-processing job status API", long_about = None)]
pub struct Cli {
    #[arg(
        short,
        long,
        global = true,
        help = "Path to the configuration file",
        default_value = "data/config.toml"
    )]
    pub config: PathBuf,
    #[arg(
        long,
        global = true,
        help = "Path to a log4rs configuration file",
        default_value = "log4rs.yml"
    )]
    pub log_config: PathBuf,
    #[command(flatten)]
    pub client: ClientArgs,
    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides for values otherwise read from the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct ClientArgs {
    #[arg(short = 'u', long, global = true, help = "The base URL of the batch-processing API")]
    pub base_url: Option<String>,
    #[arg(long, global = true, help = "Request timeout in milliseconds")]
    pub timeout_ms: Option<u64>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start a new batch-processing job
    Start,
    /// Show job progress. Without job ids, the progress of every job is shown;
    /// with ids, each job is queried concurrently
    Progress {
        #[arg(help = "Ids of the jobs to query")]
        job_ids: Vec<String>,
    },
    /// Show the overall status of the batch-processing service
    Status,
}
