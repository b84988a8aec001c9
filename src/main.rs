// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::sync::Arc;

use anyhow::{Context, anyhow};
use clap::Parser;
use log::{debug, info};
use serde_json::{Map, Value, json};
use tokio::task::JoinSet;

use jobstatus::cli::{Cli, Commands};
use jobstatus::config::{ClientConfig, load_configuration};
use jobstatus::http::{JobId, JobStatusClient};
use jobstatus::log::init_logging;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    init_logging(&cli.log_config)?;

    let cfg = load_configuration(&cli.config).context("Could not load configuration")?;
    let mut client_config = ClientConfig::from_config(&cfg)?;
    client_config.apply_args(&cli.client);
    info!(
        base_url = &*client_config.base_url,
        timeout_ms = client_config.timeout_ms;
        "Using batch-processing API"
    );

    let client = JobStatusClient::new(client_config)?;

    match cli.command {
        Commands::Start => print_json(&client.start_processing().await?.into_inner()),
        Commands::Status => print_json(&client.get_system_status().await?.into_inner()),
        Commands::Progress { job_ids } if job_ids.is_empty() => {
            print_json(&client.get_all_progress().await?.into_inner())
        },
        Commands::Progress { job_ids } => poll_jobs(Arc::new(client), job_ids).await,
    }
}

/// Queries every job concurrently and prints one JSON object keyed by job id.
///
/// Failed jobs are reported inline as `{"error": "<message>"}`; the command
/// fails after printing if any request failed.
async fn poll_jobs(client: Arc<JobStatusClient>, job_ids: Vec<String>) -> anyhow::Result<()> {
    let job_ids = job_ids
        .into_iter()
        .map(JobId::new)
        .collect::<Result<Vec<_>, _>>()?;

    let mut tasks = JoinSet::new();
    for (index, job_id) in job_ids.iter().cloned().enumerate() {
        let client = Arc::clone(&client);
        tasks.spawn(async move { (index, client.get_job_progress(&job_id).await) });
    }

    let mut results = Vec::with_capacity(job_ids.len());
    while let Some(joined) = tasks.join_next().await {
        results.push(joined.context("Progress request task failed")?);
    }
    results.sort_by_key(|(index, _)| *index);

    let mut failures = 0;
    let mut report = Map::new();
    for (index, result) in results {
        let value = match result {
            Ok(progress) => progress.into_inner(),
            Err(e) => {
                failures += 1;
                json!({ "error": e.message() })
            },
        };
        report.insert(job_ids[index].to_string(), value);
    }
    debug!(jobs = job_ids.len(), failures = failures; "Polled job progress");

    print_json(&Value::Object(report))?;

    if failures > 0 {
        return Err(anyhow!("{} of {} progress requests failed", failures, job_ids.len()));
    }
    Ok(())
}

fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
