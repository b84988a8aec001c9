// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

pub mod client_record_encoder;

use std::path::Path;

use anyhow::{Context, anyhow};
use log::{debug, info};
use log4rs::{
    Config,
    config::{Deserializers, RawConfig},
};

use crate::log::client_record_encoder::ClientRecordEncoderDeserializer;

const EMBEDDED_LOG_CONFIG: &str = include_str!("../../resources/default_log4rs.yml");

fn deserializers() -> Deserializers {
    let mut deserializers = Deserializers::default();
    deserializers.insert("client_record", ClientRecordEncoderDeserializer);
    deserializers
}

/// Initializes logging from `config_path` if it exists, otherwise from the
/// embedded defaults.
pub fn init_logging(config_path: &Path) -> anyhow::Result<()> {
    if config_path.exists() {
        log4rs::init_file(config_path, deserializers())
            .with_context(|| format!("Failed to load log configuration {}", config_path.display()))?;
        info!(
            path:% = config_path.display();
            "Logging initialized from external configuration"
        );
        return Ok(());
    }

    let config = embedded_config()?;
    log4rs::init_config(config).context("Failed to initialize logging from embedded config")?;

    debug!("Logging initialized from embedded defaults");
    Ok(())
}

fn embedded_config() -> anyhow::Result<Config> {
    let raw_config: RawConfig =
        serde_yaml::from_str(EMBEDDED_LOG_CONFIG).context("Embedded logging configuration is invalid YAML")?;

    let (appenders, errors) = raw_config.appenders_lossy(&deserializers());
    if !errors.is_empty() {
        return Err(anyhow!("Errors parsing embedded appenders: {:?}", errors));
    }

    Config::builder()
        .appenders(appenders)
        .loggers(raw_config.loggers())
        .build(raw_config.root())
        .context("Failed to build logging config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let raw: RawConfig = serde_yaml::from_str(EMBEDDED_LOG_CONFIG).unwrap();
        assert!(raw.loggers().iter().any(|l| l.name() == "jobstatus"));
    }
}
