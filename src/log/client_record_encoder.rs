// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! Console/file encoder for the client's structured log records.
//!
//! The pattern part of a line is rendered by log4rs' [`PatternEncoder`]. The
//! record's key/values follow it in a fixed order (`operation`, `method`,
//! `path`, `job_id`, `status`, `error`, `body`), then any other keys in the
//! order they were logged. Long values such as response bodies are cut to
//! `max_value_len` characters.

use log::{
    Record,
    kv::{self, Key, Value, VisitSource},
};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::encode::{Color, Encode, Style, Write};
use serde::Deserialize;

const DEFAULT_PATTERN: &str = "{d} {l} {t} {m}";
const DEFAULT_MAX_VALUE_LEN: usize = 512;

const FIELD_ORDER: [&str; 7] = ["operation", "method", "path", "job_id", "status", "error", "body"];

#[derive(Debug, Deserialize)]
pub struct ClientRecordEncoderConfig {
    pub pattern: Option<String>,
    pub max_value_len: Option<usize>,
}

#[derive(Debug)]
pub struct ClientRecordEncoder {
    pattern: PatternEncoder,
    max_value_len: usize,
}

impl ClientRecordEncoder {
    pub fn new(pattern: &str, max_value_len: usize) -> Self {
        Self {
            pattern: PatternEncoder::new(pattern),
            max_value_len,
        }
    }

    /// Collects the record's fields in display order, already formatted.
    fn fields(&self, record: &Record) -> Vec<(String, String)> {
        let mut collector = FieldCollector::default();
        if let Err(e) = record.key_values().visit(&mut collector) {
            collector.fields.push(("kv_error".to_string(), e.to_string()));
        }

        let mut fields = collector.fields;
        fields.sort_by_key(|(key, _)| field_rank(key));
        fields
            .into_iter()
            .map(|(key, value)| {
                let value = format_value(&value, self.max_value_len);
                (key, value)
            })
            .collect()
    }
}

impl Encode for ClientRecordEncoder {
    fn encode(&self, w: &mut dyn Write, record: &Record) -> anyhow::Result<()> {
        self.pattern.encode(w, record)?;

        for (key, value) in self.fields(record) {
            w.set_style(Style::new().text(Color::Cyan))?;
            write!(w, " {}=", key)?;
            w.set_style(&Style::default())?;
            w.write_all(value.as_bytes())?;
        }

        w.write_all(b"\n")?;
        Ok(())
    }
}

/// Known fields first, in [`FIELD_ORDER`]; unknown ones keep their order
/// because the sort is stable.
fn field_rank(key: &str) -> usize {
    FIELD_ORDER
        .iter()
        .position(|known| *known == key)
        .unwrap_or(FIELD_ORDER.len())
}

/// Truncates to `max_len` characters and quotes values that would otherwise
/// be ambiguous on one line.
fn format_value(value: &str, max_len: usize) -> String {
    let char_count = value.chars().count();
    let value = if char_count > max_len {
        let kept: String = value.chars().take(max_len).collect();
        format!("{}...({} chars)", kept, char_count)
    } else {
        value.to_string()
    };

    if value.is_empty() || value.chars().any(|c| c.is_whitespace() || c == '"') {
        format!("{:?}", value)
    } else {
        value
    }
}

#[derive(Default)]
struct FieldCollector {
    fields: Vec<(String, String)>,
}

impl<'kvs> VisitSource<'kvs> for FieldCollector {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> Result<(), kv::Error> {
        self.fields.push((key.as_str().to_string(), value.to_string()));
        Ok(())
    }
}

pub struct ClientRecordEncoderDeserializer;

impl log4rs::config::Deserialize for ClientRecordEncoderDeserializer {
    type Trait = dyn Encode;
    type Config = ClientRecordEncoderConfig;

    fn deserialize(
        &self,
        config: ClientRecordEncoderConfig,
        _: &log4rs::config::Deserializers,
    ) -> anyhow::Result<Box<dyn Encode>> {
        let pattern = config.pattern.as_deref().unwrap_or(DEFAULT_PATTERN);
        let max_value_len = config.max_value_len.unwrap_or(DEFAULT_MAX_VALUE_LEN);
        Ok(Box::new(ClientRecordEncoder::new(pattern, max_value_len)))
    }
}
