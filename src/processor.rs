use crate::error::ParseError;
use crate::parser;
use crate::serialiser;
use crate::store::Store;

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};

const SRT: &str = ".srt";
const TXT: &str = ".txt";

pub const DEFAULT_INPUT_DIR: &str = "./s01";
pub const DEFAULT_PAUSE_THRESHOLD: u32 = 10;

pub struct Config {
    pub input_dir: PathBuf,
    pub pause_threshold_seconds: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            pause_threshold_seconds: DEFAULT_PAUSE_THRESHOLD,
        }
    }
}

/// The transcript of one subtitle file.
#[derive(Debug)]
pub struct Conversion {
    pub lines: Vec<String>,
    pub entries: usize,
    pub problems: Vec<ParseError>,
}

#[derive(Debug)]
pub struct Report {
    pub input: String,
    pub output: String,
    pub entries: usize,
    pub problems: usize,
}

pub fn convert<S: AsRef<str>>(lines: &[S], pause_threshold: u32) -> Conversion {
    let parsed = parser::parse_lines(lines);
    Conversion {
        lines: serialiser::render(&parsed.entries, pause_threshold),
        entries: parsed.entries.len(),
        problems: parsed.problems,
    }
}

/// Any name containing `.srt`, anywhere, counts as a subtitle file.
pub fn is_subtitle_name(name: &str) -> bool {
    name.contains(SRT)
}

pub fn output_name(name: &str) -> String {
    name.replace(SRT, TXT)
}

/// Converts every subtitle file in the store, one at a time. The first
/// filesystem error ends the run; files written before it are left in place.
pub fn convert_all<S: Store>(store: &S, config: &Config) -> Result<Vec<Report>> {
    let names = store.list().context("Failed to find subtitle files")?;

    let mut reports = Vec::new();
    for input in names.into_iter().filter(|n| is_subtitle_name(n)) {
        let output = output_name(&input);
        info!("{} --> {}", input, output);

        let lines = store
            .read_lines(&input)
            .with_context(|| format!("Failed to convert '{}'", input))?;
        let conversion = convert(&lines, config.pause_threshold_seconds);
        for problem in &conversion.problems {
            warn!("{}: {}", input, problem);
        }
        store
            .write_lines(&output, &conversion.lines)
            .with_context(|| format!("Failed to convert '{}'", input))?;

        reports.push(Report {
            input,
            output,
            entries: conversion.entries,
            problems: conversion.problems.len(),
        });
    }
    Ok(reports)
}
