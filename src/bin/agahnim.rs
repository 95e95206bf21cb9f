// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/duckdb-behavioral)

//! Command-line front-end for the blue-ball enumerator.
//!
//! ```text
//! agahnim --hits 6 --pattern 'Y???L' --p-hit 0.5 --max-random 16
//! agahnim --hits 6 --guaranteed 1 --random 3 --unbounded --json
//! ```
//!
//! Set `RUST_LOG=debug` to see enumeration totals.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use serde::Serialize;

use agahnim::config::{Configuration, RandomBudget};
use agahnim::enumerate::{enumerate, Group};
use agahnim::fraction::format_probability;
use agahnim::summary::{Coverage, Distribution, GroupBreakdown, Median, Summary};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Enumerate blue-ball outcomes of a hit-accumulation cycle",
    long_about = None
)]
struct Args {
    /// Hits needed to win
    #[arg(long, default_value_t = 6, allow_negative_numbers = true)]
    hits: i64,

    /// Repeating cycle: Y guaranteed hit, B guaranteed blue, ? random, L lightning
    #[arg(long, default_value = "Y???L", conflicts_with_all = ["guaranteed", "random"])]
    pattern: String,

    /// Guaranteed hits per cycle (with --random, instead of --pattern)
    #[arg(long, requires = "random")]
    guaranteed: Option<u32>,

    /// Random tokens per cycle (with --guaranteed, instead of --pattern)
    #[arg(long, requires = "guaranteed")]
    random: Option<u32>,

    /// Probability that a random token resolves as a hit
    #[arg(long, default_value_t = 0.5)]
    p_hit: f64,

    /// Maximum random flips along any one path
    #[arg(long, default_value_t = 16, conflicts_with = "unbounded")]
    max_random: u32,

    /// Do not cap random flips
    #[arg(long)]
    unbounded: bool,

    /// Print one JSON document instead of text
    #[arg(long)]
    json: bool,
}

impl Args {
    fn budget(&self) -> RandomBudget {
        RandomBudget::from((!self.unbounded).then_some(self.max_random))
    }

    fn configuration(&self) -> agahnim::error::Result<Configuration> {
        match (self.guaranteed, self.random) {
            (Some(guaranteed), Some(random)) => {
                Configuration::from_counts(self.hits, guaranteed, random, self.p_hit, self.budget())
            }
            _ => Configuration::from_pattern(self.hits, &self.pattern, self.p_hit, self.budget()),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    configuration: &'a Configuration,
    summary: &'a Summary,
    statistics: &'a Distribution,
    groups: Vec<GroupReport<'a>>,
}

#[derive(Serialize)]
struct GroupReport<'a> {
    #[serde(flatten)]
    group: &'a Group,
    breakdown: GroupBreakdown,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.configuration().context("invalid configuration")?;

    let groups = enumerate(&config);
    let summary = Summary::new(&config, &groups);
    let statistics = Distribution::from_groups(&groups);

    match Coverage::of(&config, &groups) {
        Coverage::Complete => {}
        Coverage::Truncated(found) => warn!(
            "random flip cap {:?} truncated the search; results cover {} of all outcomes",
            config.budget(),
            format_probability(found)
        ),
        Coverage::Unreachable => warn!(
            "cycle '{}' can never reach {} hits; no sequences",
            config.cycle(),
            config.hits_to_win()
        ),
    }

    let stdout = io::stdout();
    let written = write_report(
        &mut stdout.lock(),
        args.json,
        &config,
        &groups,
        &summary,
        &statistics,
    );
    ignore_closed_pipe(written).context("failed to write report")
}

/// A reader that stops early (`agahnim | head`) is not an error.
fn ignore_closed_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn write_report(
    out: &mut impl Write,
    json: bool,
    config: &Configuration,
    groups: &[Group],
    summary: &Summary,
    statistics: &Distribution,
) -> io::Result<()> {
    if json {
        let report = Report {
            configuration: config,
            summary,
            statistics,
            groups: groups
                .iter()
                .map(|group| GroupReport {
                    group,
                    breakdown: GroupBreakdown::for_group(group, config.p_hit()),
                })
                .collect(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)
    } else {
        write_text(out, config, groups, summary, statistics)
    }
}

fn write_text(
    out: &mut impl Write,
    config: &Configuration,
    groups: &[Group],
    summary: &Summary,
    statistics: &Distribution,
) -> io::Result<()> {
    let theoretical = summary
        .theoretical_max_secondary
        .map_or_else(|| "∞".to_string(), |n| n.to_string());
    writeln!(
        out,
        "Groups: {}, Max theoretical blue: {theoretical}, Max blue shown: {}, Total probability: {}",
        summary.groups,
        summary.max_secondary_shown,
        format_probability(summary.total_probability)
    )?;

    let median = match statistics.median {
        Some(Median::Single(k)) => k.to_string(),
        Some(Median::Split(low, high)) => format!("{low}, {high}"),
        None => "-".to_string(),
    };
    let modes = statistics
        .modes
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(
        out,
        "Average: {:.3}  Std dev: {:.3}  Median: {median}  Mode: {modes}",
        statistics.mean, statistics.std_dev
    )?;

    for group in groups {
        let breakdown = GroupBreakdown::for_group(group, config.p_hit());
        writeln!(out)?;
        writeln!(
            out,
            "Blue balls = {}    {}",
            group.secondary_count,
            format_probability(group.probability)
        )?;
        writeln!(
            out,
            "  Combinations: C({}, {}) = {}, each {}",
            breakdown.random_flips,
            breakdown.random_secondaries,
            breakdown.combinations,
            format_probability(breakdown.each)
        )?;
        for sequence in &group.sequences {
            writeln!(out, "  {sequence}")?;
        }
    }

    Ok(())
}
