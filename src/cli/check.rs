use std::{
    collections::BTreeMap,
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use eligibility::{Config, EligibilityResult, Possessions, eligibility::detailed_eligibility};
use serde_json::{Value, json};
use tracing::instrument;

use super::terminal::{Tone, is_narrow};

#[derive(Debug, Parser, Default)]
#[command(about = "Evaluate a candidate against every company")]
pub struct Check {
    /// Items the candidate has (e.g. bike "driving license")
    possessions: Vec<String>,

    /// YAML file with a `possessions` list, merged with any given inline
    #[arg(long, value_name = "FILE")]
    candidate: Option<PathBuf>,

    /// Company catalog (YAML). Defaults to the configured catalog, or the
    /// built-in sample
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Show the requirements of eligible and ineligible companies
    #[arg(long)]
    detailed: bool,

    /// Print only the names of eligible companies
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

type Results = BTreeMap<String, EligibilityResult>;

impl Check {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let mut possessions = match &self.candidate {
            Some(path) => eligibility::storage::load_possessions(path).map_err(|e| {
                anyhow::Error::new(e)
                    .context(format!("Failed to load candidate {}", path.display()))
            })?,
            None => Possessions::new(),
        };
        possessions.extend(&self.possessions);

        let companies = super::load_companies(self.catalog.as_deref(), config)?;
        let results = detailed_eligibility(&companies, &possessions);

        let mut out = io::stdout().lock();
        match self.output {
            OutputFormat::Json => {
                writeln!(
                    out,
                    "{}",
                    serde_json::to_string_pretty(&report_json(&possessions, &results))?
                )?;
            }
            OutputFormat::Table if self.quiet => write_quiet(&mut out, &results)?,
            OutputFormat::Table => {
                write_table(&mut out, &possessions, &results, is_narrow())?;
                if self.detailed || config.detailed {
                    write_detailed(&mut out, &results)?;
                }
            }
        }

        Ok(())
    }
}

fn report_json(possessions: &Possessions, results: &Results) -> Value {
    let summary = Summary::new(results);
    json!({
        "possessions": possessions.iter().collect::<Vec<_>>(),
        "companies": results,
        "summary": {
            "eligible": summary.eligible,
            "ineligible": summary.ineligible,
            "success_rate": summary.success_rate(),
        }
    })
}

fn write_quiet(out: &mut impl Write, results: &Results) -> io::Result<()> {
    for (name, _) in results.iter().filter(|(_, result)| result.eligible) {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

fn write_table(
    out: &mut impl Write,
    possessions: &Possessions,
    results: &Results,
    narrow: bool,
) -> io::Result<()> {
    writeln!(out, "Candidate possessions: {possessions}")?;
    writeln!(out, "Total companies: {}", results.len())?;
    writeln!(out)?;

    if results.is_empty() {
        return writeln!(out, "No companies in catalog.");
    }

    writeln!(out, "{}", Tone::Heading.paint("Eligibility"))?;
    writeln!(out, "{}", Tone::Muted.paint("───────────"))?;

    let width = results.keys().map(|name| name.chars().count()).max().unwrap_or(0);
    for (name, result) in results {
        let status = if result.eligible {
            Tone::Eligible.paint("✓ CAN WORK")
        } else {
            Tone::Ineligible.paint("✗ CANNOT WORK")
        };
        if narrow {
            writeln!(out, "{name}: {status}")?;
        } else {
            writeln!(out, "{name:<width$}  {status}")?;
        }
    }

    let summary = Summary::new(results);
    writeln!(out)?;
    writeln!(out, "Eligible companies:   {}", summary.eligible)?;
    writeln!(out, "Ineligible companies: {}", summary.ineligible)?;
    if let Some(rate) = summary.success_rate() {
        writeln!(out, "Success rate:         {rate:.1}%")?;
    }
    Ok(())
}

fn write_detailed(out: &mut impl Write, results: &Results) -> io::Result<()> {
    for (heading, eligible) in [("Eligible companies", true), ("Ineligible companies", false)] {
        writeln!(out)?;
        writeln!(out, "{}", Tone::Heading.paint(heading))?;
        let mut any = false;
        for (name, result) in results.iter().filter(|(_, result)| result.eligible == eligible) {
            any = true;
            writeln!(
                out,
                "  {name}: {}",
                Tone::Muted.paint(&result.requirement_description)
            )?;
        }
        if !any {
            writeln!(out, "  {}", Tone::Muted.paint("(none)"))?;
        }
    }
    Ok(())
}

struct Summary {
    eligible: usize,
    ineligible: usize,
}

impl Summary {
    fn new(results: &Results) -> Self {
        let eligible = results.values().filter(|result| result.eligible).count();
        Self {
            eligible,
            ineligible: results.len() - eligible,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn success_rate(&self) -> Option<f64> {
        let total = self.eligible + self.ineligible;
        (total > 0).then(|| self.eligible as f64 * 100.0 / total as f64)
    }
}
