use std::path::PathBuf;

use clap::Parser;
use eligibility::Config;
use tracing::instrument;

use super::terminal::{Tone, is_narrow};

#[derive(Debug, Parser)]
#[command(about = "List companies and their requirements")]
pub struct List {
    /// Company catalog (YAML). Defaults to the configured catalog, or the
    /// built-in sample
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl List {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let companies = super::load_companies(self.catalog.as_deref(), config)?;

        match self.output {
            OutputFormat::Json => {
                use serde_json::json;

                let output: Vec<_> = companies
                    .iter()
                    .map(|company| {
                        json!({
                            "name": company.name(),
                            "requirements": company.requirement_description(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => {
                if companies.is_empty() {
                    println!("No companies in catalog.");
                    return Ok(());
                }

                let narrow = is_narrow();
                let width = companies
                    .iter()
                    .map(|company| company.name().chars().count())
                    .max()
                    .unwrap_or(0);
                for company in &companies {
                    let description = company.requirement_description();
                    if narrow {
                        println!("{}", Tone::Heading.paint(company.name()));
                        println!("  {}", Tone::Muted.paint(&description));
                    } else {
                        println!(
                            "{:<width$}  {}",
                            company.name(),
                            Tone::Muted.paint(&description)
                        );
                    }
                }
            }
        }

        Ok(())
    }
}
