use std::path::PathBuf;

use clap::Parser;
use eligibility::Catalog;
use tracing::instrument;

use super::terminal::Tone;

#[derive(Debug, Parser)]
#[command(about = "Check that a catalog file describes valid companies")]
pub struct Validate {
    /// The catalog file to check
    catalog: PathBuf,
}

impl Validate {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self) -> anyhow::Result<()> {
        let catalog = Catalog::load(&self.catalog).map_err(|e| {
            anyhow::Error::new(e).context(format!("{} is invalid", self.catalog.display()))
        })?;

        let message = format!(
            "✅ {}: {} companies are valid",
            self.catalog.display(),
            catalog.companies().len()
        );
        println!("{}", Tone::Eligible.paint(&message));
        Ok(())
    }
}
