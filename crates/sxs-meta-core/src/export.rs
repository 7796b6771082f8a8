//! Export pipeline: search, build the BBH catalog, derive resolutions, write both artifacts.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::output::write_json;
use crate::resolution::resolutions_for_catalog;
use crate::source::RecordSource;

/// Destinations of the two JSON artifacts.
#[derive(Debug, Clone)]
pub struct ExportPaths {
    pub catalog_json: PathBuf,
    pub resolutions_json: PathBuf,
}

/// Outcome of a successful export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Records returned by the search, before filtering.
    pub records_seen: usize,
    /// BBH simulations retained in the catalog.
    pub simulations: usize,
}

impl ExportSummary {
    pub fn report_line(&self) -> String {
        format!(
            "There are {} BBH simulations in the catalog.",
            self.simulations
        )
    }
}

/// Runs the whole export. Nothing is written unless every record parses.
pub fn run_export<S>(source: &S, query: &str, paths: &ExportPaths) -> Result<ExportSummary>
where
    S: RecordSource + ?Sized,
{
    let records = source.search(query)?;
    let records_seen = records.len();
    let catalog = Catalog::build(records).context("build catalog")?;
    tracing::info!(
        records_seen,
        simulations = catalog.len(),
        "catalog built"
    );

    let resolutions = resolutions_for_catalog(&catalog).context("extract resolutions")?;

    write_json(&paths.catalog_json, catalog.as_json_map())
        .with_context(|| format!("write catalog {}", paths.catalog_json.display()))?;
    write_json(&paths.resolutions_json, &resolutions)
        .with_context(|| format!("write resolutions {}", paths.resolutions_json.display()))?;

    Ok(ExportSummary {
        records_seen,
        simulations: catalog.len(),
    })
}
