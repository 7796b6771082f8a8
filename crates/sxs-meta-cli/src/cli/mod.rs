//! CLI for the SXS BBH metadata exporter.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use sxs_meta_core::config;
use sxs_meta_core::export::{run_export, ExportPaths};
use sxs_meta_core::source::SXS_OPEN_QUERY;
use sxs_meta_core::zenodo::ZenodoClient;

/// Get SXS Zenodo metadata.
#[derive(Debug, Parser)]
#[command(name = "sxs-meta")]
#[command(about = "Export SXS BBH simulation metadata and available resolutions from Zenodo", long_about = None)]
pub struct Cli {
    /// Name of output metadata JSON file.
    #[arg(long = "output_json", value_name = "PATH")]
    pub output_json: PathBuf,

    /// Name of output resolutions JSON file.
    #[arg(long = "output_res", value_name = "PATH")]
    pub output_res: PathBuf,
}

impl Cli {
    pub fn paths(&self) -> ExportPaths {
        ExportPaths {
            catalog_json: self.output_json.clone(),
            resolutions_json: self.output_res.clone(),
        }
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let client = ZenodoClient::from_config(&cfg);
        let summary = run_export(&client, SXS_OPEN_QUERY, &cli.paths())?;
        println!("{}", summary.report_line());
        Ok(())
    }
}
