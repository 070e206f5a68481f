// file: src/exporter/json.rs
// description: json export of ranked search results

use crate::error::Result;
use crate::models::ScoredDocument;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_path: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ResultManifest<'a> {
    pub query: &'a str,
    pub exported_at: String,
    pub total_results: usize,
    pub results: &'a [ScoredDocument],
}

impl JsonExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Result<Self> {
        let output_path = output_path.into();
        if let Some(parent) = output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { output_path })
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, query: &str, results: &[ScoredDocument], pretty: bool) -> Result<()> {
        let manifest = ResultManifest {
            query,
            exported_at: Utc::now().to_rfc3339(),
            total_results: results.len(),
            results,
        };

        let body = if pretty {
            serde_json::to_string_pretty(&manifest)?
        } else {
            serde_json::to_string(&manifest)?
        };
        fs::write(&self.output_path, body)?;

        info!(
            "Exported {} results to {}",
            manifest.total_results,
            self.output_path.display()
        );
        Ok(())
    }
}
