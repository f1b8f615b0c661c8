//! Results files written next to the run.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;
use tracing::info;

use mazesolver_lib::{ResultsDocument, ResultsSection};

use crate::output::OutputFormat;

/// Subdirectory holding heuristic experiment reports.
pub const EXPERIMENT_DIR: &str = "extra-statistics";

/// Writes [`ResultsDocument`]s below a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportWriter {
    base: PathBuf,
    format: OutputFormat,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    sections: &'a [ResultsSection],
}

impl ReportWriter {
    pub fn new(base: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            base: base.into(),
            format,
        }
    }

    /// Path a report named `stem` would be written to.
    ///
    /// `subdir` is joined onto the base directory when given.
    pub fn target(&self, subdir: Option<&str>, stem: &str) -> PathBuf {
        let dir = match subdir {
            Some(subdir) => self.base.join(subdir),
            None => self.base.clone(),
        };
        dir.join(format!("{stem}.{}", self.format.extension()))
    }

    /// Write `document` as `<base>/<subdir>/<stem>.<ext>`, creating directories as needed.
    pub fn write(
        &self,
        subdir: Option<&str>,
        stem: &str,
        document: &ResultsDocument,
    ) -> Result<PathBuf> {
        let path = self.target(subdir, stem);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        let contents = render_report(document, self.format, Local::now())?;
        fs::write(&path, contents)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        info!(path = %path.display(), format = ?self.format, "wrote results report");
        Ok(path)
    }
}

/// Render the full report file contents, stamped with `generated`.
pub fn render_report(
    document: &ResultsDocument,
    format: OutputFormat,
    generated: DateTime<Local>,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Generated: {}\n\n{}",
            generated.format("%Y-%m-%d %H:%M:%S"),
            document.render_text()
        )),
        OutputFormat::Json => {
            let report = JsonReport {
                generated_at: generated.to_rfc3339_opts(SecondsFormat::Secs, false),
                sections: &document.sections,
            };
            let mut json = serde_json::to_string_pretty(&report)
                .context("failed to serialize results report")?;
            json.push('\n');
            Ok(json)
        }
    }
}
