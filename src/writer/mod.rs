//! Module orchestrating a run: every catalog entry is rendered and written to the output directory, one after the other.

use std::path::{Path, PathBuf};

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{Artifact, FixtureCatalog};
use crate::error::{Error, create_dir_error, write_error};


pub struct FixtureWriter {
    output_dir: PathBuf,
}

impl FixtureWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes all catalog artifacts in catalog order, replacing files left by earlier runs.
    ///
    /// The first failure aborts the run. Artifacts written before it stay on disk.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Report, Error> {
        let mut report = Report::default();
        for artifact in FixtureCatalog::iter() {
            let summary = self.write_artifact(artifact, rng)?;
            report.summaries.push(summary);
        }

        info!(
            dir = %self.output_dir.display(),
            artifacts = report.summaries.len(),
            records = report.total_records(),
            "fixture generation complete"
        );
        Ok(report)
    }

    /// Renders and writes a single artifact.
    pub fn write_artifact<R: Rng + ?Sized>(
        &self,
        artifact: Artifact,
        rng: &mut R,
    ) -> Result<ArtifactSummary, Error> {
        self.ensure_output_dir()?;

        let rendered = artifact.render(rng)?;
        let path = self.output_dir.join(artifact.file_name());
        std::fs::write(&path, &rendered.bytes).map_err(|e| write_error(&path, e))?;

        info!(
            artifact = artifact.name(),
            path = %path.display(),
            records = rendered.records,
            bytes = rendered.bytes.len(),
            "wrote artifact"
        );

        Ok(ArtifactSummary {
            artifact: artifact.name(),
            file: path,
            records: rendered.records,
            bytes: rendered.bytes.len(),
        })
    }

    // Creates the directory when missing and leaves it untouched otherwise
    fn ensure_output_dir(&self) -> Result<(), Error> {
        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| create_dir_error(&self.output_dir, e))?;
        debug!(dir = %self.output_dir.display(), "output directory ready");
        Ok(())
    }
}

/// Outcome of one successful artifact write.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSummary {
    pub artifact: &'static str,
    pub file: PathBuf,
    pub records: usize,
    pub bytes: usize,
}

/// Summaries of all artifacts written by a run, in catalog order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    summaries: Vec<ArtifactSummary>,
}

impl Report {
    pub fn summaries(&self) -> &[ArtifactSummary] {
        &self.summaries
    }

    pub fn get(&self, artifact: &str) -> Option<&ArtifactSummary> {
        self.summaries.iter().find(|s| s.artifact == artifact)
    }

    pub fn total_records(&self) -> usize {
        self.summaries.iter().map(|s| s.records).sum()
    }
}

impl IntoIterator for Report {
    type Item = ArtifactSummary;
    type IntoIter = std::vec::IntoIter<ArtifactSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.summaries.into_iter()
    }
}
