//! Check/rewrite session.
//!
//! A [`Session`] carries the configuration and the loaded source units
//! through one sequential run: load, reconcile, then (in correction mode)
//! rewrite.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::config::TagCheckConfig;
use crate::core::errors::Result;
use crate::detectors::fn_tags::{Finding, Reconciler, Reconciliation};
use crate::io::rewrite::Rewriter;
use crate::lang::common::SourceUnit;
use crate::lang::loader::SourceUnitLoader;

/// Summary of a completed run
#[derive(Debug, Default)]
pub struct RunReport {
    /// Mismatching tags, in discovery order
    pub findings: Vec<Finding>,
    /// Files replaced on disk
    pub rewritten: Vec<PathBuf>,
    /// Source units loaded
    pub units: usize,
    /// Tagged declarations examined
    pub checked: usize,
    /// Tags accepted under an older naming scheme
    pub legacy: usize,
}

/// State of one check run
pub struct Session {
    config: TagCheckConfig,
    units: Vec<SourceUnit>,
}

impl Session {
    /// Start a session after validating the configuration
    pub fn new(config: TagCheckConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            units: Vec::new(),
        })
    }

    /// Configuration of this session
    pub fn config(&self) -> &TagCheckConfig {
        &self.config
    }

    /// Loaded source units
    pub fn units(&self) -> &[SourceUnit] {
        &self.units
    }

    /// Load the file or directory at `path`, adding its units to the session
    pub fn load(&mut self, path: &Path) -> Result<usize> {
        let mut loader = SourceUnitLoader::new(&self.config)?;
        let units = loader.load(path)?;
        let count = units.len();
        self.units.extend(units);
        debug!(path = %path.display(), units = count, "loaded source units");
        Ok(count)
    }

    /// Compare every declared tag with its canonical form
    pub fn reconcile(&self) -> Result<Reconciliation> {
        Reconciler::new(self.config.write).reconcile(&self.units)
    }

    /// Apply the planned corrections of `reconciliation` to disk
    pub fn rewrite(&self, reconciliation: &Reconciliation) -> Result<Vec<PathBuf>> {
        if !self.config.write || reconciliation.edits.is_empty() {
            return Ok(Vec::new());
        }
        Rewriter::new(&self.config)?.rewrite(&self.units, &reconciliation.edits)
    }

    /// Load, reconcile and rewrite in one call
    pub fn run(config: TagCheckConfig, path: &Path) -> Result<RunReport> {
        let mut session = Self::new(config)?;
        session.load(path)?;
        let reconciliation = session.reconcile()?;
        let rewritten = session.rewrite(&reconciliation)?;

        Ok(RunReport {
            units: session.units.len(),
            checked: reconciliation.checked,
            legacy: reconciliation.legacy,
            findings: reconciliation.findings,
            rewritten,
        })
    }
}
