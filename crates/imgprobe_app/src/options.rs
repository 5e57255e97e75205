//! Run options for the CLI

/// Options for one probing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOptions {
    /// Descend into directories
    pub recursive: bool,
    /// Emit one JSON object per line instead of text
    pub json: bool,
    /// Worker threads (0 = one per core)
    pub jobs: usize,
    /// Drop results whose format was not recognized
    pub known_only: bool,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            json: false,
            jobs: 0,
            known_only: false,
        }
    }
}

impl ProbeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks directories instead of skipping them
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Sets the worker thread count
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn known_only(mut self, known_only: bool) -> Self {
        self.known_only = known_only;
        self
    }
}
