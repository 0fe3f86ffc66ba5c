use super::statistics::Statistics;

use log::*;
use std::sync::Mutex;

/// Receives build statistics. Purely observational: nothing reported here
/// feeds back into the build.
pub trait Diagnostics: Send + Sync {
    fn report(&self, title: &str, statistics: &Statistics);
}

/// Forwards statistics to the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, title: &str, statistics: &Statistics) {
        debug!("{}", statistics.to_string_with_title(title));
    }
}

/// Keeps every report in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    reports: Mutex<Vec<(String, Statistics)>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<(String, Statistics)> {
        return match self.reports.lock() {
            Ok(reports) => reports.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&self, title: &str, statistics: &Statistics) {
        let mut reports = match self.reports.lock() {
            Ok(reports) => reports,
            Err(poisoned) => poisoned.into_inner(),
        };
        reports.push((title.to_string(), statistics.clone()));
    }
}
