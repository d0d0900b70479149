use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;

use crate::models::{Hit, RunReport};

pub struct JsonExporter;

impl JsonExporter {
    /// Writes hits as an ordered `(status-or-marker, value)` pair list plus
    /// run metadata. Partial results from an interrupted run are saved the
    /// same way as a completed one.
    pub fn export(report: &RunReport, path: &str) -> Result<()> {
        let output = ExportData {
            scan_time: Utc::now().to_rfc3339(),
            probed: report.probed,
            total_candidates: report.total_candidates,
            interrupted: report.interrupted,
            hits: report.hits.iter().map(Hit::export_pair).collect(),
        };

        let json = serde_json::to_string_pretty(&output)?;
        fs::write(path, json).with_context(|| format!("Failed to write to {}", path))?;
        Ok(())
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct ExportData {
    scan_time: String,
    probed: usize,
    total_candidates: usize,
    interrupted: bool,
    hits: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn exports_hits_as_ordered_pairs() {
        let report = RunReport {
            hits: vec![
                Hit::Path {
                    status: 200,
                    url: "http://t/admin".to_string(),
                },
                Hit::Password {
                    secret: "letmein".to_string(),
                },
            ],
            probed: 42,
            total_candidates: 50,
            elapsed: Duration::from_secs(3),
            interrupted: true,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("found.json");
        JsonExporter::export(&report, path.to_str().unwrap()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let data: ExportData = serde_json::from_str(&content).unwrap();

        assert_eq!(data.probed, 42);
        assert!(data.interrupted);
        assert_eq!(
            data.hits,
            vec![
                ("200".to_string(), "http://t/admin".to_string()),
                ("valid-password".to_string(), "letmein".to_string()),
            ]
        );
    }
}
