use colored::Colorize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::models::{Hit, RunReport};

pub struct ConsoleReporter;

#[derive(Tabled)]
struct HitRow {
    #[tabled(rename = "Status")]
    marker: String,
    #[tabled(rename = "Result")]
    value: String,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_hits(&self, report: &RunReport) {
        if report.hits.is_empty() {
            println!("\n{}", "No hits found.".yellow());
            return;
        }

        let rows: Vec<HitRow> = report
            .hits
            .iter()
            .map(|hit| {
                let (marker, value) = hit.export_pair();
                HitRow {
                    marker: Self::colorize_marker(hit, &marker),
                    value,
                }
            })
            .collect();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string();

        println!("\n{}", table);
    }

    pub fn print_summary(&self, report: &RunReport) {
        println!("\n{}", "Summary".bold().underline());
        println!(
            "{} of {} candidates probed in {:.2}s ({:.1} req/s)",
            report.probed,
            report.total_candidates,
            report.elapsed.as_secs_f64(),
            report.probed as f64 / report.elapsed.as_secs_f64().max(f64::EPSILON)
        );

        let hits = report.hits.len();
        if hits > 0 {
            println!("  {}: {}", "Hits".green().bold(), hits);
        } else {
            println!("  {}: 0", "Hits".dimmed());
        }

        if report.interrupted {
            println!("  {}", "Run stopped before exhausting the wordlist.".yellow());
        }
        println!();
    }

    fn colorize_marker(hit: &Hit, marker: &str) -> String {
        match hit {
            Hit::Path { status, .. } => match status {
                200 => marker.green().to_string(),
                301 | 302 => marker.cyan().to_string(),
                403 => marker.yellow().to_string(),
                _ => marker.to_string(),
            },
            Hit::Password { .. } => marker.red().bold().to_string(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
