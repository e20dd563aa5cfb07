//! Pure formatting functions for build driver output.
//!
//! Functions here are pure (no I/O side effects beyond printing) and
//! testable via their format helpers.

use crate::pipeline::PluginReport;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display the summary of a pipeline run.
///
/// Shows, per plugin, how many pages were touched and how many edits were
/// made across the whole output directory.
///
/// # Arguments
/// * `reports` - Per-plugin outcomes from the pipeline
/// * `total_pages` - Number of pages the pipeline ran over
pub fn display_run_summary(reports: &[PluginReport], total_pages: usize) {
    println!("\n\x1b[1mBuild transform summary\x1b[0m");
    println!("  Pages scanned: {}", total_pages);

    for report in reports {
        println!("  {}", format_plugin_report(report));
    }
}

/// One summary line for a plugin run.
pub fn format_plugin_report(report: &PluginReport) -> String {
    format!(
        "{}: {} replacement(s) across {} page(s)",
        report.plugin, report.edits, report.pages_touched
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plugin_report() {
        let report = PluginReport {
            plugin: "inject-version".to_string(),
            pages_touched: 3,
            edits: 7,
        };
        assert_eq!(
            format_plugin_report(&report),
            "inject-version: 7 replacement(s) across 3 page(s)"
        );
    }

    #[test]
    fn test_format_plugin_report_noop() {
        let report = PluginReport {
            plugin: "inject-version".to_string(),
            pages_touched: 0,
            edits: 0,
        };
        assert_eq!(
            format_plugin_report(&report),
            "inject-version: 0 replacement(s) across 0 page(s)"
        );
    }
}
