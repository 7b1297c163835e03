use crate::analyzer::SummaryResult;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Name of the generated report, written inside the analyzed directory.
pub const OUTPUT_FILENAME: &str = "README_SUMMARY.md";

/// Render the grouped Markdown report. Pure: the output is fully determined
/// by the result list, independent of its order.
pub fn render_report(results: &[SummaryResult]) -> String {
    // BTreeMap keeps folder sections lexicographically sorted.
    let mut groups: BTreeMap<String, Vec<(String, String)>> = BTreeMap::new();
    for result in results {
        let folder = result
            .path
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let file = result
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        groups
            .entry(folder)
            .or_default()
            .push((file, result.summary.clone()));
    }

    let mut report = String::from("# Script Summaries\n\n");

    for (folder, mut rows) in groups {
        if folder.is_empty() {
            report.push_str("## Root\n\n");
        } else {
            report.push_str(&format!("## {}\n\n", folder));
        }

        report.push_str("| Script | Description |\n");
        report.push_str("| ------ | ----------- |\n");
        rows.sort();
        for (script, description) in rows {
            report.push_str(&format!("| {} | {} |\n", script, description));
        }
        report.push('\n');
    }

    report
}

/// Render and write the report, overwriting any previous one.
pub fn write_report(results: &[SummaryResult], output_file: &Path) -> crate::Result<()> {
    fs::write(output_file, render_report(results))?;
    Ok(())
}
