//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use weft::Coverage;

/// Format coverage data as an ASCII table.
pub fn format_coverage_table(coverage: &[Coverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Coverage", "Percent", "Missing"]);

    for lang in coverage {
        table.add_row(vec![
            lang.language.to_string(),
            format!("{}/{}", lang.translated, lang.total),
            format!("{:.1}%", percent(lang)),
            lang.missing.len().to_string(),
        ]);
    }

    table
}

fn percent(coverage: &Coverage) -> f64 {
    if coverage.total == 0 {
        return 100.0;
    }
    coverage.translated as f64 * 100.0 / coverage.total as f64
}
