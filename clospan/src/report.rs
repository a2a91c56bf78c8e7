//! Rendering mining results for people and for machines.

use crate::seq::PatternRecord;

const PATTERN_HEADER: &str = "Pattern";
const SUPPORT_HEADER: &str = "Support";

pub fn format_pattern(pattern: &[String]) -> String {
    pattern.join(", ")
}

/// Two aligned columns, one row per pattern, in the order given.
pub fn render_table(records: &[PatternRecord]) -> String {
    let rows: Vec<(String, String)> = records
        .iter()
        .map(|r| (format_pattern(&r.pattern), r.support.to_string()))
        .collect();

    let width = rows
        .iter()
        .map(|(pattern, _)| pattern.chars().count())
        .chain(std::iter::once(PATTERN_HEADER.len()))
        .max()
        .unwrap_or(PATTERN_HEADER.len());

    let mut out = String::new();
    push_row(&mut out, PATTERN_HEADER, SUPPORT_HEADER, width);
    push_row(&mut out, &"-".repeat(width), &"-".repeat(SUPPORT_HEADER.len()), width);
    for (pattern, support) in &rows {
        push_row(&mut out, pattern, support, width);
    }
    out
}

fn push_row(out: &mut String, pattern: &str, support: &str, width: usize) {
    let pad = width - pattern.chars().count();
    out.push_str(pattern);
    out.push_str(&" ".repeat(pad + 2));
    out.push_str(support);
    out.push('\n');
}

pub fn render_json(records: &[PatternRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

pub fn summary_message(count: usize, min_support: usize) -> String {
    match count {
        0 => format!("No closed patterns found with minimum support {}", min_support),
        1 => "Found 1 closed pattern".to_string(),
        n => format!("Found {} closed patterns", n),
    }
}
