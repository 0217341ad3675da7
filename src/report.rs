// report.rs
//
// Plain-text rendering for the CLI subcommands. Same columns and number
// formats as the HTML views.

use crate::api::PropertySummary;
use crate::domain::format::{fixed, group_thousands, plain_or_missing, MISSING};
use crate::domain::Comparable;
use crate::templates::components::comparables_display::NO_COMPARABLE_PROPERTIES;
use std::fmt::Write;

const PIN_HEADERS: [&str; 4] = ["PIN", "Square Footage", "Year Built", "Confidence Score"];

pub fn properties_report(properties: &[PropertySummary]) -> String {
    let mut out = String::new();
    for p in properties {
        out.push_str(&p.property_identification_number);
        out.push('\n');
    }
    let _ = writeln!(out, "{} properties available.", properties.len());
    out
}

pub fn pin_report(pin: &str, comparables: &[Comparable]) -> String {
    if comparables.is_empty() {
        return format!(
            "Could not find comparables for PIN: {pin}. It may not exist in the dataset.\n"
        );
    }

    let rows: Vec<[String; 4]> = comparables
        .iter()
        .map(|c| {
            [
                c.pin.clone().unwrap_or_else(|| MISSING.to_string()),
                group_thousands(c.square_footage),
                plain_or_missing(c.year_built),
                fixed(c.confidence_score, 4),
            ]
        })
        .collect();

    let mut widths = PIN_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "Top {} Comparables for PIN {pin}:", comparables.len());
    push_row(&mut out, &PIN_HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

pub fn address_report(comparables: &[Comparable]) -> String {
    if comparables.is_empty() {
        return format!("{NO_COMPARABLE_PROPERTIES}\n");
    }

    let mut out = String::new();
    let _ = writeln!(out, "Top {} Comparable Properties:", comparables.len());
    for c in comparables {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            c.address.as_deref().or(c.pin.as_deref()).unwrap_or(MISSING)
        );
        let _ = writeln!(out, "  Type: {}", c.property_type.as_deref().unwrap_or(MISSING));
        let _ = writeln!(out, "  Size: {} sqft", group_thousands(c.square_footage));
        let _ = writeln!(out, "  Age: {} years", plain_or_missing(c.age));
        let _ = writeln!(out, "  Confidence Score: {}", fixed(c.confidence_score, 2));
    }
    out
}

// Text left-aligned, numbers right-aligned; first column is the PIN.
fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 4]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths.iter().copied())
        .enumerate()
        .map(|(i, (cell, w))| {
            if i == 0 {
                format!("{:<w$}", cell.as_ref())
            } else {
                format!("{:>w$}", cell.as_ref())
            }
        })
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}
