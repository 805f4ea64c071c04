//! Human-readable reports
//!
//! Plain text, aligned by display width so values with wide characters
//! still line up.

use unicode_width::UnicodeWidthStr;

use crate::application::{BulkReport, EntityReport};
use crate::config::ConfigWarning;
use crate::domain::entities::EntityKind;
use crate::domain::policies::ProfileRegistry;
use crate::domain::services::{FieldDetail, InconsistencyReport};
use crate::domain::value_objects::FieldValue;

/// Render one entity's report
pub fn render_entity_report(report: &EntityReport) -> String {
    let subject = format!("{} {}", report.kind, report.entity_id);
    let mut out = if report.has_findings() {
        format!(
            "{}: {}\n",
            subject,
            finding_counts(report.mismatch_count(), report.missing_count())
        )
    } else {
        format!("{subject}: no inconsistencies\n")
    };

    for entry in &report.inconsistencies {
        render_entry(&mut out, entry);
    }
    out
}

/// Render a bulk report: headline, entities with findings, failures
pub fn render_bulk_report(kind: EntityKind, bulk: &BulkReport) -> String {
    let mut out = format!("{}: {} with findings", kind.collection(), bulk.reports.len());
    if !bulk.reports.is_empty() {
        out.push_str(&format!(
            " ({})",
            finding_counts(bulk.mismatch_count(), bulk.missing_count())
        ));
    }
    if !bulk.errors.is_empty() {
        out.push_str(&format!(", {} failed", bulk.errors.len()));
    }
    out.push('\n');

    for report in &bulk.reports {
        out.push('\n');
        out.push_str(&render_entity_report(report));
    }

    if !bulk.errors.is_empty() {
        out.push_str("\nfailed:\n");
        let width = bulk
            .errors
            .iter()
            .map(|f| f.entity_id.width())
            .max()
            .unwrap_or(0);
        for failure in &bulk.errors {
            out.push_str(&format!(
                "  {}  {}\n",
                pad(&failure.entity_id, width),
                failure.error
            ));
        }
    }

    out
}

/// Render the effective type profiles as a table
pub fn render_profiles(profiles: &ProfileRegistry) -> String {
    let mut rows: Vec<[String; 4]> = vec![[
        "type".to_string(),
        "fields_to_check".to_string(),
        "allow_missing".to_string(),
        "allow_null".to_string(),
    ]];
    for (network_type, profile) in profiles.iter() {
        rows.push([
            network_type.to_string(),
            list_or_dash(profile.fields_to_check().iter().map(String::as_str)),
            list_or_dash(profile.allow_missing_fields()),
            list_or_dash(profile.allow_null_fields()),
        ]);
    }

    let widths: Vec<usize> = (0..3)
        .map(|col| rows.iter().map(|r| r[col].width()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for row in &rows {
        for (cell, width) in row.iter().zip(&widths) {
            out.push_str(&pad(cell, *width));
            out.push_str("  ");
        }
        out.push_str(&row[3]);
        out.push('\n');
    }
    out
}

pub fn render_config_warning(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut message = format!(
        "warning: unknown config key '{}' in {}",
        warning.key, location
    );
    if let Some(suggestion) = &warning.suggestion {
        message.push_str(&format!(" (did you mean '{suggestion}'?)"));
    }
    message
}

fn render_entry(out: &mut String, entry: &InconsistencyReport) {
    let status = if entry.has_findings() { "" } else { " ok" };
    out.push_str(&format!(
        "  {} [{}]{}\n",
        entry.key,
        entry.sources.join(", "),
        status
    ));

    for detail in &entry.details {
        match detail {
            FieldDetail::Mismatch {
                field,
                values,
                message,
            } => {
                out.push_str(&format!("    mismatch {field}: {message}\n"));
                let rendered: Vec<String> = values.iter().map(|v| render_value(&v.value)).collect();
                let width = rendered.iter().map(|r| r.width()).max().unwrap_or(0);
                for (text, class) in rendered.iter().zip(values) {
                    out.push_str(&format!(
                        "      {}  {}\n",
                        pad(text, width),
                        class.sources.join(", ")
                    ));
                }
            }
            FieldDetail::Missing {
                field,
                missing_sources,
                message,
            } => {
                out.push_str(&format!("    missing {field}: {message}\n"));
                out.push_str(&format!("      {}\n", missing_sources.join(", ")));
            }
        }
    }
}

fn render_value(value: &FieldValue) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "?".to_string())
}

fn finding_counts(mismatches: usize, missing: usize) -> String {
    let noun = if mismatches == 1 {
        "mismatch"
    } else {
        "mismatches"
    };
    format!("{mismatches} {noun}, {missing} missing")
}

fn list_or_dash<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let joined = items.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
