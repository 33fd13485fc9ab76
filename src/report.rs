//! Plain-text tables for the terminal
//!
//! Column widths grow to fit the widest cell; nothing is truncated.

use crate::entity::Stamped;
use crate::records::{PersonnelRecord, SupplyRecord};
use crate::sites::OperatingPicture;
use crate::workflow::SubmissionResult;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render rows under a header, two spaces between columns
pub fn table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(render_line(header, &widths));
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push(render_line(&dashes.iter().map(String::as_str).collect::<Vec<_>>(), &widths));
    for row in rows {
        out.push(render_line(&row.iter().map(String::as_str).collect::<Vec<_>>(), &widths));
    }
    out.join("\n")
}

fn render_line(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

pub fn personnel_table(records: &[Stamped<PersonnelRecord>]) -> String {
    if records.is_empty() {
        return "No personnel records.".to_string();
    }
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|s| {
            let r = &s.record;
            vec![
                r.personnel_id.clone(),
                r.full_name(),
                r.personnel_class.to_string(),
                opt(&r.rank),
                opt(&r.unit),
                r.clearance_level.to_string(),
                r.status.to_string(),
                s.updated_at.format(TIME_FORMAT).to_string(),
            ]
        })
        .collect();
    table(
        &["ID", "Name", "Class", "Rank", "Unit", "Clearance", "Status", "Updated"],
        &rows,
    )
}

pub fn supply_table(records: &[Stamped<SupplyRecord>]) -> String {
    if records.is_empty() {
        return "No supply records.".to_string();
    }
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|s| {
            let r = &s.record;
            vec![
                r.supply_id.clone(),
                r.supply_name.clone(),
                r.supply_class.to_string(),
                r.supply_type.to_string(),
                format!("{} {}", r.quantity, r.unit_of_measure),
                r.status.to_string(),
                r.priority.to_string(),
                opt(&r.location),
                s.updated_at.format(TIME_FORMAT).to_string(),
            ]
        })
        .collect();
    table(
        &["ID", "Name", "Class", "Type", "Quantity", "Status", "Priority", "Location", "Updated"],
        &rows,
    )
}

pub fn sites_table(picture: &OperatingPicture) -> String {
    let rows: Vec<Vec<String>> = picture
        .sites
        .iter()
        .map(|s| {
            vec![
                s.name.clone(),
                s.kind.to_string(),
                s.status.to_string(),
                format!("{:.4}", s.latitude),
                format!("{:.4}", s.longitude),
            ]
        })
        .collect();
    table(&["Site", "Kind", "Status", "Lat", "Lon"], &rows)
}

/// One-line readiness summary, e.g. "5 sites: 3 Operational, 1 Degraded, 1 Offline"
pub fn sites_summary(picture: &OperatingPicture) -> String {
    let counts = picture
        .counts_by_status()
        .into_iter()
        .map(|(status, n)| format!("{} {}", n, status))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} sites: {}", picture.sites.len(), counts)
}

/// Where the map view is centred, e.g. "Map center: 35.1377, -79.0058"
pub fn map_center(picture: &OperatingPicture) -> String {
    match picture.center() {
        Some((lat, lon)) => format!("Map center: {:.4}, {:.4}", lat, lon),
        None => "Map center: no sites".to_string(),
    }
}

/// Message lines for a submission outcome
pub fn submission(entity: &str, id: &str, result: &SubmissionResult) -> String {
    if result.ok {
        return format!("✓ {} record '{}' saved", entity, id);
    }
    let mut lines = vec![format!("✗ {} record not saved", entity)];
    lines.extend(result.errors.iter().map(|e| format!("  - {}", e)));
    lines.join("\n")
}
