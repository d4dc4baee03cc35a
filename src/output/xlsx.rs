// Workbook export.
//
// Renders the two buckets as one workbook with a sheet per category.
// The column order is the export contract: downstream consumers address
// these columns by position.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::config::{EDUCATION, OTHER};
use crate::pipeline::batch::Buckets;
use crate::scoring::profile::ScoredProfile;

/// Fixed column order of each sheet.
pub const COLUMNS: [&str; 8] = [
    "Score",
    "Key-words",
    "Occupation",
    "Bio",
    "Name",
    "Country",
    "Link",
    "Social networks",
];

/// Write both buckets to a workbook at `path`.
pub fn export_workbook(buckets: &Buckets, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    write_sheet(&mut workbook, EDUCATION, &buckets.education)?;
    write_sheet(&mut workbook, OTHER, &buckets.other)?;

    workbook
        .save(path)
        .with_context(|| format!("Failed to save workbook to {}", path.display()))?;

    Ok(())
}

fn write_sheet(workbook: &mut Workbook, name: &str, profiles: &[ScoredProfile]) -> Result<()> {
    let worksheet = workbook.add_worksheet().set_name(name)?;

    let header = Format::new().set_bold();
    for (col, title) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    for (i, scored) in profiles.iter().enumerate() {
        write_row(worksheet, (i + 1) as u32, scored)?;
    }

    Ok(())
}

fn write_row(worksheet: &mut Worksheet, row: u32, scored: &ScoredProfile) -> Result<()> {
    worksheet.write_number(row, 0, scored.score as f64)?;
    worksheet.write_string(row, 1, scored.keywords_joined())?;
    worksheet.write_string(row, 2, &scored.profile.occupation)?;
    worksheet.write_string(row, 3, &scored.profile.biography)?;
    worksheet.write_string(row, 4, &scored.profile.name)?;
    worksheet.write_string(row, 5, &scored.profile.country)?;
    worksheet.write_string(row, 6, &scored.profile.link)?;
    worksheet.write_string(row, 7, scored.social_networks_joined())?;
    Ok(())
}
