//! Spreadsheet export of the held attendance records.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};

use crate::{
    client::store::notice::{NoticeKind, EXPORT_FAILED, EXPORT_SUCCEEDED},
    error::Error,
    model::{attendance::AttendanceRecordDto, class::ClassGroupDto},
};

pub const SHEET_NAME: &str = "Presensi";
pub const HEADERS: [&str; 5] = ["Date", "Class", "Student", "Status", "Note"];
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Shown when a record references a class that is not in the class list
const UNKNOWN_CLASS: &str = "-";

const COLUMN_WIDTHS: [f64; 5] = [12.0, 20.0, 18.0, 10.0, 32.0];

/// One spreadsheet row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub date: String,
    pub class_name: String,
    pub student: String,
    pub status: String,
    pub note: String,
}

impl ExportRow {
    fn cells(&self) -> [&str; 5] {
        [
            self.date.as_str(),
            self.class_name.as_str(),
            self.student.as_str(),
            self.status.as_str(),
            self.note.as_str(),
        ]
    }
}

/// Projects records into rows, one per record in held order
pub fn export_rows(records: &[AttendanceRecordDto], classes: &[ClassGroupDto]) -> Vec<ExportRow> {
    let class_names: HashMap<&str, &str> = classes
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect();

    records
        .iter()
        .map(|record| ExportRow {
            date: record.date.format("%Y-%m-%d").to_string(),
            class_name: class_names
                .get(record.class_id.as_str())
                .copied()
                .unwrap_or(UNKNOWN_CLASS)
                .to_string(),
            student: record.student_login.clone(),
            status: record.status.label().to_string(),
            note: record.note.clone(),
        })
        .collect()
}

/// Writes rows into an in-memory `.xlsx` workbook
pub fn write_workbook(rows: &[ExportRow]) -> Result<Vec<u8>, Error> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, (header, width)) in HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, *header, &header_format)?;
        worksheet.set_column_width(col, width)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let row_number = index as u32 + 1;
        for (col, cell) in row.cells().into_iter().enumerate() {
            worksheet.write_string(row_number, col as u16, cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// `presensi_<ISO-date>.xlsx`
pub fn export_filename(date: NaiveDate) -> String {
    format!("presensi_{}.xlsx", date.format("%Y-%m-%d"))
}

/// A finished workbook ready to be handed to the browser
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Exports every held record, not only the ones on screen
pub fn build_export(
    records: &[AttendanceRecordDto],
    classes: &[ClassGroupDto],
    today: NaiveDate,
) -> Result<ExportFile, Error> {
    let rows = export_rows(records, classes);
    let bytes = write_workbook(&rows)?;

    Ok(ExportFile {
        filename: export_filename(today),
        bytes,
    })
}

/// Notice for a finished export; a failed workbook or download is an error
pub fn export_notice(result: &Result<(), Error>) -> (NoticeKind, &'static str) {
    match result {
        Ok(()) => (NoticeKind::Success, EXPORT_SUCCEEDED),
        Err(_) => (NoticeKind::Error, EXPORT_FAILED),
    }
}
