//! Spreadsheet adapters: the HR-wide report writer and the strict bulk
//! personnel import parser.

use std::collections::HashMap;
use std::io::Cursor;

use anyhow::{Context, anyhow, bail};
use calamine::{Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;

use crate::model::role::Role;

/// Required header set for a personnel import sheet, matching the template
/// the HR staff already fills in.
pub const PERSONNEL_HEADERS: [&str; 9] = [
    "Sicil",
    "Ad Soyad",
    "Sifre",
    "Meslek",
    "Departman",
    "Email",
    "Onayci_Email",
    "Rol",
    "Cep_Telefonu",
];

/// One validated import row. Empty optional cells come through as `None`.
#[derive(Debug, PartialEq)]
pub struct PersonnelRow {
    pub registration_no: Option<String>,
    pub full_name: String,
    pub password: String,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub approver_email: Option<String>,
    pub role: Role,
    pub phone: Option<String>,
}

/// Writes a single-sheet workbook of headers + rows, returned as bytes.
pub fn write_sheet(
    sheet_name: &str,
    headers: &[&str],
    rows: &[Vec<String>],
) -> anyhow::Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (row_idx, row) in rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            worksheet.write_string(row_idx as u32 + 1, col as u16, cell)?;
        }
    }

    let bytes = workbook.save_to_buffer()?;
    Ok(bytes)
}

/// Parses and validates a whole personnel sheet before anything is written
/// to storage. Any missing header or malformed row fails the entire batch.
pub fn parse_personnel_sheet(bytes: &[u8]) -> anyhow::Result<Vec<PersonnelRow>> {
    let mut workbook: Xlsx<_> =
        Xlsx::new(Cursor::new(bytes.to_vec())).context("file is not a readable xlsx workbook")?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("workbook has no sheets"))?
        .context("first sheet is unreadable")?;

    let mut rows = range.rows();
    let header_row = rows.next().ok_or_else(|| anyhow!("sheet is empty"))?;

    let positions: HashMap<String, usize> = header_row
        .iter()
        .enumerate()
        .map(|(idx, cell)| (cell_text(cell), idx))
        .collect();

    let mut columns = [0usize; PERSONNEL_HEADERS.len()];
    for (slot, header) in PERSONNEL_HEADERS.iter().enumerate() {
        columns[slot] = *positions
            .get(*header)
            .ok_or_else(|| anyhow!("missing required column: {header}"))?;
    }

    let mut parsed = Vec::new();
    for (idx, row) in rows.enumerate() {
        let line = idx + 2; // 1-based, after the header row
        let cell = |slot: usize| -> Option<String> {
            let text = row.get(columns[slot]).map(cell_text).unwrap_or_default();
            if text.is_empty() { None } else { Some(text) }
        };

        // Blank spacer rows at the bottom of hand-edited sheets are skipped.
        if row.iter().all(|c| cell_text(c).is_empty()) {
            continue;
        }

        let full_name = cell(1).ok_or_else(|| anyhow!("row {line}: Ad Soyad is empty"))?;
        let password = cell(2).ok_or_else(|| anyhow!("row {line}: Sifre is empty"))?;
        let role_text = cell(7).ok_or_else(|| anyhow!("row {line}: Rol is empty"))?;
        let role = role_text
            .parse::<Role>()
            .map_err(|_| anyhow!("row {line}: unknown Rol value: {role_text}"))?;

        parsed.push(PersonnelRow {
            registration_no: cell(0),
            full_name,
            password,
            job_title: cell(3),
            department: cell(4),
            email: cell(5),
            approver_email: cell(6),
            role,
            phone: cell(8),
        });
    }

    if parsed.is_empty() {
        bail!("sheet contains no personnel rows");
    }

    Ok(parsed)
}

/// Text form of a cell; numeric registration ids and phone numbers come out
/// of Excel as floats and are rendered without the trailing `.0`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(headers: &[&str], rows: &[Vec<String>]) -> Vec<u8> {
        write_sheet("Sayfa1", headers, rows).unwrap()
    }

    fn sample_rows() -> Vec<Vec<String>> {
        vec![
            vec![
                "1042".into(),
                "Ayşe Yılmaz".into(),
                "gizli".into(),
                "Uzman".into(),
                "Bordro".into(),
                "ayse@company.com".into(),
                "mehmet@company.com".into(),
                "Personel".into(),
                "+905551234567".into(),
            ],
            vec![
                "1001".into(),
                "Mehmet Kaya".into(),
                "gizli2".into(),
                "Müdür".into(),
                "Bordro".into(),
                "mehmet@company.com".into(),
                "".into(),
                "Yönetici".into(),
                "".into(),
            ],
        ]
    }

    #[test]
    fn write_sheet_produces_a_zip_container() {
        let bytes = sheet(&PERSONNEL_HEADERS, &sample_rows());
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn well_formed_rows_all_parse() {
        let bytes = sheet(&PERSONNEL_HEADERS, &sample_rows());
        let rows = parse_personnel_sheet(&bytes).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].full_name, "Ayşe Yılmaz");
        assert_eq!(rows[0].role, Role::Personnel);
        assert_eq!(rows[1].role, Role::Manager);
        assert_eq!(rows[1].approver_email, None);
        assert_eq!(rows[1].phone, None);
    }

    #[test]
    fn missing_header_aborts_the_batch() {
        let headers: Vec<&str> = PERSONNEL_HEADERS
            .iter()
            .copied()
            .filter(|h| *h != "Rol")
            .collect();
        let rows: Vec<Vec<String>> = sample_rows()
            .into_iter()
            .map(|mut r| {
                r.remove(7);
                r
            })
            .collect();
        let err = parse_personnel_sheet(&sheet(&headers, &rows)).unwrap_err();
        assert!(err.to_string().contains("Rol"));
    }

    #[test]
    fn malformed_row_aborts_with_its_line_number() {
        let mut rows = sample_rows();
        rows[1][1] = String::new(); // second data row loses its name
        let err = parse_personnel_sheet(&sheet(&PERSONNEL_HEADERS, &rows)).unwrap_err();
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn unknown_role_aborts() {
        let mut rows = sample_rows();
        rows[0][7] = "Stajyer".into();
        let err = parse_personnel_sheet(&sheet(&PERSONNEL_HEADERS, &rows)).unwrap_err();
        assert!(err.to_string().contains("Rol"));
    }

    #[test]
    fn header_order_does_not_matter() {
        let headers = [
            "Ad Soyad",
            "Sicil",
            "Sifre",
            "Rol",
            "Meslek",
            "Departman",
            "Email",
            "Onayci_Email",
            "Cep_Telefonu",
        ];
        let rows = vec![vec![
            "Ayşe Yılmaz".into(),
            "1042".into(),
            "gizli".into(),
            "İK".into(),
            "".into(),
            "".into(),
            "".into(),
            "".into(),
            "".into(),
        ]];
        let parsed = parse_personnel_sheet(&sheet(&headers, &rows)).unwrap();
        assert_eq!(parsed[0].registration_no.as_deref(), Some("1042"));
        assert_eq!(parsed[0].role, Role::Hr);
    }
}
