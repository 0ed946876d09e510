use rust_xlsxwriter::{Format, FormatBorder, Workbook};

use crate::dataroom::reports::error::Result;
use crate::dataroom::reports::flatten::ReportDocument;

/// MIME type identifying the encoded payload as an Office Open XML
/// spreadsheet. Handed to the download layer together with the bytes.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const HEADER_FILL: u32 = 0xE0E0E0;

/// Encodes the report document into an in-memory workbook payload.
///
/// Presentation rules are applied here, uniformly for every sheet: the header
/// row is bold on a light-gray fill, every cell carries a thin border, and
/// column widths come from the sheet schema. Rows whose data cells are all
/// empty are written like any other row so they pick up the same borders.
pub fn encode_workbook(document: &ReportDocument) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(HEADER_FILL)
        .set_border(FormatBorder::Thin);
    let body_format = Format::new().set_border(FormatBorder::Thin);

    for table in &document.sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(table.sheet_name)?;

        for (col_idx, column) in table.columns.iter().enumerate() {
            worksheet.set_column_width(col_idx as u16, column.width)?;
            worksheet.write_with_format(0, col_idx as u16, column.header, &header_format)?;
        }

        for (row_idx, row) in table.rows.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                worksheet.write_with_format(
                    (row_idx + 1) as u32,
                    col_idx as u16,
                    cell,
                    &body_format,
                )?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
