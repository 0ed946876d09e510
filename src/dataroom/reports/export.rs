use std::fs;
use std::path::Path;

use tracing::{debug, info, instrument};

use crate::dataroom::reports::error::Result;
use crate::dataroom::reports::flatten::build_report;
use crate::dataroom::reports::io::excel_write::{self, XLSX_CONTENT_TYPE};
use crate::dataroom::reports::io::json;
use crate::dataroom::reports::model::ProjectExport;

/// Encoded report together with the MIME type the download layer should
/// attach to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPayload {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Builds and encodes the report for a fully assembled project tree.
#[instrument(level = "info", skip_all, fields(project = %export.project.name))]
pub fn build_payload(export: &ProjectExport) -> Result<ReportPayload> {
    let document = build_report(export)?;
    debug!(
        sheet_count = document.sheets.len(),
        "report document constructed"
    );
    let bytes = excel_write::encode_workbook(&document)?;
    info!(byte_count = bytes.len(), "report encoded");
    Ok(ReportPayload {
        bytes,
        content_type: XLSX_CONTENT_TYPE,
    })
}

/// Exports an assembled project tree stored as JSON into an Excel workbook
/// on disk.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %input.display(), output = %output.display())
)]
pub fn json_to_excel(input: &Path, output: &Path) -> Result<()> {
    let export = json::load_project(input)?;
    info!(
        category_count = export.categories.len(),
        member_count = export.team.len(),
        "assembled project tree loaded"
    );
    let payload = build_payload(&export)?;
    fs::write(output, payload.bytes)?;
    Ok(())
}
