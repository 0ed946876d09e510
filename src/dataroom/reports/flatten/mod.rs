use crate::dataroom::reports::error::{ExportError, Result};
use crate::dataroom::reports::model::{
    AttachmentRecord, Category, CommentRecord, ProjectExport, ProjectRecord, TeamMember,
};

/// Sheet name holding the project summary rows.
pub const OVERVIEW_SHEET: &str = "Project Overview";
/// Sheet name holding the team roster.
pub const TEAM_SHEET: &str = "Team Members";
/// Sheet name holding the flattened question/response rows.
pub const QUESTIONNAIRE_SHEET: &str = "Questionnaire";

/// Label rendered for comments whose author could not be resolved.
pub const UNKNOWN_AUTHOR: &str = "User";

const ATTACHMENT_SEPARATOR: &str = ", ";
const COMMENT_SEPARATOR: &str = "\n";

const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// A named column with its rendering width hint. The column order of these
/// slices is the left-to-right order of the emitted sheets; the flattening
/// functions and the workbook encoder both consume the same slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    pub header: &'static str,
    pub width: f64,
}

pub const OVERVIEW_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { header: "Property", width: 20.0 },
    ColumnSpec { header: "Value", width: 60.0 },
];

pub const TEAM_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { header: "Email", width: 40.0 },
    ColumnSpec { header: "Role", width: 20.0 },
];

pub const QUESTIONNAIRE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { header: "Category", width: 20.0 },
    ColumnSpec { header: "Question", width: 40.0 },
    ColumnSpec { header: "Description", width: 40.0 },
    ColumnSpec { header: "Response", width: 40.0 },
    ColumnSpec { header: "Respondent", width: 30.0 },
    ColumnSpec { header: "Attachments", width: 30.0 },
    ColumnSpec { header: "Comments", width: 40.0 },
];

/// A table that will be materialised as one worksheet. Rows hold display
/// strings in the column order of `columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub sheet_name: &'static str,
    pub columns: &'static [ColumnSpec],
    pub rows: Vec<Vec<String>>,
}

/// The in-memory report document: three sheets in their fixed workbook order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub sheets: Vec<SheetTable>,
}

/// Flattens an assembled project tree into the report document. Pure function
/// of its input; required project fields are checked before any sheet is
/// built, and any failure aborts the whole build.
pub fn build_report(export: &ProjectExport) -> Result<ReportDocument> {
    validate_project(&export.project)?;

    Ok(ReportDocument {
        sheets: vec![
            SheetTable {
                sheet_name: OVERVIEW_SHEET,
                columns: OVERVIEW_COLUMNS,
                rows: overview_rows(&export.project),
            },
            SheetTable {
                sheet_name: TEAM_SHEET,
                columns: TEAM_COLUMNS,
                rows: team_rows(&export.team),
            },
            SheetTable {
                sheet_name: QUESTIONNAIRE_SHEET,
                columns: QUESTIONNAIRE_COLUMNS,
                rows: questionnaire_rows(&export.categories),
            },
        ],
    })
}

fn validate_project(project: &ProjectRecord) -> Result<()> {
    if project.name.trim().is_empty() {
        return Err(ExportError::InvalidInput("name"));
    }
    if project.status.trim().is_empty() {
        return Err(ExportError::InvalidInput("status"));
    }
    Ok(())
}

fn overview_rows(project: &ProjectRecord) -> Vec<Vec<String>> {
    vec![
        vec!["Project Name".to_string(), project.name.clone()],
        vec![
            "Description".to_string(),
            display_text(project.description.as_deref()),
        ],
        vec!["Status".to_string(), project.status.clone()],
        vec![
            "Created At".to_string(),
            project.created_at.format(CREATED_AT_FORMAT).to_string(),
        ],
    ]
}

fn team_rows(team: &[TeamMember]) -> Vec<Vec<String>> {
    team.iter()
        .map(|member| {
            vec![
                member.email.clone(),
                capitalize_first(member.role.as_str()),
            ]
        })
        .collect()
}

fn questionnaire_rows(categories: &[Category]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    for category in categories {
        for question in &category.questions {
            let description = display_text(question.description.as_deref());

            if question.responses.is_empty() {
                // Unanswered questions still appear, with empty response fields.
                rows.push(vec![
                    category.name.clone(),
                    question.question_text.clone(),
                    description,
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                ]);
            } else {
                for response in &question.responses {
                    rows.push(vec![
                        category.name.clone(),
                        question.question_text.clone(),
                        description.clone(),
                        display_text(response.response_text.as_deref()),
                        display_text(response.respondent_email.as_deref()),
                        attachment_cell(&response.attachments),
                        comment_cell(&response.comments),
                    ]);
                }
            }
        }
    }

    rows
}

fn attachment_cell(attachments: &[AttachmentRecord]) -> String {
    attachments
        .iter()
        .map(|attachment| attachment.file_name.as_str())
        .collect::<Vec<_>>()
        .join(ATTACHMENT_SEPARATOR)
}

fn comment_cell(comments: &[CommentRecord]) -> String {
    comments
        .iter()
        .map(|comment| {
            format!(
                "{}: {}",
                comment.author_email.as_deref().unwrap_or(UNKNOWN_AUTHOR),
                comment.content
            )
        })
        .collect::<Vec<_>>()
        .join(COMMENT_SEPARATOR)
}

// Single fallback point for optional fields: absent values render as empty
// strings, never as a literal null marker.
fn display_text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
