use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a collaborator holds on a project. Stored lowercase; display
/// capitalization happens in the report builder only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Consultant,
    Client,
    Target,
}

impl Role {
    /// Returns the stored lowercase form of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Consultant => "consultant",
            Role::Client => "client",
            Role::Target => "target",
        }
    }
}

/// Core project record. Root of the export tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Resolved project collaborator as it appears in the team roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
}

/// Named group of questions. Question order is the input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A single due-diligence question. An empty response list is a valid state
/// (unanswered question) and still produces report output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub question_text: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub responses: Vec<ResponseRecord>,
}

/// Collaborator answer to a question, with its attachments and comment
/// thread in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub id: Uuid,
    #[serde(default)]
    pub response_text: Option<String>,
    #[serde(default)]
    pub respondent_email: Option<String>,
    #[serde(default)]
    pub attachments: Vec<AttachmentRecord>,
    #[serde(default)]
    pub comments: Vec<CommentRecord>,
}

/// File attached to a response. Only the display name reaches the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentRecord {
    pub file_name: String,
}

/// Threaded comment on a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    #[serde(default)]
    pub author_email: Option<String>,
    pub content: String,
}

/// Fully assembled export tree handed over by the data assembler. The tree is
/// read-only for the duration of one report build and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectExport {
    pub project: ProjectRecord,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub categories: Vec<Category>,
}
