use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintCategory {
    Electricity,
    Water,
    Roads,
    Sanitation,
    StreetLights,
    Drainage,
    PublicTransport,
    Other,
}

/// Lifecycle pipeline, strictly ordered. `Unknown` absorbs any status value the
/// server sends that is outside the pipeline, so one bad record cannot fail the
/// whole collection fetch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Submitted,
    UnderReview,
    InProgress,
    Resolved,
    #[serde(other)]
    Unknown,
}

impl Default for ComplaintStatus {
    fn default() -> Self {
        Self::Submitted
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl Default for ComplaintPriority {
    fn default() -> Self {
        Self::Medium
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Image,
    Video,
    Document,
}

impl AttachmentKind {
    pub fn from_mime(content_type: &str) -> Self {
        if content_type.starts_with("image/") {
            Self::Image
        } else if content_type.starts_with("video/") {
            Self::Video
        } else {
            Self::Document
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attachment {
    pub id: String,
    pub filename: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: AttachmentKind,
    pub size: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    StatusChange,
    ProgressUpdate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintUpdate {
    pub id: String,
    pub message: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: UpdateKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub region: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ComplaintCategory,
    #[serde(default)]
    pub is_emergency: bool,
    #[serde(default)]
    pub location: Location,
    #[serde(deserialize_with = "deserialize_user_ref")]
    pub submitted_by: String,
    #[serde(default, deserialize_with = "deserialize_opt_user_ref")]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub status: ComplaintStatus,
    #[serde(default)]
    pub priority: ComplaintPriority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub updates: Vec<ComplaintUpdate>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// Submission payload. The server assigns `id`, timestamps and the empty
/// `updates` collection.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintDraft {
    pub title: String,
    pub description: String,
    pub category: ComplaintCategory,
    pub is_emergency: bool,
    pub location: Location,
    pub priority: ComplaintPriority,
}

/// The server returns `submittedBy`/`assignedTo` either as a bare id string or
/// as an embedded user object. Normalization to the bare id happens here, at
/// the boundary, so the rest of the crate only ever sees identifier strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum UserRef {
    Id(String),
    Embedded {
        #[serde(rename = "_id")]
        id: String,
    },
}

impl UserRef {
    fn into_id(self) -> String {
        match self {
            UserRef::Id(id) => id,
            UserRef::Embedded { id } => id,
        }
    }
}

fn deserialize_user_ref<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    UserRef::deserialize(deserializer).map(UserRef::into_id)
}

fn deserialize_opt_user_ref<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<UserRef>::deserialize(deserializer).map(|r| r.map(UserRef::into_id))
}
