/// Domain models for meet-prep
///
/// These models represent core business entities and are transport-agnostic.
use serde::{Deserialize, Serialize};

/// Form inputs describing the meeting to prepare for.
///
/// Constructed once per brief request and handed to the pipeline; never
/// mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeetingRequest {
    pub company: String,
    pub objective: String,
    #[serde(default)]
    pub attendees: Vec<String>,
    pub duration_minutes: u32,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    /// Historical notes, CRM snippets, or transcript highlights
    #[serde(default)]
    pub meeting_notes: Option<String>,
    /// Attendee personas or preferences for personalization
    #[serde(default)]
    pub attendee_personas: Option<String>,
    /// Scenarios or objections the rehearsal simulation should cover
    #[serde(default)]
    pub rehearsal_focus: Option<String>,
    /// Preferred follow-up channels (email, Slack, CRM task list, ...)
    #[serde(default)]
    pub followup_channels: Option<String>,
    /// Refresh prompts with live web intelligence
    #[serde(default = "default_true")]
    pub include_live_updates: bool,
    /// Add compliance, localization, and risk insights
    #[serde(default)]
    pub include_regulatory: bool,
}

fn default_true() -> bool {
    true
}

impl MeetingRequest {
    /// Attendees rendered one per line for prompt interpolation
    pub fn attendees_text(&self) -> String {
        if self.attendees.is_empty() {
            "Not specified.".to_string()
        } else {
            self.attendees.join("\n")
        }
    }

    /// Focus areas rendered as a comma-separated list for prompts
    pub fn focus_areas_text(&self) -> String {
        if self.focus_areas.is_empty() {
            "None provided.".to_string()
        } else {
            self.focus_areas.join(", ")
        }
    }
}

/// A file uploaded alongside the meeting form, prior to extraction
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Extracted plain text for one uploaded document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentText {
    pub name: String,
    pub text: String,
}

/// A brief archived in the meeting library.
///
/// Records are immutable once saved; `id` is unique within the library file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BriefRecord {
    /// Timestamp-derived identifier assigned by the library on save
    pub id: i64,
    pub title: String,
    /// Snapshot of the form inputs that produced this brief
    pub request: MeetingRequest,
    /// Names of the supporting documents that fed the digest
    #[serde(default)]
    pub document_names: Vec<String>,
    /// The assembled brief, Markdown
    pub brief_markdown: String,
    /// Unix timestamp (seconds)
    pub created_at: i64,
}

impl BriefRecord {
    /// Creates an unsaved record (id 0 until the library assigns one)
    pub fn new(request: MeetingRequest, document_names: Vec<String>, brief_markdown: String) -> Self {
        let title = format!("{} - {}", request.company, request.objective);
        Self {
            id: 0,
            title,
            request,
            document_names,
            brief_markdown,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// One objection/response round in a practice session.
///
/// `feedback` is whatever the scoring call returned, stored verbatim; the
/// numeric score inside it is opaque to this application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeExchange {
    pub objection: String,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
    pub created_at: i64,
}

impl PracticeExchange {
    pub fn new(objection: String) -> Self {
        Self {
            objection,
            response: None,
            feedback: None,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// True until a response has been scored
    pub fn is_open(&self) -> bool {
        self.feedback.is_none()
    }
}
