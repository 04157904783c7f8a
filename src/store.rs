use chrono::Utc;
use uuid::Uuid;

use crate::analytics::{compute_analytics, Analytics};
use crate::error::ClientResult;
use crate::models::{
    Attachment, AttachmentKind, Complaint, ComplaintCategory, ComplaintDraft, ComplaintStatus,
    ComplaintUpdate, UpdateKind,
};
use crate::services::api_client::{ComplaintBackend, UploadFile};
use crate::session::SessionStore;

/// Single source of truth for complaint data visible to the current session.
/// Holds two independently fetched projections of the server-side dataset
/// ("all" and "mine"), each replaced wholesale on refresh, and mediates every
/// read and write between the UI and the backend.
///
/// Generic over the backend so each test (or screen) instantiates its own
/// isolated store instead of sharing ambient global state.
pub struct ComplaintStore<B> {
    backend: B,
    sessions: SessionStore,
    complaints: Vec<Complaint>,
    my_complaints: Vec<Complaint>,
}

impl<B: ComplaintBackend> ComplaintStore<B> {
    pub fn new(backend: B, sessions: SessionStore) -> Self {
        Self {
            backend,
            sessions,
            complaints: Vec::new(),
            my_complaints: Vec::new(),
        }
    }

    pub fn complaints(&self) -> &[Complaint] {
        &self.complaints
    }

    pub fn my_complaints(&self) -> &[Complaint] {
        &self.my_complaints
    }

    pub fn analytics(&self) -> Analytics {
        compute_analytics(&self.complaints)
    }

    /// Replaces the "all" collection with a fresh fetch. On failure the
    /// previous collection is retained and the error is returned; callers
    /// decide whether to surface it or keep rendering stale data.
    pub async fn refresh_all(&mut self) -> ClientResult<()> {
        match self.backend.list_complaints().await {
            Ok(complaints) => {
                self.complaints = complaints;
                Ok(())
            }
            Err(e) => {
                tracing::error!("failed to fetch complaints: {}", e);
                Err(e)
            }
        }
    }

    /// Same contract as [`refresh_all`](Self::refresh_all) for the "mine"
    /// collection. Requires a persisted session.
    pub async fn refresh_mine(&mut self) -> ClientResult<()> {
        let token = self.sessions.bearer_token()?;

        match self.backend.list_my_complaints(&token).await {
            Ok(complaints) => {
                self.my_complaints = complaints;
                Ok(())
            }
            Err(e) => {
                tracing::error!("failed to fetch my complaints: {}", e);
                Err(e)
            }
        }
    }

    /// Initial load on mount: both collections.
    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.refresh_all().await?;
        self.refresh_mine().await
    }

    /// Submits a new complaint. The server assigns id and timestamps; on
    /// success both collections are refetched rather than patched optimistically.
    pub async fn submit_complaint(&mut self, draft: ComplaintDraft) -> ClientResult<()> {
        let token = self.sessions.bearer_token()?;

        self.backend.create_complaint(&token, &draft).await?;
        tracing::info!("submitted complaint \"{}\"", draft.title);

        self.refresh_all().await?;
        self.refresh_mine().await?;

        Ok(())
    }

    /// Local-only status patch: sets the status, bumps `updated_at`, sets
    /// `resolved_at` on transition into resolved, and appends a system-authored
    /// status-change update when a message is given. An unknown id is a no-op.
    ///
    /// The backend contract has no endpoint to persist this, so the patch is
    /// discarded by the next refresh.
    pub fn update_complaint_status(
        &mut self,
        id: &str,
        status: ComplaintStatus,
        message: Option<&str>,
    ) {
        let now = Utc::now();

        if let Some(complaint) = self.complaints.iter_mut().find(|c| c.id == id) {
            complaint.status = status;
            complaint.updated_at = now;
            if status == ComplaintStatus::Resolved {
                complaint.resolved_at = Some(now);
            }

            if let Some(message) = message {
                complaint.updates.push(ComplaintUpdate {
                    id: format!("update-{}", Uuid::new_v4()),
                    message: message.to_string(),
                    created_by: "system".to_string(),
                    created_at: now,
                    kind: UpdateKind::StatusChange,
                    attachments: None,
                });
            }
        }
    }

    /// Appends a provider progress update, uploading any attachments first.
    ///
    /// Two-phase: every file is staged through a sequential upload, and the
    /// first failure aborts the whole operation with the complaint unmodified —
    /// no update carrying a partial attachment list is ever appended. Files
    /// uploaded before the failure stay orphaned on the server.
    ///
    /// The appended update itself is local-only, like
    /// [`update_complaint_status`](Self::update_complaint_status).
    pub async fn add_complaint_update(
        &mut self,
        id: &str,
        message: &str,
        files: Vec<UploadFile>,
    ) -> ClientResult<()> {
        let attachments = self.stage_attachments(&files).await?;
        let now = Utc::now();

        if let Some(complaint) = self.complaints.iter_mut().find(|c| c.id == id) {
            complaint.updated_at = now;
            complaint.updates.push(ComplaintUpdate {
                id: format!("update-{}", Uuid::new_v4()),
                message: message.to_string(),
                created_by: "provider".to_string(),
                created_at: now,
                kind: UpdateKind::ProgressUpdate,
                attachments: Some(attachments),
            });
        }

        Ok(())
    }

    /// Phase one of an update-with-attachments: upload every file, one at a
    /// time, and classify each by MIME prefix. All-or-nothing by construction.
    async fn stage_attachments(&self, files: &[UploadFile]) -> ClientResult<Vec<Attachment>> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let token = self.sessions.bearer_token()?;
        let mut staged = Vec::with_capacity(files.len());

        for file in files {
            let url = self.backend.upload_file(&token, file).await?;
            staged.push(Attachment {
                id: format!("attachment-{}", Uuid::new_v4()),
                filename: file.filename.clone(),
                url,
                kind: AttachmentKind::from_mime(&file.content_type),
                size: file.bytes.len() as u64,
            });
        }

        Ok(staged)
    }

    /// Pure filter over the "all" collection, order preserved.
    pub fn complaints_by_submitter(&self, user_id: &str) -> Vec<Complaint> {
        self.complaints
            .iter()
            .filter(|c| c.submitted_by == user_id)
            .cloned()
            .collect()
    }

    /// Pure filter over the "all" collection, order preserved.
    pub fn complaints_by_category(&self, category: ComplaintCategory) -> Vec<Complaint> {
        self.complaints
            .iter()
            .filter(|c| c.category == category)
            .cloned()
            .collect()
    }

    /// Local-only rating patch: last write wins, no merge, no range validation
    /// at this layer. Discarded by the next refresh, like the other local
    /// patches.
    pub fn rate_complaint(&mut self, id: &str, rating: u8, feedback: Option<String>) {
        if let Some(complaint) = self.complaints.iter_mut().find(|c| c.id == id) {
            complaint.rating = Some(rating);
            complaint.feedback = feedback;
            complaint.updated_at = Utc::now();
        }
    }
}
