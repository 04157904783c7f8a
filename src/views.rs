//! Read-only queries backing the dashboard screens: citizen tracking list,
//! provider route planning, community reviews. All pure functions over a
//! complaint slice; none of them mutate or cache.

use crate::models::{Complaint, ComplaintCategory, ComplaintPriority, ComplaintStatus};

/// Tracking-list filter: free-text search over title and description
/// (case-insensitive) combined with optional status and category filters.
pub fn filter_complaints(
    complaints: &[Complaint],
    search_term: &str,
    status: Option<ComplaintStatus>,
    category: Option<ComplaintCategory>,
) -> Vec<Complaint> {
    let term = search_term.to_lowercase();

    complaints
        .iter()
        .filter(|c| {
            let matches_search = term.is_empty()
                || c.title.to_lowercase().contains(&term)
                || c.description.to_lowercase().contains(&term);
            let matches_status = status.map_or(true, |s| c.status == s);
            let matches_category = category.map_or(true, |cat| c.category == cat);

            matches_search && matches_status && matches_category
        })
        .cloned()
        .collect()
}

fn priority_rank(priority: ComplaintPriority) -> u8 {
    match priority {
        ComplaintPriority::Critical => 0,
        ComplaintPriority::High => 1,
        ComplaintPriority::Medium => 2,
        ComplaintPriority::Low => 3,
    }
}

/// A provider's open workload for route planning: complaints assigned to them
/// and not yet resolved, emergencies first, then by priority, then newest.
pub fn provider_workload(complaints: &[Complaint], provider_id: &str) -> Vec<Complaint> {
    let mut workload: Vec<Complaint> = complaints
        .iter()
        .filter(|c| {
            c.assigned_to.as_deref() == Some(provider_id)
                && c.status != ComplaintStatus::Resolved
        })
        .cloned()
        .collect();

    workload.sort_by(|a, b| {
        b.is_emergency
            .cmp(&a.is_emergency)
            .then(priority_rank(a.priority).cmp(&priority_rank(b.priority)))
            .then(b.created_at.cmp(&a.created_at))
    });

    workload
}

pub fn emergency_count(complaints: &[Complaint]) -> usize {
    complaints.iter().filter(|c| c.is_emergency).count()
}

/// Resolved complaints carrying a rating, newest first. These feed the
/// community reviews screen.
pub fn rated_complaints(complaints: &[Complaint]) -> Vec<Complaint> {
    let mut rated: Vec<Complaint> = complaints
        .iter()
        .filter(|c| c.status == ComplaintStatus::Resolved && c.rating.is_some())
        .cloned()
        .collect();

    rated.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    rated
}

/// A citizen's complaints eligible for a review: their own, resolved, and not
/// yet rated.
pub fn reviewable_complaints(complaints: &[Complaint], user_id: &str) -> Vec<Complaint> {
    complaints
        .iter()
        .filter(|c| {
            c.submitted_by == user_id
                && c.status == ComplaintStatus::Resolved
                && c.rating.is_none()
        })
        .cloned()
        .collect()
}

/// Most recent complaints of a submitter, newest first, capped at `limit`.
pub fn recent_complaints(complaints: &[Complaint], user_id: &str, limit: usize) -> Vec<Complaint> {
    let mut own: Vec<Complaint> = complaints
        .iter()
        .filter(|c| c.submitted_by == user_id)
        .cloned()
        .collect();

    own.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    own.truncate(limit);
    own
}
