use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use crate::models::{Complaint, ComplaintCategory, ComplaintStatus};

/// Aggregates derived from the current "all" collection. Never stored;
/// recomputed from the collection on demand.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_complaints: usize,
    pub resolved_complaints: usize,
    /// Mean `created_at` to `resolved_at` delta in days, None until something
    /// has been resolved.
    pub average_resolution_time_days: Option<f64>,
    pub complaints_by_category: BTreeMap<ComplaintCategory, usize>,
    pub complaints_by_status: BTreeMap<ComplaintStatus, usize>,
    pub monthly_trends: Vec<MonthlyTrend>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    /// `YYYY-MM` of `created_at`.
    pub month: String,
    pub total: usize,
    pub resolved: usize,
}

pub fn compute_analytics(complaints: &[Complaint]) -> Analytics {
    let mut by_category: BTreeMap<ComplaintCategory, usize> = BTreeMap::new();
    let mut by_status: BTreeMap<ComplaintStatus, usize> = BTreeMap::new();
    let mut by_month: BTreeMap<String, (usize, usize)> = BTreeMap::new();
    let mut resolved = 0usize;
    let mut resolution_days_sum = 0f64;
    let mut resolution_count = 0usize;

    for complaint in complaints {
        *by_category.entry(complaint.category).or_default() += 1;
        *by_status.entry(complaint.status).or_default() += 1;

        let month = format!(
            "{:04}-{:02}",
            complaint.created_at.year(),
            complaint.created_at.month()
        );
        let bucket = by_month.entry(month).or_default();
        bucket.0 += 1;

        if complaint.status == ComplaintStatus::Resolved {
            resolved += 1;
            bucket.1 += 1;

            if let Some(resolved_at) = complaint.resolved_at {
                let delta = resolved_at - complaint.created_at;
                resolution_days_sum += delta.num_seconds() as f64 / 86_400.0;
                resolution_count += 1;
            }
        }
    }

    let average_resolution_time_days = if resolution_count > 0 {
        Some(resolution_days_sum / resolution_count as f64)
    } else {
        None
    };

    Analytics {
        total_complaints: complaints.len(),
        resolved_complaints: resolved,
        average_resolution_time_days,
        complaints_by_category: by_category,
        complaints_by_status: by_status,
        monthly_trends: by_month
            .into_iter()
            .map(|(month, (total, resolved))| MonthlyTrend {
                month,
                total,
                resolved,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComplaintPriority, Location};

    fn complaint(
        id: &str,
        category: ComplaintCategory,
        status: ComplaintStatus,
        created: &str,
        resolved_after_days: Option<i64>,
    ) -> Complaint {
        let created_at = created.parse().unwrap();
        Complaint {
            id: id.to_string(),
            title: format!("complaint {}", id),
            description: String::new(),
            category,
            is_emergency: false,
            location: Location::default(),
            submitted_by: "user-1".to_string(),
            assigned_to: None,
            status,
            priority: ComplaintPriority::Medium,
            created_at,
            updated_at: created_at,
            resolved_at: resolved_after_days
                .map(|days| created_at + chrono::Duration::days(days)),
            rating: None,
            feedback: None,
            updates: vec![],
            attachments: vec![],
        }
    }

    #[test]
    fn test_counts_and_groupings() {
        let complaints = vec![
            complaint("c1", ComplaintCategory::Roads, ComplaintStatus::Submitted, "2025-01-05T10:00:00Z", None),
            complaint("c2", ComplaintCategory::Roads, ComplaintStatus::Resolved, "2025-01-12T10:00:00Z", Some(2)),
            complaint("c3", ComplaintCategory::Water, ComplaintStatus::InProgress, "2025-02-01T10:00:00Z", None),
        ];

        let analytics = compute_analytics(&complaints);

        assert_eq!(analytics.total_complaints, 3);
        assert_eq!(analytics.resolved_complaints, 1);
        assert_eq!(analytics.complaints_by_category[&ComplaintCategory::Roads], 2);
        assert_eq!(analytics.complaints_by_category[&ComplaintCategory::Water], 1);
        assert_eq!(analytics.complaints_by_status[&ComplaintStatus::Resolved], 1);
        assert_eq!(analytics.complaints_by_status[&ComplaintStatus::Submitted], 1);
    }

    #[test]
    fn test_average_resolution_time() {
        let complaints = vec![
            complaint("c1", ComplaintCategory::Roads, ComplaintStatus::Resolved, "2025-01-05T10:00:00Z", Some(2)),
            complaint("c2", ComplaintCategory::Water, ComplaintStatus::Resolved, "2025-01-08T10:00:00Z", Some(4)),
        ];

        let analytics = compute_analytics(&complaints);
        assert_eq!(analytics.average_resolution_time_days, Some(3.0));
    }

    #[test]
    fn test_no_resolved_means_no_average() {
        let complaints = vec![complaint(
            "c1",
            ComplaintCategory::Roads,
            ComplaintStatus::Submitted,
            "2025-01-05T10:00:00Z",
            None,
        )];

        assert_eq!(compute_analytics(&complaints).average_resolution_time_days, None);
    }

    #[test]
    fn test_monthly_trends_buckets() {
        let complaints = vec![
            complaint("c1", ComplaintCategory::Roads, ComplaintStatus::Submitted, "2025-01-05T10:00:00Z", None),
            complaint("c2", ComplaintCategory::Roads, ComplaintStatus::Resolved, "2025-01-20T10:00:00Z", Some(1)),
            complaint("c3", ComplaintCategory::Water, ComplaintStatus::Submitted, "2025-03-01T10:00:00Z", None),
        ];

        let trends = compute_analytics(&complaints).monthly_trends;

        assert_eq!(trends.len(), 2);
        assert_eq!(trends[0].month, "2025-01");
        assert_eq!(trends[0].total, 2);
        assert_eq!(trends[0].resolved, 1);
        assert_eq!(trends[1].month, "2025-03");
        assert_eq!(trends[1].total, 1);
        assert_eq!(trends[1].resolved, 0);
    }

    #[test]
    fn test_empty_collection() {
        let analytics = compute_analytics(&[]);
        assert_eq!(analytics.total_complaints, 0);
        assert_eq!(analytics.resolved_complaints, 0);
        assert!(analytics.monthly_trends.is_empty());
        assert!(analytics.complaints_by_category.is_empty());
    }
}
