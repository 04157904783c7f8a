use crate::models::ComplaintStatus;

/// Fixed lifecycle pipeline used for progress and timeline rendering.
pub const STATUS_PIPELINE: [ComplaintStatus; 4] = [
    ComplaintStatus::Submitted,
    ComplaintStatus::UnderReview,
    ComplaintStatus::InProgress,
    ComplaintStatus::Resolved,
];

#[derive(Debug, Clone, PartialEq)]
pub struct StatusStep {
    pub status: ComplaintStatus,
    pub label: &'static str,
    pub completed: bool,
    pub current: bool,
}

fn pipeline_index(status: ComplaintStatus) -> Option<usize> {
    STATUS_PIPELINE.iter().position(|s| *s == status)
}

fn step_label(status: ComplaintStatus) -> &'static str {
    match status {
        ComplaintStatus::Submitted => "Submitted",
        ComplaintStatus::UnderReview => "Under Review",
        ComplaintStatus::InProgress => "In Progress",
        ComplaintStatus::Resolved => "Resolved",
        ComplaintStatus::Unknown => "Unknown",
    }
}

/// Progress fraction `(index + 1) / 4` through the pipeline: submitted is 0.25,
/// resolved is 1.0. A status outside the pipeline yields 0.0.
pub fn status_progress(status: ComplaintStatus) -> f64 {
    match pipeline_index(status) {
        Some(index) => (index + 1) as f64 / STATUS_PIPELINE.len() as f64,
        None => 0.0,
    }
}

/// Timeline descriptors for the four pipeline steps. For a status outside the
/// pipeline no step is flagged completed or current.
pub fn status_steps(status: ComplaintStatus) -> Vec<StatusStep> {
    let current_index = pipeline_index(status);

    STATUS_PIPELINE
        .iter()
        .enumerate()
        .map(|(index, step)| StatusStep {
            status: *step,
            label: step_label(*step),
            completed: current_index.is_some_and(|current| index <= current),
            current: current_index == Some(index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_fractions() {
        assert_eq!(status_progress(ComplaintStatus::Submitted), 0.25);
        assert_eq!(status_progress(ComplaintStatus::UnderReview), 0.5);
        assert_eq!(status_progress(ComplaintStatus::InProgress), 0.75);
        assert_eq!(status_progress(ComplaintStatus::Resolved), 1.0);
    }

    #[test]
    fn test_unknown_status_degrades() {
        assert_eq!(status_progress(ComplaintStatus::Unknown), 0.0);

        let steps = status_steps(ComplaintStatus::Unknown);
        assert_eq!(steps.len(), 4);
        assert!(steps.iter().all(|s| !s.completed && !s.current));
    }

    #[test]
    fn test_steps_for_in_progress() {
        let steps = status_steps(ComplaintStatus::InProgress);

        assert!(steps[0].completed && !steps[0].current);
        assert!(steps[1].completed && !steps[1].current);
        assert!(steps[2].completed && steps[2].current);
        assert!(!steps[3].completed && !steps[3].current);
    }

    #[test]
    fn test_resolved_is_final_step() {
        let steps = status_steps(ComplaintStatus::Resolved);
        assert!(steps.iter().all(|s| s.completed));
        assert!(steps[3].current);
    }
}
