use serde::Serialize;

use super::aggregate::MaintenanceRequest;
use crate::enums::RequestStatus;

/// How many requests the employee dashboard lists
pub const RECENT_LIMIT: usize = 5;

/// Counts and recent activity shown on the employee dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmployeeSummary {
    pub total: usize,
    /// Requests nobody has picked up yet (`New`)
    pub open: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Newest first, by id
    pub recent: Vec<MaintenanceRequest>,
}

impl EmployeeSummary {
    pub fn compute(requests: &[MaintenanceRequest]) -> Self {
        let count = |status: RequestStatus| requests.iter().filter(|r| r.status == status).count();

        let mut recent: Vec<MaintenanceRequest> = requests.to_vec();
        recent.sort_by(|a, b| b.id.cmp(&a.id));
        recent.truncate(RECENT_LIMIT);

        Self {
            total: requests.len(),
            open: count(RequestStatus::New),
            in_progress: count(RequestStatus::InProgress),
            completed: count(RequestStatus::Completed),
            recent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(id: i64, status: &str) -> MaintenanceRequest {
        serde_json::from_value(serde_json::json!({"id": id, "status": status})).unwrap()
    }

    #[test]
    fn test_counts_and_recent_order() {
        let requests = vec![
            req(3, "New"),
            req(7, "In Progress"),
            req(1, "Completed"),
            req(9, "New"),
            req(4, "Rejected"),
            req(2, "Accepted"),
            req(8, "Completed"),
        ];
        let summary = EmployeeSummary::compute(&requests);
        assert_eq!(summary.total, 7);
        assert_eq!(summary.open, 2);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.completed, 2);
        let ids: Vec<i64> = summary.recent.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![9, 8, 7, 4, 3]);
    }

    #[test]
    fn test_empty() {
        let summary = EmployeeSummary::compute(&[]);
        assert_eq!(summary, EmployeeSummary::default());
    }
}
