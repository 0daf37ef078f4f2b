//! Drives a job through its lifecycle on the server.
//!
//! One action is one mutating call followed by a full reload of the job
//! feed. Nothing is changed locally before the server answers.

use contracts::domain::a004_maintenance_request::{
    actions_for, ActionKind, ClaimJobDto, LifecycleAction, MaintenanceRequest, TransitionError,
    UpdateJobDto,
};

use super::api;
use crate::shared::api::{ApiClient, ApiError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LifecycleError {
    #[error(transparent)]
    NotPermitted(#[from] TransitionError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl LifecycleError {
    pub fn user_message(&self) -> String {
        match self {
            LifecycleError::NotPermitted(e) => e.to_string(),
            LifecycleError::Api(e) => e.user_message(),
        }
    }
}

pub struct LifecycleController {
    client: ApiClient,
    technician: String,
}

impl LifecycleController {
    /// `technician` is the name sent with accept/reject.
    pub fn new(client: ApiClient, technician: impl Into<String>) -> Self {
        Self {
            client,
            technician: technician.into(),
        }
    }

    pub fn technician(&self) -> &str {
        &self.technician
    }

    /// Apply `action` to `job` and return the reloaded job list.
    pub async fn perform(
        &self,
        job: &MaintenanceRequest,
        action: LifecycleAction,
    ) -> Result<Vec<MaintenanceRequest>, LifecycleError> {
        if !actions_for(job.status).contains(&action) {
            return Err(TransitionError::NotPermitted {
                from: job.status,
                action,
            }
            .into());
        }
        let status = action.target();
        log::info!(
            "job #{}: {} -> {} ({:?})",
            job.id,
            job.status.display_name(),
            status.display_name(),
            action
        );

        match action.kind() {
            ActionKind::Claim => {
                let dto = ClaimJobDto {
                    status,
                    tech: self.technician.clone(),
                };
                api::claim_job(&self.client, job.id, &dto).await?;
            }
            ActionKind::ProgressUpdate => {
                let dto = UpdateJobDto {
                    status,
                    note: String::new(),
                };
                api::update_job(&self.client, job.id, &dto).await?;
            }
        }

        Ok(api::fetch_jobs(&self.client).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::ScriptedTransport;
    use crate::shared::api::{Method, RawResponse};
    use contracts::enums::RequestStatus;
    use futures::executor::block_on;
    use serde_json::{json, Value};
    use std::cell::RefCell;
    use std::rc::Rc;

    const BASE: &str = "http://localhost:5000/api";

    /// Job feed server: claim/update change the stored status, `GET /tech/jobs` lists.
    fn job_server(initial: Vec<Value>) -> Rc<ScriptedTransport> {
        let jobs = Rc::new(RefCell::new(initial));
        Rc::new(ScriptedTransport::new(move |request| {
            let mut jobs = jobs.borrow_mut();
            match (request.method, request.path.as_str()) {
                (Method::Get, "/tech/jobs") => Ok(RawResponse::json(200, &Value::Array(jobs.clone()))),
                (Method::Put, path) => {
                    let id: i64 = path.rsplit('/').next().and_then(|s| s.parse().ok()).unwrap_or(-1);
                    let body = request.body.clone().unwrap_or(Value::Null);
                    match jobs.iter_mut().find(|j| j["id"] == json!(id)) {
                        Some(job) => {
                            job["status"] = body["status"].clone();
                            if let Some(tech) = body.get("tech") {
                                job["tech"] = tech.clone();
                            }
                            Ok(RawResponse::json(200, &json!({"success": true})))
                        }
                        None => Ok(RawResponse::json(404, &json!({"error": "Job not found"}))),
                    }
                }
                _ => Ok(RawResponse::json(405, &json!({"error": "Method not allowed"}))),
            }
        }))
    }

    fn job(id: i64, status: &str) -> MaintenanceRequest {
        serde_json::from_value(json!({
            "id": id,
            "equipment": "Printer A",
            "description": "Paper jam",
            "status": status,
            "team": "IT Support"
        }))
        .unwrap()
    }

    #[test]
    fn test_accept_new_job_as_technician() {
        let server = job_server(vec![json!({
            "id": 7, "equipment": "Printer A", "description": "Paper jam",
            "status": "New", "team": "IT Support"
        })]);
        let controller = LifecycleController::new(ApiClient::new(BASE, server.clone()), "Tech-01");

        let new_job = job(7, "New");
        assert_eq!(
            actions_for(new_job.status),
            vec![LifecycleAction::Accept, LifecycleAction::Reject]
        );

        let jobs = block_on(controller.perform(&new_job, LifecycleAction::Accept)).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].status, RequestStatus::Accepted);
        assert_eq!(jobs[0].assigned_technician_name.as_deref(), Some("Tech-01"));
        let next = actions_for(jobs[0].status);
        assert!(!next.contains(&LifecycleAction::Accept));
        assert!(!next.contains(&LifecycleAction::Reject));

        let seen = server.requests();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].method, Method::Put);
        assert_eq!(seen[0].path, "/tech/claim/7");
        assert_eq!(
            seen[0].body,
            Some(json!({"status": "Accepted", "tech": "Tech-01"}))
        );
        assert_eq!(seen[1].path, "/tech/jobs");
    }

    #[test]
    fn test_progress_update_sends_empty_note() {
        let server = job_server(vec![json!({"id": 3, "status": "Accepted"})]);
        let controller = LifecycleController::new(ApiClient::new(BASE, server.clone()), "Tech-01");

        let jobs = block_on(controller.perform(&job(3, "Accepted"), LifecycleAction::Start)).unwrap();
        assert_eq!(jobs[0].status, RequestStatus::InProgress);

        let seen = server.requests();
        assert_eq!(seen[0].path, "/tech/update/3");
        assert_eq!(seen[0].body, Some(json!({"status": "In Progress", "note": ""})));
    }

    #[test]
    fn test_forbidden_action_sends_nothing() {
        let server = job_server(vec![]);
        let controller = LifecycleController::new(ApiClient::new(BASE, server.clone()), "Tech-01");

        let err = block_on(controller.perform(&job(1, "Completed"), LifecycleAction::Start)).unwrap_err();
        assert!(matches!(err, LifecycleError::NotPermitted(_)));
        let err = block_on(controller.perform(&job(1, "New"), LifecycleAction::Complete)).unwrap_err();
        assert!(matches!(err, LifecycleError::NotPermitted(_)));
        assert!(server.requests().is_empty());
    }

    #[test]
    fn test_server_rejection_skips_reload() {
        let server = job_server(vec![]);
        let controller = LifecycleController::new(ApiClient::new(BASE, server.clone()), "Tech-01");

        let err = block_on(controller.perform(&job(42, "New"), LifecycleAction::Reject)).unwrap_err();
        assert_eq!(err.user_message(), "Job not found");
        assert_eq!(server.requests().len(), 1);
    }
}
