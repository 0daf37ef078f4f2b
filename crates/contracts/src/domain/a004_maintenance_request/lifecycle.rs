//! Request/job lifecycle.
//!
//! ```text
//! New ──accept──▶ Accepted ──start──▶ In Progress ──complete──▶ Completed
//!  └───reject──▶ Rejected
//! ```
//!
//! [`TRANSITIONS`] is the only place the graph is written down. The job
//! board buttons come from [`actions_for`] and the server call is chosen by
//! [`LifecycleAction::kind`], so the UI can never offer a move the table
//! does not allow.

use serde::{Deserialize, Serialize};

use crate::enums::RequestStatus;
use crate::shared::badge::BadgeClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleAction {
    Accept,
    Reject,
    Start,
    Complete,
}

/// Which job endpoint carries the action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// `PUT /tech/claim/{id}` with the acting technician
    Claim,
    /// `PUT /tech/update/{id}` with an optional note
    ProgressUpdate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: RequestStatus,
    pub action: LifecycleAction,
    pub to: RequestStatus,
}

pub static TRANSITIONS: &[Transition] = &[
    Transition {
        from: RequestStatus::New,
        action: LifecycleAction::Accept,
        to: RequestStatus::Accepted,
    },
    Transition {
        from: RequestStatus::New,
        action: LifecycleAction::Reject,
        to: RequestStatus::Rejected,
    },
    Transition {
        from: RequestStatus::Accepted,
        action: LifecycleAction::Start,
        to: RequestStatus::InProgress,
    },
    Transition {
        from: RequestStatus::InProgress,
        action: LifecycleAction::Complete,
        to: RequestStatus::Completed,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("cannot {} a request that is {}", .action.verb(), .from.display_name())]
    NotPermitted {
        from: RequestStatus,
        action: LifecycleAction,
    },
}

impl LifecycleAction {
    pub fn all() -> [LifecycleAction; 4] {
        [
            LifecycleAction::Accept,
            LifecycleAction::Reject,
            LifecycleAction::Start,
            LifecycleAction::Complete,
        ]
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            LifecycleAction::Accept | LifecycleAction::Reject => ActionKind::Claim,
            LifecycleAction::Start | LifecycleAction::Complete => ActionKind::ProgressUpdate,
        }
    }

    pub fn is_claim(&self) -> bool {
        self.kind() == ActionKind::Claim
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            LifecycleAction::Accept => "Accept",
            LifecycleAction::Reject => "Reject",
            LifecycleAction::Start => "Start",
            LifecycleAction::Complete => "Complete",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            LifecycleAction::Accept => "accept",
            LifecycleAction::Reject => "reject",
            LifecycleAction::Start => "start",
            LifecycleAction::Complete => "complete",
        }
    }

    pub fn badge(&self) -> BadgeClass {
        match self {
            LifecycleAction::Accept | LifecycleAction::Complete => BadgeClass::Success,
            LifecycleAction::Reject => BadgeClass::Danger,
            LifecycleAction::Start => BadgeClass::Warning,
        }
    }

    /// Status the action leads to, whatever the current state.
    pub fn target(&self) -> RequestStatus {
        TRANSITIONS
            .iter()
            .find(|t| t.action == *self)
            .map(|t| t.to)
            .unwrap_or(RequestStatus::New)
    }
}

/// Actions permitted from `status`, in table order. Empty for terminal states.
pub fn actions_for(status: RequestStatus) -> Vec<LifecycleAction> {
    TRANSITIONS
        .iter()
        .filter(|t| t.from == status)
        .map(|t| t.action)
        .collect()
}

/// Next status after `action`, or an error when the table has no such edge.
pub fn apply(
    status: RequestStatus,
    action: LifecycleAction,
) -> Result<RequestStatus, TransitionError> {
    TRANSITIONS
        .iter()
        .find(|t| t.from == status && t.action == action)
        .map(|t| t.to)
        .ok_or(TransitionError::NotPermitted {
            from: status,
            action,
        })
}

// ============================================================================
// Job endpoint payloads
// ============================================================================

/// Body of `PUT /tech/claim/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimJobDto {
    pub status: RequestStatus,
    pub tech: String,
}

/// Body of `PUT /tech/update/{id}`; the endpoint requires `note` even when empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateJobDto {
    pub status: RequestStatus,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_for_every_status() {
        use LifecycleAction::*;
        assert_eq!(actions_for(RequestStatus::New), vec![Accept, Reject]);
        assert_eq!(actions_for(RequestStatus::Accepted), vec![Start]);
        assert_eq!(actions_for(RequestStatus::InProgress), vec![Complete]);
        assert!(actions_for(RequestStatus::Completed).is_empty());
        assert!(actions_for(RequestStatus::Rejected).is_empty());
    }

    #[test]
    fn test_unknown_status_offers_nothing() {
        assert!(actions_for(RequestStatus::Unknown).is_empty());
        assert!(!RequestStatus::Unknown.is_terminal());
        assert!(apply(RequestStatus::Unknown, LifecycleAction::Accept).is_err());
    }

    #[test]
    fn test_terminal_iff_no_actions() {
        for status in RequestStatus::all() {
            assert_eq!(status.is_terminal(), actions_for(status).is_empty());
        }
    }

    #[test]
    fn test_apply_follows_table() {
        assert_eq!(
            apply(RequestStatus::New, LifecycleAction::Accept),
            Ok(RequestStatus::Accepted)
        );
        assert_eq!(
            apply(RequestStatus::InProgress, LifecycleAction::Complete),
            Ok(RequestStatus::Completed)
        );
    }

    #[test]
    fn test_no_backward_or_skipping_moves() {
        let err = apply(RequestStatus::Accepted, LifecycleAction::Accept).unwrap_err();
        assert_eq!(err.to_string(), "cannot accept a request that is Accepted");
        assert!(apply(RequestStatus::New, LifecycleAction::Complete).is_err());
        assert!(apply(RequestStatus::Completed, LifecycleAction::Start).is_err());
    }

    #[test]
    fn test_action_kinds_and_targets() {
        assert!(LifecycleAction::Reject.is_claim());
        assert!(!LifecycleAction::Start.is_claim());
        assert_eq!(LifecycleAction::Start.target(), RequestStatus::InProgress);
        assert_eq!(LifecycleAction::Reject.target(), RequestStatus::Rejected);
    }

    #[test]
    fn test_claim_payload_shape() {
        let body = ClaimJobDto {
            status: LifecycleAction::Accept.target(),
            tech: "Tech-01".into(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"status": "Accepted", "tech": "Tech-01"})
        );
        let update = UpdateJobDto {
            status: RequestStatus::InProgress,
            note: String::new(),
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({"status": "In Progress", "note": ""})
        );
    }
}
