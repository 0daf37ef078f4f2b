pub mod aggregate;
pub mod lifecycle;
pub mod summary;

pub use aggregate::{
    AssignTechnicianDto, MaintenanceRequest, MaintenanceRequestDto, RequestId, RequestStatistics,
    SubmitRequestDto,
};
pub use lifecycle::{
    actions_for, apply, ActionKind, ClaimJobDto, LifecycleAction, TransitionError, UpdateJobDto,
};
pub use summary::EmployeeSummary;
