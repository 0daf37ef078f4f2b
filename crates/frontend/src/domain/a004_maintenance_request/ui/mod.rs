pub mod details;
pub mod employee_dashboard;
pub mod job_board;
pub mod list;
pub mod my_requests;
pub mod submit;
