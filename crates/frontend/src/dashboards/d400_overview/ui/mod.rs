mod dashboard;
mod panels;

pub use dashboard::OverviewDashboard;
