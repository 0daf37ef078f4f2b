pub mod aggregate;

pub use aggregate::{team_label, Team, TeamDto, TeamId};
