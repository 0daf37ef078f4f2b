pub mod badge;
pub mod team_routing;
pub mod validation;
