//! Wire types shared between the solar dashboard frontend and the API server.

pub mod dashboards;
pub mod domain;
