//! Flow module

mod api;
mod commands;
mod models;

pub use commands::run_flows_command;
pub use models::{parse_flow_source, Flow};
