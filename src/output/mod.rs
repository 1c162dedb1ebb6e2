//! Output formatting module
//!
//! Table rendering for human use, raw JSON passthrough for scripting.

mod common;
mod executions;
mod flows;
mod namespaces;

pub use common::print_json;
pub use executions::{output_execution_started, output_kill_result};
pub use flows::{output_deployed_flows, output_flow_detail, output_flows};
pub use namespaces::output_namespaces;
