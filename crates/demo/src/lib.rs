//! The named-entity walkthrough as a library: configuration plus the scenario
//! the `naming-demo` binary runs.

pub mod config;
pub mod scenario;

pub use config::DemoConfig;
pub use scenario::{ScenarioReport, run};
