//! Walkthrough: a person and two vessels, a rename, a comparison, and a
//! registry that only sees full names.

use serde::Serialize;

use naming_core::{GeneratesRandomNumbers, NamedEntity};
use naming_entities::{Person, Vessel};
use naming_random::OneThroughTen;
use naming_registry::Registry;

use crate::config::DemoConfig;

/// Everything the walkthrough observed, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    pub person: Person,
    /// Full name of the prefixed vessel before the rename.
    pub original_full_name: String,
    pub vessels_equal: bool,
    pub verdict: String,
    /// Bare name after the rename.
    pub renamed_name: String,
    pub renamed_full_name: String,
    /// Full names read back from the registry, in insertion order.
    pub registry: Vec<String>,
    pub rolls: Vec<i64>,
}

pub fn run(config: &DemoConfig) -> ScenarioReport {
    let me = Person::new("Violet Lavender Love");

    let firefly = Vessel::named("Serenity");
    let enterprise = Vessel::prefixed("USS", "Enterprise");
    let original_full_name = enterprise.full_name();
    tracing::info!(full_name = %original_full_name, "vessel launched");

    let vessels_equal = firefly == enterprise;
    let verdict = if vessels_equal {
        "They are the same!"
    } else {
        "These are not the same vessel, Silly!"
    };
    tracing::info!(%firefly, %enterprise, vessels_equal, "{verdict}");

    enterprise.set_name(config.rename_to.as_str());
    tracing::info!(name = %enterprise.name(), "vessel renamed");

    let mut registry = Registry::new();
    registry.push(me.clone());
    registry.push(enterprise.clone());
    for entity in &registry {
        tracing::info!(full_name = %entity.full_name(), "registry entry");
    }

    let mut generator = match config.seed {
        Some(seed) => OneThroughTen::seeded(seed),
        None => OneThroughTen::new(),
    };
    let rolls: Vec<i64> = (0..config.rolls).map(|_| generator.random()).collect();
    tracing::info!(?rolls, "rolled one through ten");

    ScenarioReport {
        person: me,
        original_full_name,
        vessels_equal,
        verdict: verdict.to_string(),
        renamed_name: enterprise.name(),
        renamed_full_name: enterprise.full_name(),
        registry: registry.full_names(),
        rolls,
    }
}
