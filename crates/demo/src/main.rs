use anyhow::Context;

use naming_demo::DemoConfig;

fn main() -> anyhow::Result<()> {
    naming_observability::init();

    let config = DemoConfig::from_env().context("invalid demo configuration")?;
    tracing::debug!(?config, "configuration loaded");

    let report = naming_demo::run(&config);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
