//! Pattern 5: Dependency Injection
//!
//! Run with: cargo run --bin p5_dependency_injection

use anyhow::Context;
use std::path::Path;

use creational_idioms::settings::{DemoSettings, SETTINGS_FILE};
use creational_idioms::telemetry;
use creational_idioms::p5_dependency_injection;

fn main() -> anyhow::Result<()> {
    let settings = DemoSettings::load_or_default(Path::new(SETTINGS_FILE))
        .context("reading demo settings")?;
    telemetry::init(&settings.log_filter).context("configuring logging")?;

    p5_dependency_injection::run_demo();
    Ok(())
}
