//! Pattern 1: Static Factory Methods
//!
//! Run with: cargo run --bin p1_static_factory

use anyhow::Context;
use std::path::Path;

use creational_idioms::settings::{DemoSettings, SETTINGS_FILE};
use creational_idioms::telemetry;
use creational_idioms::p1_static_factory;

fn main() -> anyhow::Result<()> {
    let settings = DemoSettings::load_or_default(Path::new(SETTINGS_FILE))
        .context("reading demo settings")?;
    telemetry::init(&settings.log_filter).context("configuring logging")?;

    p1_static_factory::run_demo(&settings.numbers, settings.letter)
        .context("static factory demo failed")?;
    Ok(())
}
