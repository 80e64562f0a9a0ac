//! Pattern 2: Builder
//!
//! Run with: cargo run --bin p2_builder

use anyhow::Context;
use std::path::Path;

use creational_idioms::settings::{DemoSettings, SETTINGS_FILE};
use creational_idioms::telemetry;
use creational_idioms::p2_builder;

fn main() -> anyhow::Result<()> {
    let settings = DemoSettings::load_or_default(Path::new(SETTINGS_FILE))
        .context("reading demo settings")?;
    telemetry::init(&settings.log_filter).context("configuring logging")?;

    p2_builder::run_demo(settings.notebook);
    Ok(())
}
