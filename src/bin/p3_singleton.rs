//! Pattern 3: Singleton
//!
//! Run with: cargo run --bin p3_singleton

use anyhow::Context;
use std::path::Path;

use creational_idioms::settings::{DemoSettings, SETTINGS_FILE};
use creational_idioms::telemetry;
use creational_idioms::p3_singleton;

fn main() -> anyhow::Result<()> {
    let settings = DemoSettings::load_or_default(Path::new(SETTINGS_FILE))
        .context("reading demo settings")?;
    telemetry::init(&settings.log_filter).context("configuring logging")?;

    p3_singleton::run_demo();
    Ok(())
}
