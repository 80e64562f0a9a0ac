//! Pattern 6: Avoiding Unnecessary Objects
//!
//! Run with: cargo run --bin p6_object_reuse

use anyhow::Context;
use std::path::Path;

use creational_idioms::settings::{DemoSettings, SETTINGS_FILE};
use creational_idioms::telemetry;
use creational_idioms::p6_object_reuse;

fn main() -> anyhow::Result<()> {
    let settings = DemoSettings::load_or_default(Path::new(SETTINGS_FILE))
        .context("reading demo settings")?;
    telemetry::init(&settings.log_filter).context("configuring logging")?;

    p6_object_reuse::run_demo();
    Ok(())
}
