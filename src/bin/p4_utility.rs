//! Pattern 4: Non-instantiable Utility Types
//!
//! Run with: cargo run --bin p4_utility

use anyhow::Context;
use std::path::Path;

use creational_idioms::settings::{DemoSettings, SETTINGS_FILE};
use creational_idioms::telemetry;
use creational_idioms::p4_utility;

fn main() -> anyhow::Result<()> {
    let settings = DemoSettings::load_or_default(Path::new(SETTINGS_FILE))
        .context("reading demo settings")?;
    telemetry::init(&settings.log_filter).context("configuring logging")?;

    p4_utility::run_demo();
    Ok(())
}
