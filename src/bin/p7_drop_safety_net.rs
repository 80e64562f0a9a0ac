//! Pattern 7: Drop as a Safety Net
//!
//! Run with: cargo run --bin p7_drop_safety_net

use anyhow::Context;
use std::path::Path;

use creational_idioms::settings::{DemoSettings, SETTINGS_FILE};
use creational_idioms::telemetry;
use creational_idioms::p7_drop_safety_net;

fn main() -> anyhow::Result<()> {
    let settings = DemoSettings::load_or_default(Path::new(SETTINGS_FILE))
        .context("reading demo settings")?;
    telemetry::init(&settings.log_filter).context("configuring logging")?;

    p7_drop_safety_net::run_demo();
    Ok(())
}
