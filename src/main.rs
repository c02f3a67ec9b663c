use log::{error, info};

use wmrc::error::Result;
use wmrc::Configuration;

/// Load the configuration against the live display and log what the
/// runtime would receive. Lets a config edit be sanity-checked without
/// restarting the window manager.
fn run() -> Result<()> {
    let config = Configuration::load()?;

    info!("monitors detected: {}", config.monitors);
    for (i, screen) in config.screens.iter().enumerate() {
        info!(
            "screen {}: {:?} bar, {} widgets, height {}",
            i,
            screen.top.role,
            screen.top.widgets.len(),
            screen.top.height,
        );
    }
    info!(
        "{} bindings, {} groups, {} dropdowns, {} float rules, {} layouts",
        config.keys.len(),
        config.groups.len(),
        config.scratchpad.dropdowns.len(),
        config.float_rules.len(),
        config.layouts.len(),
    );

    let now = chrono::Local::now();
    info!(
        "clock preview: {} | {}",
        now.format(&config.commands.time_format),
        now.format(&config.commands.date_format),
    );

    Ok(())
}

fn main() {
    env_logger::init();

    use std::process::exit;

    let status = match run() {
        Ok(()) => 0,
        Err(err) => {
            error!("{}", err);
            1
        }
    };
    exit(status);
}
