use std::io;

use tracing::{error, info, warn};

use penmap_core::selector::{self, Selection};
use penmap_core::{
    MappingOutcome, MappingStatus, PenmapError, SystemRunner, ToolConfig, ToolError, Window,
    device_ops, events, mapping_ops, window_ops,
};

pub(crate) fn handle_map_command(config: &ToolConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.map_started");
    let runner = SystemRunner;

    let devices = device_ops::list_devices(&runner, config)
        .map_err(|e| report_tool_failure("tablet devices", e))?;

    // Device list comes before any window enumeration output.
    if !selector::announce_devices(&devices, &mut io::stdout().lock())? {
        info!(event = "cli.map_completed", mapped = false);
        return Ok(());
    }

    let windows = resolve_windows(&runner, config)?;

    let selection = prompt(&windows)?;
    let Selection::Chosen(window) = selection else {
        info!(event = "cli.map_completed", mapped = false);
        return Ok(());
    };

    let outcomes = mapping_ops::apply(&runner, config, &devices.ids(), &window.geometry);
    print_outcomes(&outcomes);

    info!(
        event = "cli.map_completed",
        mapped = true,
        window_id = %window.id,
        failed_count = outcomes.iter().filter(|o| !o.is_mapped()).count()
    );
    Ok(())
}

fn resolve_windows(
    runner: &SystemRunner,
    config: &ToolConfig,
) -> Result<Vec<Window>, Box<dyn std::error::Error>> {
    let listing =
        window_ops::list_windows(runner, config).map_err(|e| report_tool_failure("window list", e))?;

    for unresolved in &listing.unresolved {
        println!(
            "Error getting precise window geometry for {} ({}): {}",
            unresolved.id, unresolved.title, unresolved.reason
        );
    }

    Ok(listing.windows)
}

fn prompt(windows: &[Window]) -> io::Result<Selection> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    selector::choose_window(windows, &mut stdin.lock(), &mut stdout.lock())
}

fn report_tool_failure(what: &str, e: ToolError) -> Box<dyn std::error::Error> {
    eprintln!("Error: Unable to get {}: {}", what, e);
    if e.is_user_error() {
        warn!(
            event = "cli.enumeration_failed",
            tool = e.tool(),
            error = %e,
            error_code = e.error_code()
        );
    } else {
        error!(
            event = "cli.enumeration_failed",
            tool = e.tool(),
            error = %e,
            error_code = e.error_code()
        );
    }
    events::log_app_error(&e);
    e.into()
}

fn print_outcomes(outcomes: &[MappingOutcome]) {
    for outcome in outcomes {
        match &outcome.status {
            MappingStatus::Mapped => println!(
                "Successfully mapped device {} to {}",
                outcome.device_id, outcome.geometry
            ),
            MappingStatus::Failed { reason } => {
                println!("Error: Failed to map device {}", outcome.device_id);
                error!(
                    event = "cli.map_device_failed",
                    device_id = %outcome.device_id,
                    reason = %reason
                );
            }
        }
    }
}
