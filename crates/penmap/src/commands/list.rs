use clap::ArgMatches;
use tracing::{error, info};

use penmap_core::{PenmapError, SystemRunner, ToolConfig, device_ops, events, window_ops};

use crate::table;

pub(crate) fn handle_list_command(
    matches: &ArgMatches,
    config: &ToolConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("devices", sub_matches)) => handle_list_devices(sub_matches, config),
        Some(("windows", sub_matches)) => handle_list_windows(sub_matches, config),
        _ => {
            error!(event = "cli.list_subcommand_unknown");
            Err("Unknown list subcommand".into())
        }
    }
}

fn handle_list_devices(
    matches: &ArgMatches,
    config: &ToolConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.list_devices_started", json_output = json_output);

    match device_ops::list_devices(&SystemRunner, config) {
        Ok(devices) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&devices)?);
            } else if devices.is_empty() {
                println!("No tablet devices found.");
            } else {
                println!("Tablet devices:");
                table::print_devices_table(&devices);
            }

            info!(event = "cli.list_devices_completed", count = devices.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to list tablet devices: {}", e);
            error!(
                event = "cli.list_devices_failed",
                error = %e,
                error_code = e.error_code()
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_list_windows(
    matches: &ArgMatches,
    config: &ToolConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.list_windows_started", json_output = json_output);

    match window_ops::list_windows(&SystemRunner, config) {
        Ok(listing) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&listing.windows)?);
            } else {
                for unresolved in &listing.unresolved {
                    println!(
                        "Skipped {} ({}): {}",
                        unresolved.id, unresolved.title, unresolved.reason
                    );
                }
                if listing.windows.is_empty() {
                    println!("No windows found.");
                } else {
                    println!("Windows:");
                    table::print_windows_table(&listing.windows);
                }
            }

            info!(
                event = "cli.list_windows_completed",
                count = listing.windows.len(),
                unresolved_count = listing.unresolved.len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to list windows: {}", e);
            error!(
                event = "cli.list_windows_failed",
                error = %e,
                error_code = e.error_code()
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
