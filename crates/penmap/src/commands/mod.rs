use clap::ArgMatches;
use tracing::error;

use penmap_core::events;

use crate::app::tool_config;

mod completions;
mod list;
mod map;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let config = tool_config(matches);
    let result = match matches.subcommand() {
        None | Some(("map", _)) => map::handle_map_command(&config),
        Some(("list", sub_matches)) => list::handle_list_command(sub_matches, &config),
        Some(("completions", sub_matches)) => completions::handle_completions_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}
