use clap::{Arg, ArgAction, ArgMatches, Command};
use clap_complete::Shell;
use penmap_core::ToolConfig;

pub fn build_cli() -> Command {
    Command::new("penmap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Map tablet pen input to a single window")
        .long_about(
            "penmap binds every detected stylus and eraser to the screen region of one \
             window, so the full tablet surface covers exactly that window. Without a \
             subcommand it runs the interactive mapping flow.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("xsetwacom")
                .long("xsetwacom")
                .value_name("PROGRAM")
                .help("Tablet driver tool used to list and map devices (default: xsetwacom)")
                .global(true),
        )
        .arg(
            Arg::new("wmctrl")
                .long("wmctrl")
                .value_name("PROGRAM")
                .help("Window lister (default: wmctrl)")
                .global(true),
        )
        .arg(
            Arg::new("xwininfo")
                .long("xwininfo")
                .value_name("PROGRAM")
                .help("Per-window geometry tool (default: xwininfo)")
                .global(true),
        )
        // Map subcommand
        .subcommand(
            Command::new("map").about("Choose a window interactively and map all pen devices to it"),
        )
        // List subcommand
        .subcommand(
            Command::new("list")
                .about("List pen devices or windows")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("devices").about("List detected stylus and eraser devices").arg(
                        Arg::new("json")
                            .long("json")
                            .help("Output in JSON format")
                            .action(ArgAction::SetTrue),
                    ),
                )
                .subcommand(
                    Command::new("windows")
                        .about("List windows with their resolved geometry")
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .help("Output in JSON format")
                                .action(ArgAction::SetTrue),
                        ),
                ),
        )
        // Completions subcommand
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .value_parser(clap::value_parser!(Shell)),
                ),
        )
}

/// Build the tool configuration from the global program overrides.
pub fn tool_config(matches: &ArgMatches) -> ToolConfig {
    ToolConfig::default().with_overrides(
        matches.get_one::<String>("xsetwacom").map(String::as_str),
        matches.get_one::<String>("wmctrl").map(String::as_str),
        matches.get_one::<String>("xwininfo").map(String::as_str),
    )
}
