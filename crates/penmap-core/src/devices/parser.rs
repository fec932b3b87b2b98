use std::sync::LazyLock;

use regex::Regex;

use super::types::DeviceMap;

static DEVICE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"id:\s*(\d+)").expect("valid device id pattern"));

const PEN_TYPE_MARKERS: [&str; 2] = ["type: STYLUS", "type: ERASER"];

/// Parse `xsetwacom --list devices` output into the pen devices it reports.
///
/// Only STYLUS and ERASER lines are kept. The name is everything before the
/// first tab; lines without an `id:` token are skipped.
pub fn parse_device_list(output: &str) -> DeviceMap {
    let mut devices = DeviceMap::new();

    for line in output.lines() {
        if !PEN_TYPE_MARKERS.iter().any(|marker| line.contains(marker)) {
            continue;
        }

        let Some(id) = DEVICE_ID.captures(line).and_then(|c| c.get(1)) else {
            continue;
        };

        let name = line.split('\t').next().unwrap_or(line).trim();
        devices.insert(name, id.as_str());
    }

    devices
}
