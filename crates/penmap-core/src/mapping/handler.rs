use tracing::{info, warn};

use super::types::{MappingOutcome, MappingStatus};
use crate::config::ToolConfig;
use crate::tools::{ToolRunner, run_checked};
use crate::windows::GeometryString;

/// Bind every device to `geometry` with `MapToOutput`.
///
/// Each device gets exactly one command. A failure is recorded in that
/// device's outcome and the remaining devices are still attempted.
pub fn apply(
    runner: &dyn ToolRunner,
    config: &ToolConfig,
    device_ids: &[String],
    geometry: &GeometryString,
) -> Vec<MappingOutcome> {
    info!(
        event = "core.mapping.apply_started",
        device_count = device_ids.len(),
        geometry = %geometry
    );

    let outcomes: Vec<MappingOutcome> = device_ids
        .iter()
        .map(|device_id| map_device(runner, config, device_id, geometry))
        .collect();

    let failed = outcomes.iter().filter(|o| !o.is_mapped()).count();
    info!(
        event = "core.mapping.apply_completed",
        mapped_count = outcomes.len() - failed,
        failed_count = failed
    );
    outcomes
}

fn map_device(
    runner: &dyn ToolRunner,
    config: &ToolConfig,
    device_id: &str,
    geometry: &GeometryString,
) -> MappingOutcome {
    let args = ["--set", device_id, "MapToOutput", geometry.as_str()];
    let status = match run_checked(runner, &config.device_tool, &args) {
        Ok(_) => {
            info!(event = "core.mapping.device_mapped", device_id = device_id);
            MappingStatus::Mapped
        }
        Err(e) => {
            warn!(
                event = "core.mapping.device_failed",
                device_id = device_id,
                error = %e
            );
            MappingStatus::Failed {
                reason: e.to_string(),
            }
        }
    };

    MappingOutcome {
        device_id: device_id.to_string(),
        geometry: geometry.to_string(),
        status,
    }
}
