use serde::Serialize;

/// Result of mapping one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingOutcome {
    pub device_id: String,
    pub geometry: String,
    pub status: MappingStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MappingStatus {
    Mapped,
    Failed { reason: String },
}

impl MappingOutcome {
    pub fn is_mapped(&self) -> bool {
        matches!(self.status, MappingStatus::Mapped)
    }
}
