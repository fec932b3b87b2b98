use crate::errors::PenmapError;
use crate::tools::ToolError;

#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("Could not parse window geometry (missing {})", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error("Invalid {field} value '{value}'")]
    InvalidValue { field: &'static str, value: String },

    #[error("Invalid geometry '{value}': expected WIDTHxHEIGHT+X+Y")]
    InvalidGeometry { value: String },

    #[error("Window info query failed: {source}")]
    QueryFailed {
        #[from]
        source: ToolError,
    },
}

impl PenmapError for GeometryError {
    fn error_code(&self) -> &'static str {
        match self {
            GeometryError::MissingFields { .. } => "GEOMETRY_MISSING_FIELDS",
            GeometryError::InvalidValue { .. } => "GEOMETRY_INVALID_VALUE",
            GeometryError::InvalidGeometry { .. } => "GEOMETRY_INVALID",
            GeometryError::QueryFailed { .. } => "GEOMETRY_QUERY_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, GeometryError::InvalidGeometry { .. })
    }
}
