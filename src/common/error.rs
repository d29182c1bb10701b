//! Error types for anytime_astar

use std::fmt;

/// Main error type for grid planning
#[derive(Debug)]
pub enum PlannerError {
    /// Path planning failed (the goal cannot be reached)
    PlanningError(String),
    /// Start or goal rejected before searching
    InvalidEndpoint(String),
    /// Invalid parameter
    InvalidParameter(String),
    /// Backing storage for the search could not be allocated
    AllocationError(String),
    /// Worker pool for frontier selection could not be built
    ThreadPoolError(String),
    /// Map file content is malformed
    MapFormatError(String),
    /// Search state is inconsistent (broken parent chain, etc.)
    InternalError(String),
    /// I/O error
    IoError(std::io::Error),
    /// Visualization error
    VisualizationError(String),
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::PlanningError(msg) => write!(f, "Planning error: {}", msg),
            PlannerError::InvalidEndpoint(msg) => write!(f, "Invalid endpoint: {}", msg),
            PlannerError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            PlannerError::AllocationError(msg) => write!(f, "Allocation error: {}", msg),
            PlannerError::ThreadPoolError(msg) => write!(f, "Thread pool error: {}", msg),
            PlannerError::MapFormatError(msg) => write!(f, "Map format error: {}", msg),
            PlannerError::InternalError(msg) => write!(f, "Internal error: {}", msg),
            PlannerError::IoError(e) => write!(f, "I/O error: {}", e),
            PlannerError::VisualizationError(msg) => write!(f, "Visualization error: {}", msg),
        }
    }
}

impl std::error::Error for PlannerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlannerError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(e: std::io::Error) -> Self {
        PlannerError::IoError(e)
    }
}

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlannerError::PlanningError("goal not reachable".to_string());
        assert_eq!(format!("{}", err), "Planning error: goal not reachable");

        let err = PlannerError::InvalidEndpoint("start or goal point is out of the map".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid endpoint: start or goal point is out of the map"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PlannerError = io_err.into();
        assert!(matches!(err, PlannerError::IoError(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
