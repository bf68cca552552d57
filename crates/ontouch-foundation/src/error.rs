use crate::router::SurfaceId;

/// Errors returned by the router's configuration calls.
///
/// Input delivery never fails: filtered or out-of-bounds events are dropped
/// silently, and notifications for a detached surface are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    UnknownSurface { id: SurfaceId },
}

impl std::fmt::Display for RouterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouterError::UnknownSurface { id } => write!(f, "{id} is not attached"),
        }
    }
}

impl std::error::Error for RouterError {}
