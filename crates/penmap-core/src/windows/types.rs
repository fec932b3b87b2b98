use serde::Serialize;

use super::errors::GeometryError;
use super::geometry::GeometryString;

/// A window that can be selected as the mapping target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Window {
    pub title: String,
    pub geometry: GeometryString,
    pub id: String,
}

/// A listed window whose precise geometry could not be resolved.
#[derive(Debug)]
pub struct UnresolvedWindow {
    pub id: String,
    pub title: String,
    pub reason: GeometryError,
}

/// Result of window enumeration.
///
/// `windows` keeps the window lister's order; every dropped window is
/// recorded in `unresolved`.
#[derive(Debug, Default)]
pub struct WindowListing {
    pub windows: Vec<Window>,
    pub unresolved: Vec<UnresolvedWindow>,
}
