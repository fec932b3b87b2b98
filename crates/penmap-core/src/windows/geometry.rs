//! Window geometry parsing.
//!
//! [`GeometryString`] is the canonical `WIDTHxHEIGHT+X+Y` text handed to the
//! tablet driver. It can only be built from a validated string or from a
//! [`Geometry`], so a window never carries a partial geometry.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::errors::GeometryError;

static GEOMETRY_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+x\d+[+-]\d+[+-]\d+$").expect("valid geometry string pattern")
});

static GEOMETRY_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-geometry\s+(\d+x\d+[+-]\d+[+-]\d+)").expect("valid -geometry pattern")
});

static WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bWidth:\s*(\d+)").expect("valid width pattern"));

static HEIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bHeight:\s*(\d+)").expect("valid height pattern"));

static ABSOLUTE_X: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Absolute upper-left X:\s*(-?\d+)").expect("valid absolute x pattern")
});

static ABSOLUTE_Y: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Absolute upper-left Y:\s*(-?\d+)").expect("valid absolute y pattern")
});

/// A screen rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}{:+}{:+}", self.width, self.height, self.x, self.y)
    }
}

/// Validated `WIDTHxHEIGHT+X+Y` text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GeometryString(String);

impl GeometryString {
    pub fn new(value: impl Into<String>) -> Result<Self, GeometryError> {
        let value = value.into();
        if GEOMETRY_STRING.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(GeometryError::InvalidGeometry { value })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Geometry> for GeometryString {
    fn from(geometry: Geometry) -> Self {
        Self(geometry.to_string())
    }
}

impl fmt::Display for GeometryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of resolving one window's precise geometry.
#[derive(Debug)]
pub enum GeometryResolution {
    Resolved(GeometryString),
    Unresolved { reason: GeometryError },
}

/// Resolve geometry from `xwininfo -id` output.
///
/// A `-geometry WxH+X+Y` token is taken verbatim when present. Otherwise the
/// rectangle is composed from the `Width:`, `Height:` and absolute upper-left
/// X/Y fields.
pub fn resolve_geometry(info: &str) -> GeometryResolution {
    match read_geometry(info) {
        Ok(geometry) => GeometryResolution::Resolved(geometry),
        Err(reason) => GeometryResolution::Unresolved { reason },
    }
}

fn read_geometry(info: &str) -> Result<GeometryString, GeometryError> {
    if let Some(token) = GEOMETRY_TOKEN.captures(info).and_then(|c| c.get(1)) {
        return Ok(GeometryString(token.as_str().to_string()));
    }

    let width = capture::<u32>(&WIDTH, "Width", info)?;
    let height = capture::<u32>(&HEIGHT, "Height", info)?;
    let x = capture::<i32>(&ABSOLUTE_X, "Absolute upper-left X", info)?;
    let y = capture::<i32>(&ABSOLUTE_Y, "Absolute upper-left Y", info)?;

    match (width, height, x, y) {
        (Some(width), Some(height), Some(x), Some(y)) => Ok(Geometry {
            width,
            height,
            x,
            y,
        }
        .into()),
        _ => {
            let fields = [
                ("Width", width.is_none()),
                ("Height", height.is_none()),
                ("Absolute upper-left X", x.is_none()),
                ("Absolute upper-left Y", y.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, missing)| missing.then_some(name))
            .collect();
            Err(GeometryError::MissingFields { fields })
        }
    }
}

/// Value of `field`, `Ok(None)` when absent, an error when present but out of range.
fn capture<T: std::str::FromStr>(
    pattern: &Regex,
    field: &'static str,
    text: &str,
) -> Result<Option<T>, GeometryError> {
    let Some(m) = pattern.captures(text).and_then(|c| c.get(1)) else {
        return Ok(None);
    };
    m.as_str()
        .parse()
        .map(Some)
        .map_err(|_| GeometryError::InvalidValue {
            field,
            value: m.as_str().to_string(),
        })
}
