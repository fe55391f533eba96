//! Qibla direction: great-circle initial bearing from an observer to the
//! Kaaba, plus compass-octant labels for display.
//!
//! The bearing uses the standard forward-azimuth formula on a spherical
//! Earth. No ellipsoidal correction is applied; for pointing a phone or a
//! prayer mat the spherical answer is well within a degree of the geodesic
//! one.

/// Kaaba, Mecca: 21.4225 N, 39.8262 E.
const KAABA_LAT_DEG: f64 = 21.4225;
const KAABA_LON_DEG: f64 = 39.8262;

/// Bearing in whole degrees clockwise from true North, in [0, 360).
///
/// Defined for any finite latitude/longitude; coordinates outside the
/// geographic range produce a mathematically valid but meaningless result,
/// so callers should range-check first. An observer exactly at the Kaaba is
/// degenerate (atan2(0, 0)) and returns an implementation-defined bearing.
pub fn bearing_from_coords(latitude: f64, longitude: f64) -> i32 {
    let lat = latitude.to_radians();
    let lon = longitude.to_radians();
    let kaaba_lat = KAABA_LAT_DEG.to_radians();
    let delta_lon = KAABA_LON_DEG.to_radians() - lon;

    let x = delta_lon.sin();
    let y = lat.cos() * kaaba_lat.tan() - lat.sin() * delta_lon.cos();

    let mut angle = x.atan2(y).to_degrees();
    if angle < 0.0 {
        angle += 360.0;
    }

    // Rounding an angle in [359.5, 360) would land on 360; wrap it back.
    (angle.round() as i32) % 360
}

/// One of the eight 45-degree compass sectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Octant {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Octant {
    /// Classify an angle (degrees clockwise from North) into its octant.
    ///
    /// Each octant is a half-open 45-degree interval centered on its
    /// direction; North wraps across the 0/360 boundary and also absorbs
    /// any out-of-range input, so this is total over finite floats.
    pub fn from_degrees(angle: f64) -> Self {
        if (22.5..67.5).contains(&angle) {
            Octant::NorthEast
        } else if (67.5..112.5).contains(&angle) {
            Octant::East
        } else if (112.5..157.5).contains(&angle) {
            Octant::SouthEast
        } else if (157.5..202.5).contains(&angle) {
            Octant::South
        } else if (202.5..247.5).contains(&angle) {
            Octant::SouthWest
        } else if (247.5..292.5).contains(&angle) {
            Octant::West
        } else if (292.5..337.5).contains(&angle) {
            Octant::NorthWest
        } else {
            Octant::North
        }
    }

    /// Returns the human-readable label for this octant.
    pub fn label(&self) -> &'static str {
        match self {
            Octant::North => "North",
            Octant::NorthEast => "North-East",
            Octant::East => "East",
            Octant::SouthEast => "South-East",
            Octant::South => "South",
            Octant::SouthWest => "South-West",
            Octant::West => "West",
            Octant::NorthWest => "North-West",
        }
    }
}

/// Convenience: angle straight to its display label.
pub fn octant_label(angle: f64) -> &'static str {
    Octant::from_degrees(angle).label()
}
