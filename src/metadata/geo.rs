use serde::{Deserialize, Serialize};

/// Generic GPS location in WGS-84 decimal degrees.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GpsLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f32>,
}

impl GpsLocation {
    /// Returns `None` when either coordinate is out of range or not finite.
    pub fn new(latitude: f64, longitude: f64, altitude: Option<f32>) -> Option<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }
        Some(Self {
            latitude,
            longitude,
            altitude,
        })
    }

    /// Builds a location from EXIF-style degree/minute/second triples and
    /// their `N`/`S` and `E`/`W` reference letters.
    pub fn from_dms(
        latitude: (f64, f64, f64),
        latitude_ref: char,
        longitude: (f64, f64, f64),
        longitude_ref: char,
        altitude: Option<f32>,
    ) -> Option<Self> {
        let lat = signed_degrees(latitude, latitude_ref, 'N', 'S')?;
        let lon = signed_degrees(longitude, longitude_ref, 'E', 'W')?;
        Self::new(lat, lon, altitude)
    }
}

fn signed_degrees(
    (degrees, minutes, seconds): (f64, f64, f64),
    reference: char,
    positive: char,
    negative: char,
) -> Option<f64> {
    if minutes < 0.0 || minutes >= 60.0 || seconds < 0.0 || seconds >= 60.0 || degrees < 0.0 {
        return None;
    }
    let magnitude = degrees + minutes / 60.0 + seconds / 3600.0;
    match reference.to_ascii_uppercase() {
        r if r == positive => Some(magnitude),
        r if r == negative => Some(-magnitude),
        _ => None,
    }
}
