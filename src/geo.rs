//! # Geographic primitives
//!
//! Plain value types shared by the simulator and the storefront: a latitude/longitude pair
//! ([`GeoPoint`]) and the map window that frames a set of points ([`Viewport`]).
//!
//! Everything here works in raw degrees on a flat plane. There is no projection and no
//! great-circle math: the rider moves along the straight segment between two points, and the
//! viewport is an axis-aligned box around them.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Smallest span (in degrees) a [`Viewport`] may have on either axis.
pub const MIN_SPAN: f64 = 0.01;

/// Margin multiplier applied to the raw extent of the framed points.
pub const PADDING_FACTOR: f64 = 1.5;

/// A position on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both coordinates are real numbers (no NaN, no infinity).
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Linear interpolation from `self` towards `to`.
    ///
    /// `progress` is clamped to `[0, 1]`. The `a * (1 - t) + b * t` form returns the endpoints
    /// bit-for-bit at `t == 0` and `t == 1`, so a finished trip lands exactly on `to`.
    pub fn lerp(self, to: GeoPoint, progress: f64) -> GeoPoint {
        let t = progress.clamp(0.0, 1.0);
        GeoPoint {
            latitude: self.latitude * (1.0 - t) + to.latitude * t,
            longitude: self.longitude * (1.0 - t) + to.longitude * t,
        }
    }
}

impl Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// The geographic window used to frame a set of points for display.
///
/// Spans are full widths, not half widths: the window covers
/// `center.latitude ± lat_span / 2` and `center.longitude ± lng_span / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: GeoPoint,
    pub lat_span: f64,
    pub lng_span: f64,
}

impl Viewport {
    /// Fits a viewport around `first` and every point in `rest`.
    ///
    /// The center is the midpoint of the bounding box; each span is the box extent times
    /// [`PADDING_FACTOR`], floored at [`MIN_SPAN`] so coincident points still yield a usable
    /// window.
    pub fn enclosing(first: GeoPoint, rest: &[GeoPoint]) -> Self {
        let (mut min_lat, mut max_lat) = (first.latitude, first.latitude);
        let (mut min_lng, mut max_lng) = (first.longitude, first.longitude);

        for point in rest {
            min_lat = min_lat.min(point.latitude);
            max_lat = max_lat.max(point.latitude);
            min_lng = min_lng.min(point.longitude);
            max_lng = max_lng.max(point.longitude);
        }

        Self {
            center: GeoPoint::new((min_lat + max_lat) / 2.0, (min_lng + max_lng) / 2.0),
            lat_span: MIN_SPAN.max((max_lat - min_lat) * PADDING_FACTOR),
            lng_span: MIN_SPAN.max((max_lng - min_lng) * PADDING_FACTOR),
        }
    }

    /// Whether `point` falls inside the window (edges included).
    pub fn contains(&self, point: GeoPoint) -> bool {
        (point.latitude - self.center.latitude).abs() <= self.lat_span / 2.0
            && (point.longitude - self.center.longitude).abs() <= self.lng_span / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MBK: GeoPoint = GeoPoint::new(13.7469, 100.5299);
    const HOME: GeoPoint = GeoPoint::new(13.736717, 100.534847);

    #[test]
    fn lerp_hits_endpoints_exactly() {
        assert_eq!(MBK.lerp(HOME, 0.0), MBK);
        assert_eq!(MBK.lerp(HOME, 1.0), HOME);
    }

    #[test]
    fn lerp_clamps_progress() {
        assert_eq!(MBK.lerp(HOME, -3.0), MBK);
        assert_eq!(MBK.lerp(HOME, 7.5), HOME);
    }

    #[test]
    fn lerp_midpoint() {
        let mid = GeoPoint::new(0.0, 0.0).lerp(GeoPoint::new(2.0, -4.0), 0.5);
        assert_eq!(mid, GeoPoint::new(1.0, -2.0));
    }

    #[test]
    fn viewport_of_coincident_points_uses_min_span() {
        let viewport = Viewport::enclosing(MBK, &[MBK, MBK]);
        assert_eq!(viewport.center, MBK);
        assert_eq!(viewport.lat_span, MIN_SPAN);
        assert_eq!(viewport.lng_span, MIN_SPAN);
    }

    #[test]
    fn viewport_pads_extent_and_contains_points() {
        let viewport = Viewport::enclosing(HOME, &[MBK]);

        let lat_extent = MBK.latitude - HOME.latitude;
        assert!((viewport.lat_span - lat_extent * PADDING_FACTOR).abs() < 1e-12);
        // The longitude extent (~0.0049) is small enough that the floor wins.
        assert_eq!(viewport.lng_span, MIN_SPAN);

        assert!(viewport.contains(MBK));
        assert!(viewport.contains(HOME));
        assert!(!viewport.contains(GeoPoint::new(14.0, 100.53)));
    }

    #[test]
    fn finite_check() {
        assert!(MBK.is_finite());
        assert!(!GeoPoint::new(f64::NAN, 100.0).is_finite());
        assert!(!GeoPoint::new(13.0, f64::INFINITY).is_finite());
    }
}
