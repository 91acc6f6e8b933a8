use serde::{Deserialize, Serialize};

/// Geographic point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in decimal degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in decimal degrees (-180 to 180)
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err("Latitude must be between -90 and 90 degrees".to_string());
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err("Longitude must be between -180 and 180 degrees".to_string());
        }
        Ok(Self { lat, lng })
    }
}

/// Rectangular geographic extent, axis-aligned in lat/lng space.
///
/// Both edges are inclusive, so a point or bound lying exactly on the
/// perimeter counts as contained. Extents spanning the antimeridian are not
/// representable; the south-west corner must be south and west of the
/// north-east corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl GeoBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Result<Self, String> {
        if south_west.lat > north_east.lat {
            return Err("South-west corner must be south of the north-east corner".to_string());
        }
        if south_west.lng > north_east.lng {
            return Err("South-west corner must be west of the north-east corner".to_string());
        }
        Ok(Self {
            south_west,
            north_east,
        })
    }

    /// Build an extent from corner coordinates given as (lat, lng) pairs.
    pub fn from_corners(south_west: (f64, f64), north_east: (f64, f64)) -> Result<Self, String> {
        Self::new(
            LatLng::new(south_west.0, south_west.1)?,
            LatLng::new(north_east.0, north_east.1)?,
        )
    }

    /// Whether the point lies inside this extent (perimeter included).
    pub fn contains_point(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Whether `other` lies entirely inside this extent.
    ///
    /// This is full containment, not intersection: an extent partially
    /// outside this one is not contained.
    pub fn contains_bounds(&self, other: &GeoBounds) -> bool {
        self.contains_point(&other.south_west) && self.contains_point(&other.north_east)
    }

    /// Grow this extent just enough to also cover `other`.
    pub fn extend(&mut self, other: &GeoBounds) {
        self.south_west.lat = self.south_west.lat.min(other.south_west.lat);
        self.south_west.lng = self.south_west.lng.min(other.south_west.lng);
        self.north_east.lat = self.north_east.lat.max(other.north_east.lat);
        self.north_east.lng = self.north_east.lng.max(other.north_east.lng);
    }

    /// Geometric center of the extent.
    pub fn center(&self) -> LatLng {
        LatLng {
            lat: (self.south_west.lat + self.north_east.lat) / 2.0,
            lng: (self.south_west.lng + self.north_east.lng) / 2.0,
        }
    }
}
