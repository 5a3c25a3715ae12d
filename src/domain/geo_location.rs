#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoLocation { latitude, longitude }
    }
}

/// The most recent location reported by a client. Either coordinate may be missing when the client sent an
/// incomplete update.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct LastKnownLocation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl LastKnownLocation {
    pub fn as_geo_location(&self) -> Option<GeoLocation> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoLocation { latitude, longitude }),
            _ => None,
        }
    }
}
