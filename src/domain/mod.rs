mod alert;
mod geo_location;
mod geofence;
mod safety_location;

pub use alert::{Alert, AlertStatus};
pub use geo_location::{GeoLocation, LastKnownLocation};
pub use geofence::{Geofence, GeofenceType};
pub use safety_location::{Category, SafetyLocation};
