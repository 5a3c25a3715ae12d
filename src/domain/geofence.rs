use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Geofence {
    pub name: String,
    #[serde(rename = "type")]
    pub r#type: GeofenceType,
    /// `[latitude, longitude]` of the center.
    pub coordinates: [f64; 2],
    pub radius: u32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeofenceType {
    Safe,
}
