use crate::domain::{Category, GeoLocation, SafetyLocation};
use crate::geo::{haversine_km, round_km};
use ordered_float::OrderedFloat;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedLocation {
    pub name: String,
    pub address: String,
    pub distance: f64,
}

#[derive(Default, Debug, PartialEq, Serialize)]
pub struct NearestLocations {
    pub hospitals: Vec<RankedLocation>,
    pub police_stations: Vec<RankedLocation>,
}

/// Returns up to `limit` locations per category ordered by distance. Categories are matched leniently on the kind
/// (see [`SafetyLocation::category_containing`]) and distances are rounded before sorting.
pub fn nearest_by_category(locations: &[SafetyLocation], origin: &GeoLocation, limit: usize) -> NearestLocations {
    let mut nearest = NearestLocations::default();

    for location in locations {
        let Some(category) = location.category_containing() else {
            continue;
        };

        let entry = RankedLocation {
            name: location.name.clone(),
            address: location.address.clone(),
            distance: round_km(distance_to(origin, location)),
        };
        match category {
            Category::Hospital => nearest.hospitals.push(entry),
            Category::Police => nearest.police_stations.push(entry),
        }
    }

    for entries in [&mut nearest.hospitals, &mut nearest.police_stations] {
        entries.sort_by_key(|entry| OrderedFloat(entry.distance));
        entries.truncate(limit);
    }

    nearest
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClosestLocation {
    pub name: String,
    pub distance_km: f64,
}

#[derive(Default, Debug, PartialEq, Serialize)]
pub struct ClosestLocations {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital: Option<ClosestLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub police: Option<ClosestLocation>,
}

/// Returns the single closest hospital and police station. Only kinds equal to `hospital` or `police` take part,
/// and the first of several equally distant locations wins.
pub fn closest_by_category(locations: &[SafetyLocation], origin: &GeoLocation) -> ClosestLocations {
    let mut hospital: Option<(&SafetyLocation, f64)> = None;
    let mut police: Option<(&SafetyLocation, f64)> = None;

    for location in locations {
        let closest = match location.category_exact() {
            Some(Category::Hospital) => &mut hospital,
            Some(Category::Police) => &mut police,
            None => continue,
        };

        let distance = distance_to(origin, location);
        if closest.is_none_or(|(_, min)| distance < min) {
            *closest = Some((location, distance));
        }
    }

    let to_closest = |(location, distance): (&SafetyLocation, f64)| ClosestLocation {
        name: location.name.clone(),
        distance_km: round_km(distance),
    };

    ClosestLocations {
        hospital: hospital.map(to_closest),
        police: police.map(to_closest),
    }
}

fn distance_to(origin: &GeoLocation, location: &SafetyLocation) -> f64 {
    haversine_km(origin.latitude, origin.longitude, location.latitude, location.longitude)
}
