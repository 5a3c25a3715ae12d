use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// Accepts JSON numbers as well as numeric strings, which is what HTML forms submit. `null`, a missing field and a
/// blank string all deserialize to `None`. Use together with `#[serde(default)]`.
pub fn latitude<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(latitude) = coordinate(deserializer, "latitude")? else {
        return Ok(None);
    };
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::custom(format!("invalid latitude: {}, must be between -90 and 90", latitude)));
    }
    Ok(Some(latitude))
}

pub fn longitude<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(longitude) = coordinate(deserializer, "longitude")? else {
        return Ok(None);
    };
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::custom(format!("invalid longitude: {}, must be between -180 and 180", longitude)));
    }
    Ok(Some(longitude))
}

fn coordinate<'de, D>(deserializer: D, field: &str) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Raw::Text(text)) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Some)
            .ok_or_else(|| Error::custom(format!("invalid {}: '{}' is not a number", field, text))),
    }
}
