use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Alert {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: AlertStatus,
    pub time: String,
}

impl Alert {
    /// Creates an active alert. The id is derived from the creation time in whole seconds, so two alerts raised
    /// within the same second share an id.
    pub fn new<Tz: TimeZone>(name: String, latitude: f64, longitude: f64, now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: Display,
    {
        Alert {
            id: format!("A{}", now.timestamp()),
            name,
            latitude,
            longitude,
            status: AlertStatus::Active,
            time: now.format(TIME_FORMAT).to_string(),
        }
    }

    pub fn set_status<Tz: TimeZone>(&mut self, status: AlertStatus, now: &DateTime<Tz>)
    where
        Tz::Offset: Display,
    {
        self.status = status;
        self.time = now.format(TIME_FORMAT).to_string();
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum AlertStatus {
    Active,
    Acknowledged,
    Resolved,
}

impl AlertStatus {
    pub fn all() -> [AlertStatus; 3] {
        [AlertStatus::Active, AlertStatus::Acknowledged, AlertStatus::Resolved]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertStatus::Active => "Active",
            AlertStatus::Acknowledged => "Acknowledged",
            AlertStatus::Resolved => "Resolved",
        }
    }
}

impl Display for AlertStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("invalid alert status '{0}'")]
pub struct InvalidStatusError(pub String);

impl FromStr for AlertStatus {
    type Err = InvalidStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlertStatus::all()
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InvalidStatusError(s.to_string()))
    }
}
