use crate::domain::{Alert, AlertStatus, LastKnownLocation};
use chrono::Local;
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tokio::sync::{RwLock, watch};
use tracing::{debug, info, instrument, warn};

/// In-memory state shared by all requests: the alerts in creation order and the last location a client reported.
/// Every change to the alerts is published to the notifier.
#[derive(Debug)]
pub struct Store {
    alerts: RwLock<Vec<Alert>>,
    last_known_location: RwLock<LastKnownLocation>,
    notifier_tx: WatchSender<Vec<Alert>>,
    notifier_rx: WatchReceiver<Vec<Alert>>,
}

impl Store {
    pub fn new() -> Self {
        let (notifier_tx, notifier_rx) = watch::channel::<Vec<Alert>>(Vec::new());

        Store {
            alerts: RwLock::new(Vec::new()),
            last_known_location: RwLock::new(LastKnownLocation::default()),
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<Vec<Alert>> {
        self.notifier_rx.clone()
    }

    pub async fn alerts(&self) -> Vec<Alert> {
        self.alerts.read().await.clone()
    }

    #[instrument(skip_all, fields(alert_id = %alert.id))]
    pub async fn add_alert(&self, alert: Alert) -> Alert {
        let mut write_guard = self.alerts.write().await;
        if write_guard.iter().any(|existing| existing.id == alert.id) {
            warn!("⚠️ Another alert was raised within the same second, id '{}' is not unique", alert.id);
        }

        write_guard.push(alert.clone());
        info!("🚨 Registered alert from '{}' at ({}, {})", alert.name, alert.latitude, alert.longitude);

        self.notifier_tx.send(write_guard.clone()).unwrap_or_default();
        alert
    }

    /// Sets the status of the first alert with the given id. Any status may follow any other. Returns `None` when no
    /// alert has that id.
    #[instrument(skip(self))]
    pub async fn update_alert_status(&self, id: &str, status: AlertStatus) -> Option<Alert> {
        let mut write_guard = self.alerts.write().await;

        let Some(alert) = write_guard.iter_mut().find(|alert| alert.id == id) else {
            debug!("Unknown alert '{}'", id);
            return None;
        };

        let previous_status = alert.status;
        alert.set_status(status, &Local::now());
        info!("🟢 Updated alert '{}', set status to '{}', was '{}'", id, status, previous_status);

        let updated = alert.clone();
        self.notifier_tx.send(write_guard.clone()).unwrap_or_default();
        Some(updated)
    }

    pub async fn last_known_location(&self) -> LastKnownLocation {
        *self.last_known_location.read().await
    }

    pub async fn set_last_known_location(&self, location: LastKnownLocation) {
        *self.last_known_location.write().await = location;
        debug!(latitude = ?location.latitude, longitude = ?location.longitude, "📍 Updated last known location");
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn alert(name: &str, seconds: i64) -> Alert {
        let created = Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap();
        Alert::new(name.to_string(), 1.0, 2.0, &created)
    }

    #[test(tokio::test)]
    async fn add_alert_keeps_creation_order() {
        let store = Store::new();

        store.add_alert(alert("first", 0)).await;
        store.add_alert(alert("second", 1)).await;

        let names = store.alerts().await.into_iter().map(|alert| alert.name).collect::<Vec<_>>();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test(tokio::test)]
    async fn update_alert_status_allows_any_transition() {
        let store = Store::new();
        let created = store.add_alert(alert("Ada", 0)).await;

        let resolved = store.update_alert_status(&created.id, AlertStatus::Resolved).await;
        assert_eq!(resolved.map(|alert| alert.status), Some(AlertStatus::Resolved));

        let active = store.update_alert_status(&created.id, AlertStatus::Active).await;
        assert_eq!(active.map(|alert| alert.status), Some(AlertStatus::Active));

        assert_eq!(store.alerts().await[0].status, AlertStatus::Active);
    }

    #[test(tokio::test)]
    async fn update_alert_status_of_an_unknown_alert_returns_none() {
        let store = Store::new();
        store.add_alert(alert("Ada", 0)).await;

        assert_eq!(store.update_alert_status("A0", AlertStatus::Acknowledged).await, None);
    }

    #[test(tokio::test)]
    async fn update_alert_status_updates_the_first_of_duplicate_ids() {
        let store = Store::new();
        store.add_alert(alert("first", 0)).await;
        let second = store.add_alert(alert("second", 0)).await;

        let updated = store.update_alert_status(&second.id, AlertStatus::Acknowledged).await;

        assert_eq!(updated.map(|alert| alert.name), Some("first".to_string()));
        let statuses = store.alerts().await.into_iter().map(|alert| alert.status).collect::<Vec<_>>();
        assert_eq!(statuses, vec![AlertStatus::Acknowledged, AlertStatus::Active]);
    }

    #[test(tokio::test)]
    async fn changes_are_published_to_the_notifier() {
        let store = Store::new();
        let mut notifier = store.notifier();

        let created = store.add_alert(alert("Ada", 0)).await;
        assert!(notifier.has_changed().unwrap());
        assert_eq!(notifier.borrow_and_update().len(), 1);

        store.update_alert_status(&created.id, AlertStatus::Acknowledged).await;
        assert!(notifier.has_changed().unwrap());
        assert_eq!(notifier.borrow_and_update()[0].status, AlertStatus::Acknowledged);
    }

    #[test(tokio::test)]
    async fn set_last_known_location_overwrites_the_previous_location() {
        let store = Store::new();
        assert_eq!(store.last_known_location().await, LastKnownLocation::default());

        store
            .set_last_known_location(LastKnownLocation {
                latitude: Some(10.0),
                longitude: Some(20.0),
            })
            .await;
        store
            .set_last_known_location(LastKnownLocation {
                latitude: Some(11.0),
                longitude: None,
            })
            .await;

        assert_eq!(
            store.last_known_location().await,
            LastKnownLocation {
                latitude: Some(11.0),
                longitude: None,
            }
        );
    }
}
