use crate::domain::{Alert, AlertStatus};
use tokio::sync::watch::Receiver;
use tracing::{info, instrument};

#[derive(Default, Debug, PartialEq)]
pub struct AlertSummary {
    pub active: usize,
    pub acknowledged: usize,
    pub resolved: usize,
}

impl AlertSummary {
    pub fn of(alerts: &[Alert]) -> Self {
        alerts.iter().fold(AlertSummary::default(), |mut summary, alert| {
            match alert.status {
                AlertStatus::Active => summary.active += 1,
                AlertStatus::Acknowledged => summary.acknowledged += 1,
                AlertStatus::Resolved => summary.resolved += 1,
            }
            summary
        })
    }
}

/// Logs a summary of the alerts every time the store publishes a change. Ends when the store is dropped.
#[instrument(skip_all)]
pub async fn alert_listener(mut rx: Receiver<Vec<Alert>>) {
    while rx.changed().await.is_ok() {
        let summary = AlertSummary::of(&rx.borrow_and_update());
        info!(
            active = summary.active,
            acknowledged = summary.acknowledged,
            resolved = summary.resolved,
            "📋 {} alert(s) need attention",
            summary.active + summary.acknowledged
        );
    }
}
