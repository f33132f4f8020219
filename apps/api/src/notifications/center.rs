use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::notification::{NewNotification, Notification, NotificationKind};

/// How long a `success` notification stays before it removes itself.
pub const SUCCESS_TTL: Duration = Duration::from_secs(5);

/// Shared, newest-first list of notifications. Clones share storage.
#[derive(Clone)]
pub struct NotificationCenter {
    items: Arc<RwLock<Vec<Notification>>>,
    success_ttl: Duration,
}

impl NotificationCenter {
    pub fn new(seed: Vec<Notification>) -> Self {
        Self {
            items: Arc::new(RwLock::new(seed)),
            success_ttl: SUCCESS_TTL,
        }
    }

    pub async fn list(&self) -> Vec<Notification> {
        self.items.read().await.clone()
    }

    pub async fn unread_count(&self) -> usize {
        self.items.read().await.iter().filter(|n| !n.read).count()
    }

    /// Stores a new unread notification at the front. `success` notifications
    /// expire on their own after `SUCCESS_TTL`.
    pub async fn add(&self, new: NewNotification) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            message: new.message,
            kind: new.kind,
            read: false,
            created_at: Utc::now(),
            action_url: new.action_url,
            action_label: new.action_label,
            user_id: new.user_id,
            category: new.category,
        };

        self.items.write().await.insert(0, notification.clone());

        if notification.kind == NotificationKind::Success {
            let center = self.clone();
            let id = notification.id.clone();
            let ttl = self.success_ttl;
            tokio::spawn(async move {
                tokio::time::sleep(ttl).await;
                if center.remove(&id).await {
                    debug!("Expired success notification {id}");
                }
            });
        }

        notification
    }

    /// Returns false when no notification has this id.
    pub async fn mark_read(&self, id: &str) -> bool {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub async fn mark_all_read(&self) {
        for n in self.items.write().await.iter_mut() {
            n.read = true;
        }
    }

    /// Returns false when no notification has this id.
    pub async fn remove(&self, id: &str) -> bool {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|n| n.id != id);
        items.len() != before
    }

    pub async fn clear(&self) {
        self.items.write().await.clear();
    }
}
