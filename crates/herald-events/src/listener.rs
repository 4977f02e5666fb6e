use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use zbus::object_server::SignalEmitter;
use zbus::zvariant::OwnedValue;
use zbus::{Connection, interface};

use crate::errors::{HeraldError, HeraldErrorKind};
use crate::event::NotificationEventArgs;
use crate::herald_err;
use crate::hints::Hint;
use crate::pipeline::{NotifyCall, PipelineDefaults};
use crate::protocol::CloseReason;
use crate::store::EventStore;
use crate::style::ActiveStyleArgs;

pub const BUS_NAME: &str = "org.freedesktop.Notifications";
pub const OBJECT_PATH: &str = "/org/freedesktop/Notifications";

const SPEC_VERSION: &str = "1.2";

#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub name: String,
    pub vendor: String,
    pub version: String,
}

pub struct DaemonHandle {
    store: Arc<RwLock<EventStore>>,
    defaults: PipelineDefaults,
    info: ServerInfo,
}
impl DaemonHandle {
    pub fn new(store: Arc<RwLock<EventStore>>, defaults: PipelineDefaults, info: ServerInfo) -> Self {
        Self {
            store,
            defaults,
            info,
        }
    }
}

#[interface(name = "org.freedesktop.Notifications")]
impl DaemonHandle {
    #[allow(clippy::too_many_arguments)]
    async fn notify(
        &mut self,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
        app_name: String,
        replaces_id: u32,
        app_icon: String,
        summary: String,
        body: String,
        actions: Vec<String>,
        hints: HashMap<String, OwnedValue>,
        expire_timeout: i32,
    ) -> u32 {
        let hints = hints
            .into_iter()
            .filter_map(|(k, v)| Hint::from_value(&v).map(|h| (k, h)))
            .collect();
        let call = NotifyCall {
            app_name,
            replaces_id,
            app_icon,
            summary,
            body,
            actions,
            hints,
            expire_timeout,
        };

        let mut store = self.store.write().await;
        let id = store.assign_id(replaces_id);
        let event = NotificationEventArgs::from_notify(id, call, &self.defaults);
        debug!(id, app = %event.app_id(), "notification received");

        let expiry = event
            .get_style::<ActiveStyleArgs>()
            .filter(|s| s.is_auto_remove() && s.hide_timeout() > 0)
            .map(|s| Duration::from_secs(s.hide_timeout() as u64));

        let serial = store.insert(event);
        drop(store);

        if let Some(after) = expiry {
            let store = Arc::clone(&self.store);
            let emitter = emitter.to_owned();
            tokio::spawn(async move {
                tokio::time::sleep(after).await;
                if store.write().await.expire(id, serial).is_some() {
                    debug!(id, "notification expired");
                    if let Err(e) =
                        Self::notification_closed(&emitter, id, CloseReason::Expired as u32).await
                    {
                        warn!(id, error = %e, "failed to emit NotificationClosed");
                    }
                }
            });
        }

        id
    }

    async fn close_notification(
        &self,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
        id: u32,
    ) -> zbus::fdo::Result<()> {
        let dismissed = self.store.write().await.dismiss(id);
        match dismissed {
            Ok(_) => {
                Self::notification_closed(&emitter, id, CloseReason::Closed as u32).await?;
            }
            Err(e) => debug!(id, error = %e, "close requested for unknown notification"),
        }
        Ok(())
    }

    fn get_server_information(&self) -> (String, String, String, String) {
        (
            self.info.name.clone(),
            self.info.vendor.clone(),
            self.info.version.clone(),
            SPEC_VERSION.into(),
        )
    }

    fn get_capabilities(&self) -> Vec<String> {
        vec![
            "body".into(),
            "actions".into(),
            "action-icons".into(),
            "inline-reply".into(),
            "persistence".into(),
        ]
    }

    #[zbus(signal)]
    async fn notification_closed(emitter: &SignalEmitter<'_>, id: u32, reason: u32) -> zbus::Result<()>;

    #[zbus(signal)]
    async fn action_invoked(emitter: &SignalEmitter<'_>, id: u32, action_key: &str) -> zbus::Result<()>;

    #[zbus(signal)]
    async fn notification_replied(emitter: &SignalEmitter<'_>, id: u32, text: &str) -> zbus::Result<()>;
}

/// Claims the notification bus name and serves `handle` on the session bus.
pub async fn serve(handle: DaemonHandle) -> Result<Connection, HeraldError> {
    let conn = zbus::connection::Builder::session()
        .and_then(|b| b.name(BUS_NAME))
        .and_then(|b| b.serve_at(OBJECT_PATH, handle))
        .map_err(|e| herald_err!(HeraldErrorKind::DBusConnect, e.to_string()))?
        .build()
        .await
        .map_err(|e| herald_err!(HeraldErrorKind::DBusConnect, e.to_string()))?;
    info!(name = BUS_NAME, "listening for notifications");
    Ok(conn)
}

fn emitter(conn: &Connection) -> Result<SignalEmitter<'_>, HeraldError> {
    SignalEmitter::new(conn, OBJECT_PATH)
        .map_err(|e| herald_err!(HeraldErrorKind::DBusSignal, e.to_string()))
}

pub async fn emit_closed(conn: &Connection, id: u32, reason: CloseReason) -> Result<(), HeraldError> {
    DaemonHandle::notification_closed(&emitter(conn)?, id, reason as u32)
        .await
        .map_err(|e| herald_err!(HeraldErrorKind::DBusSignal, e.to_string()))
}

pub async fn emit_action(conn: &Connection, id: u32, key: &str) -> Result<(), HeraldError> {
    DaemonHandle::action_invoked(&emitter(conn)?, id, key)
        .await
        .map_err(|e| herald_err!(HeraldErrorKind::DBusSignal, e.to_string()))
}

pub async fn emit_reply(conn: &Connection, id: u32, text: &str) -> Result<(), HeraldError> {
    DaemonHandle::notification_replied(&emitter(conn)?, id, text)
        .await
        .map_err(|e| herald_err!(HeraldErrorKind::DBusSignal, e.to_string()))
}
