use std::path::Path;
use std::sync::Arc;

use herald_events::errors::{HeraldError, HeraldErrorKind};
use herald_events::framing::{AsyncSizedRead, AsyncSizedWrite, SizedMessageObj, decode};
use herald_events::herald_err;
use herald_events::listener;
use herald_events::protocol::{CloseReason, IntoResponse, Request, Response};
use herald_events::store::EventStore;
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use zbus::Connection;

#[derive(Clone)]
pub struct SocketServer {
    store: Arc<RwLock<EventStore>>,
    conn: Connection,
}
impl SocketServer {
    pub fn new(store: Arc<RwLock<EventStore>>, conn: Connection) -> Self {
        Self { store, conn }
    }

    pub async fn run(self, socket_path: &Path) -> Result<(), HeraldError> {
        let _ = std::fs::remove_file(socket_path);
        let listener = UnixListener::bind(socket_path)
            .map_err(|e| herald_err!(HeraldErrorKind::StreamBind, e.to_string()))?;
        info!(path = %socket_path.display(), "socket listening");

        loop {
            let (stream, _) = listener
                .accept()
                .await
                .map_err(|e| herald_err!(HeraldErrorKind::StreamConnect, e.to_string()))?;
            let server = self.clone();
            tokio::spawn(async move { server.serve_client(stream).await });
        }
    }

    async fn serve_client(&self, mut stream: UnixStream) {
        loop {
            let buf = match stream.read_sized().await {
                Ok(b) => b,
                // Client disconnected
                Err(_) => break,
            };

            let resp = match decode::<Request>(&buf) {
                Ok(req) => self.handle(req).await,
                Err(e) => Response::Error(e.message),
            };

            let out = match SizedMessageObj::from_struct(&resp) {
                Ok(o) => o,
                Err(e) => {
                    warn!(error = %e, "failed to encode response");
                    break;
                }
            };
            if stream.write_sized(out).await.is_err() {
                break;
            }
        }
        debug!("client disconnected");
    }

    async fn handle(&self, req: Request) -> Response {
        match req {
            Request::Dismiss(id) => self.dismiss(id).await.into_response(),
            Request::InvokeAction { id, key } => self.invoke_action(id, &key).await.into_response(),
            Request::Reply { id, text } => self.reply(id, &text).await.into_response(),
            query => answer_query(&*self.store.read().await, query),
        }
    }

    async fn dismiss(&self, id: u32) -> Result<(), HeraldError> {
        self.store.write().await.dismiss(id)?;
        listener::emit_closed(&self.conn, id, CloseReason::Dismissed).await
    }

    async fn invoke_action(&self, id: u32, key: &str) -> Result<(), HeraldError> {
        if !self.store.read().await.is_pending(id) {
            return Err(herald_err!(HeraldErrorKind::UnknownEvent, "no pending event {}", id));
        }
        listener::emit_action(&self.conn, id, key).await
    }

    async fn reply(&self, id: u32, text: &str) -> Result<(), HeraldError> {
        if !self.store.read().await.is_pending(id) {
            return Err(herald_err!(HeraldErrorKind::UnknownEvent, "no pending event {}", id));
        }
        listener::emit_reply(&self.conn, id, text).await
    }
}

/// Answers the requests that only read the store.
fn answer_query(store: &EventStore, req: Request) -> Response {
    match req {
        Request::Ping => Response::Pong,
        Request::GetStatus => Response::Status {
            running: true,
            pending: store.pending_count() as u32,
        },
        Request::Event(id) => Response::Event(store.get(id).cloned()),
        Request::PendingEvents => Response::Events(store.pending()),
        other => Response::Error(format!("{:?} needs the bus connection", other)),
    }
}
