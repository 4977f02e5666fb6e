use serde::{Deserialize, Serialize};

use crate::errors::HeraldError;
use crate::event::NotificationEventArgs;

pub struct SocketData;
impl SocketData {
    pub const SOCKET_ADDR: &'static str = "/tmp/herald.sock";
}

/// Why a notification left the screen, as reported by `NotificationClosed`.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloseReason {
    Expired = 1,
    Dismissed = 2,
    Closed = 3,
    Undefined = 4,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum Request {
    Ping,
    GetStatus,
    Event(u32),
    PendingEvents,
    Dismiss(u32),
    InvokeAction { id: u32, key: String },
    Reply { id: u32, text: String },
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub enum Response {
    Ok,
    Error(String),
    Pong,
    Status { running: bool, pending: u32 },
    Event(Option<NotificationEventArgs>),
    Events(Vec<NotificationEventArgs>),
}

pub trait IntoResponse {
    fn into_response(self) -> Response;
}
impl<E> IntoResponse for Result<E, HeraldError> {
    fn into_response(self) -> Response {
        match self {
            Ok(_) => Response::Ok,
            Err(e) => Response::Error(e.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HeraldErrorKind;
    use crate::framing::{SizedMessageObj, decode};
    use crate::herald_err;
    use crate::pipeline::{NotifyCall, PipelineDefaults};
    use crate::style::ActiveStyleArgs;

    #[test]
    fn errors_become_error_responses() {
        let err: Result<(), HeraldError> =
            Err(herald_err!(HeraldErrorKind::UnknownEvent, "no event 3"));
        assert!(matches!(err.into_response(), Response::Error(m) if m == "no event 3"));
        assert!(matches!(Ok::<_, HeraldError>(1).into_response(), Response::Ok));
    }

    #[test]
    fn events_cross_the_wire_with_styles() {
        let call = NotifyCall {
            app_name: "mailer".into(),
            summary: "New mail".into(),
            actions: vec!["open".into(), "Open".into()],
            expire_timeout: 30_000,
            ..Default::default()
        };
        let event = NotificationEventArgs::from_notify(9, call, &PipelineDefaults::default());

        let msg = SizedMessageObj::from_struct(&Response::Event(Some(event.clone()))).unwrap();
        let Response::Event(Some(decoded)) = decode::<Response>(msg.bytes()).unwrap() else {
            panic!("expected an event response");
        };

        assert_eq!(decoded, event);
        let style = decoded.get_style::<ActiveStyleArgs>().unwrap();
        assert_eq!(style.hide_timeout(), 30);
        assert_eq!(style.button()[0].action(), Some("open"));
    }
}
