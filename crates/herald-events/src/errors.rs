use std::fmt::Display;

#[macro_export]
macro_rules! herald_err {
    // Case with just a message literal
    ($kind:expr, $msg:expr) => {
        $crate::errors::HeraldError {
            kind: $kind,
            message: $msg.into(),
            file: file!(),
            line: line!(),
        }
    };
    // Case with message + format arguments
    ($kind:expr, $fmt:expr, $($args:tt)*) => {
        $crate::errors::HeraldError {
            kind: $kind,
            message: format!($fmt, $($args)*),
            file: file!(),
            line: line!(),
        }
    };
}

#[derive(Debug)]
pub struct HeraldError {
    pub kind: HeraldErrorKind,
    pub message: String,
    pub file: &'static str,
    pub line: u32,
}
impl Display for HeraldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?}: {} ({}:{})",
            self.kind, self.message, self.file, self.line
        )
    }
}
impl std::error::Error for HeraldError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeraldErrorKind {
    Serialize,
    Deserialize,

    InvalidData,
    UnknownEvent,

    FileOpen,
    FileRead,

    DirRead,
    DirCreate,

    StreamRead,
    StreamWrite,
    StreamBind,
    StreamConnect,

    DBusConnect,
    DBusSignal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_records_location() {
        let err = herald_err!(HeraldErrorKind::InvalidData, "bad frame");
        assert_eq!(err.kind, HeraldErrorKind::InvalidData);
        assert_eq!(err.message, "bad frame");
        assert!(err.file.ends_with("errors.rs"));
        assert!(err.line > 0);
    }

    #[test]
    fn macro_formats_arguments() {
        let err = herald_err!(HeraldErrorKind::UnknownEvent, "no event with id {}", 7);
        assert_eq!(err.message, "no event with id 7");
        assert!(err.to_string().starts_with("UnknownEvent: no event with id 7"));
    }
}
