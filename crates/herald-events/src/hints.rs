use serde::{Deserialize, Serialize};

/// A notify hint value reduced to the shapes the pipeline understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    Bool(bool),
    Byte(u8),
    Int(i64),
    UInt(u64),
    Str(String),
}
impl Hint {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Byte(b) => Some(*b != 0),
            _ => None,
        }
    }
    pub fn as_u8(&self) -> Option<u8> {
        match self {
            Self::Byte(b) => Some(*b),
            Self::Int(i) => u8::try_from(*i).ok(),
            Self::UInt(u) => u8::try_from(*u).ok(),
            _ => None,
        }
    }
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Self::Byte(b) => Some(i32::from(*b)),
            Self::Int(i) => i32::try_from(*i).ok(),
            Self::UInt(u) => i32::try_from(*u).ok(),
            _ => None,
        }
    }
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
    pub fn into_string(self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(feature = "daemon")]
mod dbus {
    use zbus::zvariant::{OwnedValue, Value};

    use super::Hint;

    impl Hint {
        /// Converts a D-Bus variant. Containers, file descriptors and
        /// floating point values have no hint shape and yield `None`.
        pub fn from_value(value: &OwnedValue) -> Option<Self> {
            Self::from_variant(value)
        }

        fn from_variant(value: &Value<'_>) -> Option<Self> {
            let hint = match value {
                Value::Bool(b) => Hint::Bool(*b),
                Value::U8(b) => Hint::Byte(*b),
                Value::I16(i) => Hint::Int(i64::from(*i)),
                Value::I32(i) => Hint::Int(i64::from(*i)),
                Value::I64(i) => Hint::Int(*i),
                Value::U16(u) => Hint::UInt(u64::from(*u)),
                Value::U32(u) => Hint::UInt(u64::from(*u)),
                Value::U64(u) => Hint::UInt(*u),
                Value::Str(s) => Hint::Str(s.to_string()),
                Value::ObjectPath(p) => Hint::Str(p.to_string()),
                Value::Value(inner) => return Self::from_variant(inner),
                _ => return None,
            };
            Some(hint)
        }
    }
}
