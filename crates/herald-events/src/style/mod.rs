mod active;
mod indicator;
mod lock;

pub use active::ActiveStyleArgs;
pub use indicator::IndicatorStyleArgs;
pub use lock::LockStyleArgs;

use serde::{Deserialize, Serialize};

/// Every style payload a notification event can carry, tagged by its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleArgs {
    Active(ActiveStyleArgs),
    Lock(LockStyleArgs),
    Indicator(IndicatorStyleArgs),
}
impl StyleArgs {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Active(_) => ActiveStyleArgs::KEY,
            Self::Lock(_) => LockStyleArgs::KEY,
            Self::Indicator(_) => IndicatorStyleArgs::KEY,
        }
    }
}

/// Typed access to a single [`StyleArgs`] variant.
pub trait Style: Sized {
    const KEY: &'static str;

    fn from_args(args: &StyleArgs) -> Option<&Self>;
    fn into_args(self) -> StyleArgs;

    fn key(&self) -> &'static str {
        Self::KEY
    }
}

macro_rules! impl_style {
    ($ty:ty, $variant:ident, $key:literal) => {
        impl Style for $ty {
            const KEY: &'static str = $key;

            fn from_args(args: &StyleArgs) -> Option<&Self> {
                match args {
                    StyleArgs::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
            fn into_args(self) -> StyleArgs {
                StyleArgs::$variant(self)
            }
        }
    };
}

impl_style!(ActiveStyleArgs, Active, "Active");
impl_style!(LockStyleArgs, Lock, "Lock");
impl_style!(IndicatorStyleArgs, Indicator, "Indicator");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_keys() {
        assert_eq!(StyleArgs::Active(ActiveStyleArgs::new()).key(), "Active");
        assert_eq!(StyleArgs::Lock(LockStyleArgs::default()).key(), "Lock");
        assert_eq!(
            StyleArgs::Indicator(IndicatorStyleArgs::default()).key(),
            "Indicator"
        );
    }

    #[test]
    fn from_args_matches_only_own_variant() {
        let args = ActiveStyleArgs::new().into_args();
        assert!(ActiveStyleArgs::from_args(&args).is_some());
        assert!(LockStyleArgs::from_args(&args).is_none());
        assert!(IndicatorStyleArgs::from_args(&args).is_none());
    }
}
