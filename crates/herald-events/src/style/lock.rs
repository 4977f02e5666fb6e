use serde::{Deserialize, Serialize};

/// Style payload shown on the lock screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockStyleArgs {
    icon_path: Option<String>,
    thumbnail_path: Option<String>,
}
impl LockStyleArgs {
    pub(crate) fn new(icon_path: Option<String>, thumbnail_path: Option<String>) -> Self {
        Self {
            icon_path,
            thumbnail_path,
        }
    }

    pub fn icon_path(&self) -> Option<&str> {
        self.icon_path.as_deref()
    }
    pub fn thumbnail_path(&self) -> Option<&str> {
        self.thumbnail_path.as_deref()
    }
}
