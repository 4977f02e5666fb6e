use serde::{Deserialize, Serialize};

/// Style payload for the status bar ticker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorStyleArgs {
    icon_path: Option<String>,
    sub_text: Option<String>,
}
impl IndicatorStyleArgs {
    pub(crate) fn new(icon_path: Option<String>, sub_text: Option<String>) -> Self {
        Self {
            icon_path,
            sub_text,
        }
    }

    pub fn icon_path(&self) -> Option<&str> {
        self.icon_path.as_deref()
    }
    pub fn sub_text(&self) -> Option<&str> {
        self.sub_text.as_deref()
    }
}
