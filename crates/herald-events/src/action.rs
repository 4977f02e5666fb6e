use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

/// Slot a button occupies inside an active notification.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, EnumIter, AsRefStr)]
pub enum ButtonIndex {
    First = 0,
    Second = 1,
    Third = 2,
}
impl ButtonIndex {
    pub const COUNT: usize = 3;

    pub fn from_position(position: usize) -> Option<Self> {
        match position {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            2 => Some(Self::Third),
            _ => None,
        }
    }
}

/// A clickable action rendered inside the notification body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonActionArgs {
    index: ButtonIndex,
    text: Option<String>,
    image_path: Option<String>,
    action: Option<String>,
}
impl ButtonActionArgs {
    pub(crate) fn new(index: ButtonIndex) -> Self {
        Self {
            index,
            text: None,
            image_path: None,
            action: None,
        }
    }
    pub(crate) fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
    pub(crate) fn with_image_path(mut self, path: impl Into<String>) -> Self {
        self.image_path = Some(path.into());
        self
    }
    pub(crate) fn with_action(mut self, key: impl Into<String>) -> Self {
        self.action = Some(key.into());
        self
    }

    pub fn index(&self) -> ButtonIndex {
        self.index
    }
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
    pub fn image_path(&self) -> Option<&str> {
        self.image_path.as_deref()
    }
    /// The key reported back through `ActionInvoked` when the button is pressed.
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }
}

/// Inline text reply attached to an active notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyActionArgs {
    parent_index: ButtonIndex,
    button: ButtonActionArgs,
    placeholder_text: Option<String>,
    reply_max: i32,
}
impl ReplyActionArgs {
    pub(crate) fn new(parent_index: ButtonIndex, button: ButtonActionArgs) -> Self {
        Self {
            parent_index,
            button,
            placeholder_text: None,
            reply_max: 0,
        }
    }
    pub(crate) fn with_placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text = Some(text.into());
        self
    }
    pub(crate) fn with_reply_max(mut self, max: i32) -> Self {
        self.reply_max = max;
        self
    }

    pub fn parent_index(&self) -> ButtonIndex {
        self.parent_index
    }
    pub fn button(&self) -> &ButtonActionArgs {
        &self.button
    }
    pub fn placeholder_text(&self) -> Option<&str> {
        self.placeholder_text.as_deref()
    }
    /// Maximum reply length in characters, 0 for unlimited.
    pub fn reply_max(&self) -> i32 {
        self.reply_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn positions_map_to_slots() {
        let slots: Vec<_> = (0..4).map(ButtonIndex::from_position).collect();
        assert_eq!(
            slots,
            vec![
                Some(ButtonIndex::First),
                Some(ButtonIndex::Second),
                Some(ButtonIndex::Third),
                None
            ]
        );
        assert_eq!(ButtonIndex::iter().count(), ButtonIndex::COUNT);
    }

    #[test]
    fn reply_defaults_to_unlimited() {
        let button = ButtonActionArgs::new(ButtonIndex::Second).with_text("Reply");
        let reply = ReplyActionArgs::new(ButtonIndex::Second, button);
        assert_eq!(reply.reply_max(), 0);
        assert_eq!(reply.placeholder_text(), None);
        assert_eq!(reply.button().text(), Some("Reply"));
        assert_eq!(reply.parent_index(), ButtonIndex::Second);
    }
}
