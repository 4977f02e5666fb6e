use serde::{Deserialize, Serialize};

use crate::action::{ButtonActionArgs, ReplyActionArgs};

/// Style payload of an active (banner) notification.
///
/// Instances are produced by the event pipeline and are read-only for
/// everyone else. Absent values are reported as `None`, `0` or an empty
/// button list; nothing is validated.
///
/// ```
/// use herald_events::style::{ActiveStyleArgs, Style};
///
/// let style = ActiveStyleArgs::new();
/// assert_eq!(style.key(), ActiveStyleArgs::KEY);
/// assert!(style.button().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveStyleArgs {
    is_auto_remove: bool,
    background_image: Option<String>,
    hide_timeout: i32,
    delete_timeout: i32,
    button: Vec<ButtonActionArgs>,
    reply: Option<ReplyActionArgs>,
}
impl ActiveStyleArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn builder() -> ActiveStyleArgsBuilder {
        ActiveStyleArgsBuilder {
            inner: Self::new(),
        }
    }

    /// When false the notification stays until the user or the sender removes it.
    pub fn is_auto_remove(&self) -> bool {
        self.is_auto_remove
    }
    /// Absolute path of the image drawn behind the notification.
    pub fn background_image(&self) -> Option<&str> {
        self.background_image.as_deref()
    }
    /// Seconds until the notification can be hidden from the viewer.
    pub fn hide_timeout(&self) -> i32 {
        self.hide_timeout
    }
    /// Seconds until the notification can be deleted from the viewer.
    pub fn delete_timeout(&self) -> i32 {
        self.delete_timeout
    }
    pub fn button(&self) -> &[ButtonActionArgs] {
        &self.button
    }
    pub fn reply(&self) -> Option<&ReplyActionArgs> {
        self.reply.as_ref()
    }
}

pub(crate) struct ActiveStyleArgsBuilder {
    inner: ActiveStyleArgs,
}
impl ActiveStyleArgsBuilder {
    pub fn auto_remove(mut self, value: bool) -> Self {
        self.inner.is_auto_remove = value;
        self
    }
    pub fn background_image(mut self, path: Option<String>) -> Self {
        self.inner.background_image = path;
        self
    }
    pub fn hide_timeout(mut self, secs: i32) -> Self {
        self.inner.hide_timeout = secs;
        self
    }
    pub fn delete_timeout(mut self, secs: i32) -> Self {
        self.inner.delete_timeout = secs;
        self
    }
    pub fn push_button(mut self, button: ButtonActionArgs) -> Self {
        self.inner.button.push(button);
        self
    }
    pub fn reply(mut self, reply: Option<ReplyActionArgs>) -> Self {
        self.inner.reply = reply;
        self
    }
    pub fn build(self) -> ActiveStyleArgs {
        self.inner
    }
}
