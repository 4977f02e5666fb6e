use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use crate::hints::Hint;
use crate::style::{Style, StyleArgs};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, AsRefStr, Display)]
pub enum Urgency {
    Low = 0,
    #[default]
    Normal = 1,
    Critical = 2,
}
impl From<u8> for Urgency {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Low,
            2 => Self::Critical,
            _ => Self::Normal,
        }
    }
}

/// A received notification together with the style payloads it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationEventArgs {
    pub(crate) unique_number: u32,
    pub(crate) app_id: String,
    pub(crate) title: String,
    pub(crate) content: Option<String>,
    pub(crate) icon: Option<String>,
    pub(crate) tag: Option<String>,
    pub(crate) time: DateTime<Utc>,
    pub(crate) urgency: Urgency,
    pub(crate) styles: BTreeMap<String, StyleArgs>,
    pub(crate) extra: BTreeMap<String, Hint>,
}
impl NotificationEventArgs {
    pub(crate) fn new(unique_number: u32, app_id: String, title: String) -> Self {
        Self {
            unique_number,
            app_id,
            title,
            content: None,
            icon: None,
            tag: None,
            time: Utc::now(),
            urgency: Urgency::default(),
            styles: BTreeMap::new(),
            extra: BTreeMap::new(),
        }
    }

    /// Stores `style` under its key, replacing a previous style of the same kind.
    pub(crate) fn insert_style(&mut self, style: StyleArgs) -> Option<StyleArgs> {
        self.styles.insert(style.key().to_string(), style)
    }

    pub fn unique_number(&self) -> u32 {
        self.unique_number
    }
    pub fn app_id(&self) -> &str {
        &self.app_id
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }
    pub fn urgency(&self) -> Urgency {
        self.urgency
    }
    pub fn extra(&self) -> &BTreeMap<String, Hint> {
        &self.extra
    }

    pub fn style(&self, key: &str) -> Option<&StyleArgs> {
        self.styles.get(key)
    }
    pub fn style_keys(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// ```
    /// # use herald_events::{event::NotificationEventArgs, style::ActiveStyleArgs};
    /// fn hide_after(event: &NotificationEventArgs) -> Option<i32> {
    ///     event.get_style::<ActiveStyleArgs>().map(|s| s.hide_timeout())
    /// }
    /// ```
    pub fn get_style<T: Style>(&self) -> Option<&T> {
        self.style(T::KEY).and_then(T::from_args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{ActiveStyleArgs, LockStyleArgs};

    #[test]
    fn styles_are_keyed_by_variant() {
        let mut event = NotificationEventArgs::new(1, "mail".into(), "New mail".into());
        event.insert_style(ActiveStyleArgs::new().into_args());
        event.insert_style(LockStyleArgs::new(Some("/icons/mail.png".into()), None).into_args());

        assert!(event.style("Active").is_some());
        assert_eq!(event.style_keys().collect::<Vec<_>>(), ["Active", "Lock"]);
        assert_eq!(
            event.get_style::<LockStyleArgs>().and_then(|s| s.icon_path()),
            Some("/icons/mail.png")
        );
    }

    #[test]
    fn inserting_same_kind_replaces() {
        let mut event = NotificationEventArgs::new(1, "mail".into(), "New mail".into());
        assert!(event.insert_style(ActiveStyleArgs::new().into_args()).is_none());
        let replaced = ActiveStyleArgs::builder().hide_timeout(9).build().into_args();
        assert!(event.insert_style(replaced).is_some());
        assert_eq!(
            event.get_style::<ActiveStyleArgs>().map(|s| s.hide_timeout()),
            Some(9)
        );
    }

    #[test]
    fn missing_style_is_none() {
        let event = NotificationEventArgs::new(1, "mail".into(), "New mail".into());
        assert!(event.get_style::<ActiveStyleArgs>().is_none());
        assert!(event.style("Basic").is_none());
    }

    #[test]
    fn urgency_from_byte() {
        assert_eq!(Urgency::from(0), Urgency::Low);
        assert_eq!(Urgency::from(2), Urgency::Critical);
        assert_eq!(Urgency::from(9), Urgency::Normal);
    }
}
