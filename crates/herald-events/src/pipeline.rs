//! Turns a raw `Notify` call into a [`NotificationEventArgs`].

use std::collections::HashMap;

use tracing::debug;

use crate::action::{ButtonActionArgs, ButtonIndex, ReplyActionArgs};
use crate::event::{NotificationEventArgs, Urgency};
use crate::hints::Hint;
use crate::style::{ActiveStyleArgs, IndicatorStyleArgs, LockStyleArgs, Style};

pub struct HintKey;
impl HintKey {
    pub const URGENCY: &'static str = "urgency";
    pub const CATEGORY: &'static str = "category";
    pub const DESKTOP_ENTRY: &'static str = "desktop-entry";
    pub const RESIDENT: &'static str = "resident";
    pub const ACTION_ICONS: &'static str = "action-icons";
    pub const IMAGE_PATH: &'static str = "image-path";
    pub const IMAGE_PATH_LEGACY: &'static str = "image_path";
    pub const REPLY_PLACEHOLDER: &'static str = "x-kde-reply-placeholder-text";
    pub const REPLY_MAX: &'static str = "x-herald-reply-max";
    pub const DELETE_TIMEOUT: &'static str = "x-herald-delete-timeout";
    pub const LOCK: &'static str = "x-herald-lock";
    pub const INDICATOR: &'static str = "x-herald-indicator";
}

/// Action key that marks the inline reply instead of a button.
pub const INLINE_REPLY_ACTION: &str = "inline-reply";

/// Arguments of an `org.freedesktop.Notifications.Notify` call.
#[derive(Debug, Clone, Default)]
pub struct NotifyCall {
    pub app_name: String,
    pub replaces_id: u32,
    pub app_icon: String,
    pub summary: String,
    pub body: String,
    pub actions: Vec<String>,
    pub hints: HashMap<String, Hint>,
    /// Milliseconds; negative selects the server default, zero never expires.
    pub expire_timeout: i32,
}

/// Values applied when a call leaves a timeout to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineDefaults {
    pub hide_timeout: i32,
    pub delete_timeout: i32,
}
impl Default for PipelineDefaults {
    fn default() -> Self {
        Self {
            hide_timeout: 5,
            delete_timeout: 0,
        }
    }
}

impl NotificationEventArgs {
    pub fn from_notify(id: u32, call: NotifyCall, defaults: &PipelineDefaults) -> Self {
        let NotifyCall {
            app_name,
            app_icon,
            summary,
            body,
            actions,
            mut hints,
            expire_timeout,
            ..
        } = call;

        let app_icon = non_empty(app_icon);
        let body = non_empty(body);
        let app_id = hints
            .remove(HintKey::DESKTOP_ENTRY)
            .and_then(Hint::into_string)
            .and_then(non_empty)
            .unwrap_or(app_name);

        let mut event = NotificationEventArgs::new(id, app_id, summary);
        event.urgency = hints
            .remove(HintKey::URGENCY)
            .and_then(|h| h.as_u8())
            .map(Urgency::from)
            .unwrap_or_default();
        event.tag = hints
            .remove(HintKey::CATEGORY)
            .and_then(Hint::into_string)
            .and_then(non_empty);

        let image_path = hints.remove(HintKey::IMAGE_PATH);
        let image_path_legacy = hints.remove(HintKey::IMAGE_PATH_LEGACY);
        let background_image = image_path
            .and_then(Hint::into_string)
            .and_then(non_empty)
            .or_else(|| image_path_legacy.and_then(Hint::into_string).and_then(non_empty));

        let hide_timeout = hide_timeout_secs(expire_timeout, defaults);
        let delete_timeout = take_flag_i32(&mut hints, HintKey::DELETE_TIMEOUT)
            .unwrap_or(defaults.delete_timeout);
        let resident = take_flag_bool(&mut hints, HintKey::RESIDENT).unwrap_or(false);
        let action_icons = take_flag_bool(&mut hints, HintKey::ACTION_ICONS).unwrap_or(false);

        let (buttons, reply_button) = parse_actions(&actions, action_icons);
        let reply = reply_button.map(|(index, button)| {
            let mut reply = ReplyActionArgs::new(index, button);
            if let Some(text) = hints
                .remove(HintKey::REPLY_PLACEHOLDER)
                .and_then(Hint::into_string)
                .and_then(non_empty)
            {
                reply = reply.with_placeholder_text(text);
            }
            if let Some(max) = take_flag_i32(&mut hints, HintKey::REPLY_MAX) {
                reply = reply.with_reply_max(max);
            }
            reply
        });

        let active = buttons
            .into_iter()
            .fold(ActiveStyleArgs::builder(), |b, button| b.push_button(button))
            .auto_remove(hide_timeout > 0 && !resident)
            .background_image(background_image.clone())
            .hide_timeout(hide_timeout)
            .delete_timeout(delete_timeout)
            .reply(reply)
            .build();
        event.insert_style(active.into_args());

        if take_flag_bool(&mut hints, HintKey::LOCK).unwrap_or(false) {
            event.insert_style(LockStyleArgs::new(app_icon.clone(), background_image).into_args());
        }
        if take_flag_bool(&mut hints, HintKey::INDICATOR).unwrap_or(false) {
            event.insert_style(IndicatorStyleArgs::new(app_icon.clone(), body.clone()).into_args());
        }

        event.icon = app_icon;
        event.content = body;
        event.extra = hints.into_iter().collect();
        event
    }
}

fn non_empty(s: String) -> Option<String> {
    Some(s).filter(|s| !s.is_empty())
}

fn take_flag_bool(hints: &mut HashMap<String, Hint>, key: &str) -> Option<bool> {
    hints.remove(key).and_then(|h| h.as_bool())
}

fn take_flag_i32(hints: &mut HashMap<String, Hint>, key: &str) -> Option<i32> {
    hints.remove(key).and_then(|h| h.as_i32())
}

fn hide_timeout_secs(expire_timeout: i32, defaults: &PipelineDefaults) -> i32 {
    match expire_timeout {
        t if t < 0 => defaults.hide_timeout,
        0 => 0,
        // Round up so short timeouts do not collapse to "never".
        t => (t - 1) / 1000 + 1,
    }
}

/// Splits the flat `[key, label, key, label, ..]` list into buttons and the
/// optional inline reply. When a reply is present it keeps the last slot for
/// itself, so at most two buttons survive. Only the first reply is used.
fn parse_actions(
    actions: &[String],
    action_icons: bool,
) -> (Vec<ButtonActionArgs>, Option<(ButtonIndex, ButtonActionArgs)>) {
    let has_reply = actions
        .chunks_exact(2)
        .any(|pair| pair[0] == INLINE_REPLY_ACTION);
    let button_slots = ButtonIndex::COUNT - usize::from(has_reply);

    let mut buttons = Vec::new();
    let mut reply_label: Option<&String> = None;

    for pair in actions.chunks_exact(2) {
        let [key, label] = pair else { continue };

        if key == INLINE_REPLY_ACTION {
            if reply_label.is_some() {
                debug!(label = %label, "dropping duplicate inline reply");
            } else {
                reply_label = Some(label);
            }
            continue;
        }

        let index = match ButtonIndex::from_position(buttons.len()) {
            Some(index) if buttons.len() < button_slots => index,
            _ => {
                debug!(action = %key, "dropping action, all button slots are taken");
                continue;
            }
        };

        let mut button = ButtonActionArgs::new(index).with_action(key.as_str());
        if !label.is_empty() {
            button = button.with_text(label.as_str());
        }
        if action_icons {
            button = button.with_image_path(key.as_str());
        }
        buttons.push(button);
    }

    let reply = reply_label.and_then(|label| {
        let index = ButtonIndex::from_position(buttons.len())?;
        let mut button = ButtonActionArgs::new(index).with_action(INLINE_REPLY_ACTION);
        if !label.is_empty() {
            button = button.with_text(label.as_str());
        }
        Some((index, button))
    });

    (buttons, reply)
}
