use std::collections::HashMap;

use herald_events::action::ButtonIndex;
use herald_events::event::NotificationEventArgs;
use herald_events::hints::Hint;
use herald_events::pipeline::{HintKey, INLINE_REPLY_ACTION, NotifyCall, PipelineDefaults};
use herald_events::style::{ActiveStyleArgs, Style, StyleArgs};

fn notify(actions: &[&str], hints: HashMap<String, Hint>, expire_timeout: i32) -> NotificationEventArgs {
    let call = NotifyCall {
        app_name: "chat".into(),
        app_icon: "chat-icon".into(),
        summary: "Alice".into(),
        body: "are you around?".into(),
        actions: actions.iter().map(|a| a.to_string()).collect(),
        hints,
        expire_timeout,
        ..Default::default()
    };
    NotificationEventArgs::from_notify(42, call, &PipelineDefaults::default())
}

#[test]
fn fresh_record_is_empty() {
    let style = ActiveStyleArgs::new();
    assert_eq!(style.button().len(), 0);
    assert_eq!(style.key(), "Active");
    assert_eq!(ActiveStyleArgs::KEY, "Active");
    assert_eq!(style.hide_timeout(), 0);
    assert_eq!(style.delete_timeout(), 0);
    assert!(style.reply().is_none());
}

#[test]
fn lookup_by_key_and_by_type_agree() {
    let event = notify(&[], HashMap::new(), -1);

    let by_key = match event.style("Active") {
        Some(StyleArgs::Active(style)) => style,
        other => panic!("unexpected style {:?}", other),
    };
    assert_eq!(Some(by_key), event.get_style::<ActiveStyleArgs>());
    assert_eq!(event.style("Active").map(StyleArgs::key), Some("Active"));
}

#[test]
fn chat_message_with_buttons_and_reply() {
    let hints = HashMap::from([
        (HintKey::DELETE_TIMEOUT.to_string(), Hint::Int(60)),
        (HintKey::IMAGE_PATH.to_string(), Hint::Str("/home/alice/avatar.png".into())),
    ]);
    let event = notify(
        &["mark-read", "Mark read", "mute", "Mute", INLINE_REPLY_ACTION, "Reply"],
        hints,
        30_000,
    );
    let style = event.get_style::<ActiveStyleArgs>().unwrap();

    assert!(style.is_auto_remove());
    assert_eq!(style.hide_timeout(), 30);
    assert_eq!(style.delete_timeout(), 60);
    assert_eq!(style.background_image(), Some("/home/alice/avatar.png"));

    assert_eq!(style.button().len(), 2);
    assert_eq!(style.button()[0].text(), Some("Mark read"));
    assert_eq!(style.button()[1].text(), Some("Mute"));
    assert_eq!(style.button()[1].index(), ButtonIndex::Second);

    let reply = style.reply().unwrap();
    assert_eq!(reply.parent_index(), ButtonIndex::Third);
    assert_eq!(reply.button().action(), Some(INLINE_REPLY_ACTION));
}

#[test]
fn reply_stays_unset_without_reply_action() {
    let event = notify(&["ok", "OK"], HashMap::new(), -1);
    assert!(event.get_style::<ActiveStyleArgs>().unwrap().reply().is_none());
}
