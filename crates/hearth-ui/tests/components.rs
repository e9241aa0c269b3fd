//! Headless renders of the sheet and reaction bar through a `VirtualDom`.

use dioxus::prelude::*;
use hearth_ui::{
    ActionSheetHandle, Author, ChatMessage, MessageActionSheet, ReactionBar, ReactionOption,
    ReactionSet, UserId, use_action_sheet,
};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn sheet_for(sheet: ActionSheetHandle, author: &str, reactions: ReactionSet) -> Element {
    rsx! {
        div { id: "host",
            MessageActionSheet {
                sheet,
                message: ChatMessage::new("m1", Author::new(author, author), "hi"),
                current_user_id: UserId::from("u1"),
                on_edit: move |_| {},
                on_delete: move |_| {},
                on_open_thread: move |_| {},
                set_action_sheet_visible: move |_: bool| {},
                supported_reactions: reactions,
                on_reaction: move |_: String| {},
            }
        }
    }
}

#[component]
fn HiddenSheet() -> Element {
    let sheet = use_action_sheet();
    sheet_for(sheet, "u1", ReactionSet::standard())
}

#[component]
fn OwnMessageSheet() -> Element {
    let visible = use_signal(|| true);
    sheet_for(ActionSheetHandle::new(visible), "u1", ReactionSet::standard())
}

#[component]
fn OtherMessageSheet() -> Element {
    let visible = use_signal(|| true);
    sheet_for(ActionSheetHandle::new(visible), "u2", ReactionSet::default())
}

#[component]
fn EmptyBar() -> Element {
    rsx! {
        div { id: "bar-host",
            ReactionBar { reactions: ReactionSet::default(), on_reaction: move |_: String| {} }
        }
    }
}

#[component]
fn LikeLoveBar() -> Element {
    let reactions = ReactionSet::new(vec![
        ReactionOption::new("like", "👍"),
        ReactionOption::new("love", "❤️"),
    ]);
    rsx! {
        ReactionBar { reactions, on_reaction: move |_: String| {} }
    }
}

#[test]
fn test_hidden_sheet_renders_nothing() {
    let html = render(HiddenSheet);

    assert!(html.contains(r#"id="host""#));
    assert!(!html.contains("action-sheet"));
    assert!(!html.contains("reaction-chip"));
}

#[test]
fn test_visible_sheet_for_author() {
    let html = render(OwnMessageSheet);

    assert!(html.contains("action-sheet-backdrop"));
    for title in ["Edit Message", "Delete message", "Copy Text", "Reply in Thread", "Cancel"] {
        assert!(
            html.contains(&format!(r#"data-testid="action-sheet-item-{title}""#)),
            "missing row {title}"
        );
    }
    assert!(html.contains("action-sheet-item-destructive"));
    assert_eq!(html.matches(r#"class="reaction-chip""#).count(), 6);
}

#[test]
fn test_visible_sheet_for_other_user() {
    let html = render(OtherMessageSheet);

    assert!(html.contains(r#"data-testid="action-sheet-item-Copy Text""#));
    assert!(!html.contains("Edit Message"));
    assert!(!html.contains("Delete message"));
    assert!(!html.contains("reaction-bar"));
}

#[test]
fn test_empty_reaction_set_renders_nothing() {
    let html = render(EmptyBar);

    assert!(html.contains(r#"id="bar-host""#));
    assert!(!html.contains("reaction-bar"));
}

#[test]
fn test_reaction_bar_renders_one_chip_per_option() {
    let html = render(LikeLoveBar);

    assert_eq!(html.matches(r#"class="reaction-chip""#).count(), 2);
    assert!(html.contains(r#"data-testid="reaction-like""#));
    assert!(html.contains(r#"data-testid="reaction-love""#));
}
