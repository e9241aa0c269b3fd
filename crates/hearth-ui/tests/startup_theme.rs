//! The configured startup theme seeds the current theme signal. Kept in its own test
//! binary because the startup theme can only be chosen once per process.

use dioxus::prelude::*;
use hearth_ui::{Theme, ThemedRoot, set_startup_theme};

#[component]
fn Root() -> Element {
    rsx! {
        ThemedRoot { "content" }
    }
}

#[test]
fn startup_theme_is_applied_before_first_render() {
    assert!(set_startup_theme(Theme::Dark));
    assert!(!set_startup_theme(Theme::Light));

    let mut dom = VirtualDom::new(Root);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains(r#"data-theme="dark""#));
    assert!(html.contains(Theme::Dark.sheet_style()));
}
