//! Horizontal emoji-reaction picker shown in the sheet's title area.

use dioxus::prelude::*;
use tracing::debug;

use crate::reactions::{ReactionOption, ReactionSet};

/// One tappable reaction chip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReactionButton {
    pub id: String,
    pub icon: String,
}

impl ReactionButton {
    fn from_option(option: &ReactionOption) -> Self {
        Self {
            id: option.id.clone(),
            icon: option.icon.clone(),
        }
    }

    /// Test id, `reaction-{id}`.
    pub fn test_id(&self) -> String {
        format!("reaction-{}", self.id)
    }

    /// Forward one tap to `on_select` with this button's reaction id.
    pub fn tap(&self, on_select: impl FnOnce(String)) {
        debug!(reaction = %self.id, "reaction tapped");
        on_select(self.id.clone());
    }
}

/// Layout model behind [`ReactionBar`]: one button per option, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReactionPicker {
    buttons: Vec<ReactionButton>,
}

impl ReactionPicker {
    pub fn new(options: &ReactionSet) -> Self {
        Self {
            buttons: options.iter().map(ReactionButton::from_option).collect(),
        }
    }

    pub fn buttons(&self) -> &[ReactionButton] {
        &self.buttons
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Tap the button at `index`. Returns `false` for an index with no button.
    pub fn tap(&self, index: usize, on_select: impl FnOnce(String)) -> bool {
        match self.buttons.get(index) {
            Some(button) => {
                button.tap(on_select);
                true
            }
            None => false,
        }
    }
}

/// Reaction chips laid out in a row. Renders nothing for an empty set.
#[component]
pub fn ReactionBar(reactions: ReactionSet, on_reaction: EventHandler<String>) -> Element {
    let picker = ReactionPicker::new(&reactions);
    if picker.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "reaction-bar",
            for reaction in picker.buttons().iter() {
                {
                    let chip = reaction.clone();
                    rsx! {
                        button {
                            key: "{reaction.id}",
                            class: "reaction-chip",
                            "data-testid": "{reaction.test_id()}",
                            title: "{reaction.id}",
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                chip.tap(|id| on_reaction.call(id));
                            },
                            span { class: "reaction-chip-icon", "{reaction.icon}" }
                        }
                    }
                }
            }
        }
    }
}
