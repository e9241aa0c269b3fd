//! Routing a selection back to its handler.
//!
//! The close callback fires exactly once per dispatch, including when the
//! selection is invalid or the handler panics.

use tracing::debug;

use super::actions::{ActionItem, ActionList, MessageActionKind};
use crate::error::ActionSheetError;

/// Calls the wrapped closure when dropped, so unwinding still closes the sheet.
struct CloseOnDrop<F: FnOnce()> {
    on_close: Option<F>,
}

impl<F: FnOnce()> CloseOnDrop<F> {
    fn new(on_close: F) -> Self {
        Self {
            on_close: Some(on_close),
        }
    }
}

impl<F: FnOnce()> Drop for CloseOnDrop<F> {
    fn drop(&mut self) {
        if let Some(on_close) = self.on_close.take() {
            on_close();
        }
    }
}

/// Run the item of kind `selected`, then call `on_close`.
///
/// A kind that is not in `list` is a host bug and comes back as
/// [`ActionSheetError::ActionNotInMenu`].
pub fn dispatch<F: FnOnce()>(
    list: &ActionList,
    selected: MessageActionKind,
    on_close: F,
) -> Result<(), ActionSheetError> {
    let _close = CloseOnDrop::new(on_close);
    let item = list
        .find(selected)
        .ok_or(ActionSheetError::ActionNotInMenu(selected))?;
    run_item(item);
    Ok(())
}

/// Positional variant for hosts whose widget reports a row index.
pub fn dispatch_index<F: FnOnce()>(
    list: &ActionList,
    index: usize,
    on_close: F,
) -> Result<(), ActionSheetError> {
    let _close = CloseOnDrop::new(on_close);
    let item = list.get(index).ok_or(ActionSheetError::SelectionOutOfRange {
        index,
        len: list.len(),
    })?;
    run_item(item);
    Ok(())
}

fn run_item(item: &ActionItem) {
    let ran = item.run();
    debug!(action = %item.kind(), handled = ran, "dispatched message action");
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};
    use std::rc::Rc;

    use super::*;
    use crate::action_sheet::actions::{ActionCallbacks, build_actions};
    use crate::identity::UserId;
    use crate::message::{Author, ChatMessage};

    fn own_message() -> ChatMessage {
        ChatMessage::new("m1", Author::new("u1", "Uma"), "hi")
    }

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let hits = Rc::new(Cell::new(0));
        let inner = hits.clone();
        (hits, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn test_dispatch_runs_handler_then_closes() {
        let (edits, on_edit) = counter();
        let list = build_actions(
            &own_message(),
            &UserId::from("u1"),
            &ActionCallbacks::new().with_edit(on_edit),
        );
        let closes = Cell::new(0);

        let result = dispatch(&list, MessageActionKind::Edit, || closes.set(closes.get() + 1));

        assert!(result.is_ok());
        assert_eq!(edits.get(), 1);
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_no_op_items_still_close() {
        let list = build_actions(&own_message(), &UserId::from("u1"), &ActionCallbacks::new());
        for kind in [MessageActionKind::Cancel, MessageActionKind::Copy] {
            let closes = Cell::new(0);
            assert!(dispatch(&list, kind, || closes.set(closes.get() + 1)).is_ok());
            assert_eq!(closes.get(), 1, "{kind} should close once");
        }
    }

    #[test]
    fn test_missing_kind_is_an_error_and_still_closes() {
        let (deletes, on_delete) = counter();
        let list = build_actions(
            &own_message(),
            &UserId::from("someone-else"),
            &ActionCallbacks::new().with_delete(on_delete),
        );
        let closes = Cell::new(0);

        let result = dispatch(&list, MessageActionKind::Delete, || closes.set(closes.get() + 1));

        assert_eq!(
            result,
            Err(ActionSheetError::ActionNotInMenu(MessageActionKind::Delete))
        );
        assert_eq!(deletes.get(), 0);
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_dispatch_index_maps_rows_to_items() {
        let (threads, on_thread) = counter();
        let list = build_actions(
            &own_message(),
            &UserId::from("u2"),
            &ActionCallbacks::new().with_open_thread(on_thread),
        );
        let closes = Cell::new(0);

        // [Cancel, Copy Text, Reply in Thread]
        assert!(dispatch_index(&list, 2, || closes.set(closes.get() + 1)).is_ok());
        assert_eq!(threads.get(), 1);
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_dispatch_index_out_of_range() {
        let list = build_actions(&own_message(), &UserId::from("u2"), &ActionCallbacks::new());
        let closes = Cell::new(0);

        let result = dispatch_index(&list, 3, || closes.set(closes.get() + 1));

        assert_eq!(
            result,
            Err(ActionSheetError::SelectionOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_panicking_handler_still_closes() {
        let list = build_actions(
            &own_message(),
            &UserId::from("u1"),
            &ActionCallbacks::new().with_delete(|| panic!("delete failed")),
        );
        let closes = Rc::new(Cell::new(0));
        let observed = closes.clone();

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let _ = dispatch(&list, MessageActionKind::Delete, move || {
                observed.set(observed.get() + 1)
            });
        }));

        assert!(outcome.is_err());
        assert_eq!(closes.get(), 1);
    }
}
