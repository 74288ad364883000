//! Property-based tests for the playback controller
//!
//! Uses proptest to verify navigation invariants across many random
//! playlists and operation sequences.

use proptest::prelude::*;
use reel_player::{
    MediaSession, PlaybackController, PlaybackDelegate, PlayerConfig, PlaylistItem, VecDataSource,
};
use std::cell::RefCell;
use std::rc::Rc;
use url::Url;

// ===== Helpers =====

struct NoopSession;

impl MediaSession for NoopSession {
    fn load_looping(&mut self, _locator: &Url) -> reel_player::Result<()> {
        Ok(())
    }

    fn play(&mut self) {}

    fn pause(&mut self) {}
}

struct CountingDelegate {
    calls: Rc<RefCell<Vec<usize>>>,
}

impl PlaybackDelegate for CountingDelegate {
    fn will_play(&mut self, _item: &PlaylistItem, index: usize) {
        self.calls.borrow_mut().push(index);
    }
}

fn arbitrary_item() -> impl Strategy<Value = PlaylistItem> {
    (
        "[a-z0-9]{1,12}",                     // locator path
        "[A-Za-z ]{0,30}",                    // title
        "[A-Za-z ]{0,40}",                    // subtitle
        proptest::option::of("[A-Za-z ]{1,20}"), // credit (None = empty)
    )
        .prop_map(|(path, title, subtitle, credit)| {
            PlaylistItem::new(
                Url::parse(&format!("https://media.example.com/{path}.mp4")).unwrap(),
                title,
                subtitle,
                credit.unwrap_or_default(),
            )
        })
}

fn arbitrary_items() -> impl Strategy<Value = Vec<PlaylistItem>> {
    prop::collection::vec(arbitrary_item(), 0..30)
}

fn controller_with(items: Vec<PlaylistItem>) -> (PlaybackController, Rc<RefCell<Vec<usize>>>) {
    let mut controller = PlaybackController::new(Box::new(NoopSession), PlayerConfig::default());
    let calls = Rc::new(RefCell::new(Vec::new()));
    controller.set_delegate(Rc::new(RefCell::new(CountingDelegate {
        calls: Rc::clone(&calls),
    })));
    controller.set_data_source(Rc::new(VecDataSource::new(items)));
    controller.reload_data();
    (controller, calls)
}

// ===== Property Tests =====

proptest! {
    /// Property: the current index stays inside the playlist under any
    /// operation sequence, and navigation visibility always matches the
    /// position policy
    #[test]
    fn index_and_visibility_invariants(
        items in arbitrary_items(),
        operations in prop::collection::vec((0u8..4, 0usize..40), 1..40)
    ) {
        let len = items.len();
        let (mut controller, _calls) = controller_with(items);

        for (op, arg) in operations {
            match op {
                0 => controller.next(),
                1 => controller.previous(),
                2 => { controller.set_current_index(arg); }
                _ => controller.reload_data(),
            }

            let index = controller.current_index();
            if len > 0 {
                prop_assert!(index < len, "index {} out of bounds for {} items", index, len);
            } else {
                prop_assert_eq!(index, 0);
                prop_assert!(controller.current_item().is_none());
            }

            let nav = controller.navigation();
            prop_assert_eq!(nav.previous_hidden, len == 0 || index == 0);
            prop_assert_eq!(nav.next_hidden, len == 0 || index + 1 >= len);
        }
    }

    /// Property: next/previous never wrap and always move by exactly one;
    /// the final position equals a saturating fold of the same steps
    #[test]
    fn navigation_is_clamped_stepping(
        items in prop::collection::vec(arbitrary_item(), 1..20),
        steps in prop::collection::vec(any::<bool>(), 0..60)
    ) {
        let len = items.len();
        let (mut controller, _calls) = controller_with(items);

        let mut expected = 0usize;
        for forward in steps {
            let before = controller.current_index();
            if forward {
                controller.next();
                expected = (expected + 1).min(len - 1);
            } else {
                controller.previous();
                expected = expected.saturating_sub(1);
            }
            let after = controller.current_index();

            prop_assert!(after.abs_diff(before) <= 1, "moved more than one step");
            prop_assert_eq!(after, expected);
        }
    }

    /// Property: the delegate fires exactly once per successful navigation,
    /// with the index the controller landed on, and never for a rejected one
    #[test]
    fn delegate_fires_per_successful_navigation(
        items in prop::collection::vec(arbitrary_item(), 1..20),
        steps in prop::collection::vec(any::<bool>(), 0..60)
    ) {
        let len = items.len();
        let (mut controller, calls) = controller_with(items);

        let mut expected_calls = Vec::new();
        let mut position = 0usize;
        for forward in steps {
            if forward {
                controller.next();
                if position + 1 < len {
                    position += 1;
                    expected_calls.push(position);
                }
            } else {
                controller.previous();
                if position > 0 {
                    position -= 1;
                    expected_calls.push(position);
                }
            }
        }

        prop_assert_eq!(&*calls.borrow(), &expected_calls);
    }

    /// Property: the display projection never exposes an empty credit
    #[test]
    fn display_credit_is_never_empty(items in prop::collection::vec(arbitrary_item(), 1..20)) {
        let len = items.len();
        let (mut controller, _calls) = controller_with(items);

        for index in 0..len {
            prop_assert!(controller.set_current_index(index));
            let display = controller.display().expect("item is loaded");
            prop_assert!(!display.credit.is_empty());
        }
    }
}
