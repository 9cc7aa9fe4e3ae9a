// SPDX-License-Identifier: MPL-2.0
//! Delegate hooks the embedding application can implement.
//!
//! Every method has a default no-op body, so implementors opt into exactly
//! the callbacks they care about. Dismissal uses the
//! delegate-preferred-override-with-default-fallback pattern: the return
//! value reports whether the delegate consumed the request, and `false`
//! falls back to the browser's default dismissal.

use crate::browser::page::LongPress;
use crate::browser::State;

/// Callbacks forwarded from the browser to its host.
pub trait BrowserDelegate {
    /// Called when the header's dismiss button is tapped. Return `true` to
    /// take over dismissal; returning `false` lets the browser perform its
    /// default modal dismissal.
    fn dismiss_requested(&mut self, browser: &State) -> bool {
        let _ = browser;
        false
    }

    /// Called when a long press lands on the displayed image.
    fn long_press_on_image(&mut self, gesture: &LongPress) {
        let _ = gesture;
    }

    /// Called when a caller-supplied toolbar item is activated.
    fn toolbar_item_activated(&mut self, index: usize, browser: &State) {
        let _ = (index, browser);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    struct Silent;
    impl BrowserDelegate for Silent {}

    struct Consuming {
        dismissed: bool,
        long_presses: usize,
        activated: Vec<usize>,
    }

    impl BrowserDelegate for Consuming {
        fn dismiss_requested(&mut self, _browser: &State) -> bool {
            self.dismissed = true;
            true
        }

        fn long_press_on_image(&mut self, _gesture: &LongPress) {
            self.long_presses += 1;
        }

        fn toolbar_item_activated(&mut self, index: usize, _browser: &State) {
            self.activated.push(index);
        }
    }

    #[test]
    fn default_methods_do_not_consume() {
        let browser = State::new();
        let mut delegate = Silent;
        assert!(!delegate.dismiss_requested(&browser));
        delegate.long_press_on_image(&LongPress {
            index: 0,
            position: Point::ORIGIN,
        });
    }

    #[test]
    fn implemented_methods_receive_callbacks() {
        let browser = State::new();
        let mut delegate = Consuming {
            dismissed: false,
            long_presses: 0,
            activated: Vec::new(),
        };

        assert!(delegate.dismiss_requested(&browser));
        assert!(delegate.dismissed);

        delegate.long_press_on_image(&LongPress {
            index: 2,
            position: Point::new(10.0, 10.0),
        });
        assert_eq!(delegate.long_presses, 1);

        delegate.toolbar_item_activated(1, &browser);
        assert_eq!(delegate.activated, vec![1]);
    }
}
