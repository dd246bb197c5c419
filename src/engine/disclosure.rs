use super::listeners::{Listeners, Subscription};

pub const RAIL_COLLAPSED_WIDTH: u16 = 5;
pub const RAIL_EXPANDED_WIDTH: u16 = 20;

/// How the main content reacts while the rail is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContentShift {
    pub offset: u16,
    pub dimmed: bool,
}

/// Hover-driven expand/collapse state of the navigation rail.
///
/// The controller is the only writer; layout code observes it.
#[derive(Debug, Default)]
pub struct HoverDisclosure {
    expanded: bool,
    observers: Listeners<bool>,
}

impl HoverDisclosure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn pointer_enter(&mut self) {
        self.set(true);
    }

    pub fn pointer_leave(&mut self) {
        self.set(false);
    }

    fn set(&mut self, expanded: bool) {
        if self.expanded == expanded {
            return;
        }
        self.expanded = expanded;
        self.observers.emit(&expanded);
    }

    pub fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: FnMut(&bool) + 'static,
    {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, sub: Subscription) -> bool {
        self.observers.unsubscribe(sub)
    }

    pub fn rail_width(&self) -> u16 {
        if self.expanded {
            RAIL_EXPANDED_WIDTH
        } else {
            RAIL_COLLAPSED_WIDTH
        }
    }

    pub fn content_shift(&self) -> ContentShift {
        if !self.expanded {
            return ContentShift::default();
        }
        ContentShift {
            offset: RAIL_EXPANDED_WIDTH - RAIL_COLLAPSED_WIDTH,
            dimmed: true,
        }
    }
}

#[cfg(test)]
#[path = "../tests/engine/disclosure_tests.rs"]
mod tests;
