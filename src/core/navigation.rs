//! In-page navigation state
//!
//! The navbar highlights the section currently crossing the middle of the
//! viewport. The browser side feeds intersection entries into an
//! [`ActiveSectionTracker`]; clicks select an item directly.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    /// Element id of the target section, without the leading `#`
    pub section_id: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        name: "Features",
        section_id: "features",
    },
    NavItem {
        name: "AI Agents",
        section_id: "agents",
    },
    NavItem {
        name: "Pricing",
        section_id: "pricing",
    },
    NavItem {
        name: "Contact",
        section_id: "contact",
    },
];

/// Shrinks the observer root to the horizontal midline of the viewport
pub const OBSERVER_ROOT_MARGIN: &str = "-50% 0px -50% 0px";

/// Scroll offset after which the header switches to its condensed style
pub const HEADER_CONDENSE_OFFSET: f64 = 20.0;

/// Tracks which nav item is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSectionTracker {
    items: &'static [NavItem],
    active: usize,
}

impl ActiveSectionTracker {
    /// Start with the first item highlighted
    pub fn new(items: &'static [NavItem]) -> Self {
        Self { items, active: 0 }
    }

    pub fn items(&self) -> &'static [NavItem] {
        self.items
    }

    pub fn active(&self) -> Option<&'static NavItem> {
        self.items.get(self.active)
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active().is_some_and(|item| item.name == name)
    }

    /// Feed one intersection entry. Only sections entering the midline move
    /// the highlight; unknown sections and exits are ignored.
    pub fn on_intersection(&mut self, section_id: &str, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.items.iter().position(|i| i.section_id == section_id) {
            Some(index) => self.set(index),
            None => false,
        }
    }

    /// Highlight an item by name, as on click
    pub fn select(&mut self, name: &str) -> bool {
        match self.items.iter().position(|i| i.name == name) {
            Some(index) => self.set(index),
            None => false,
        }
    }

    fn set(&mut self, index: usize) -> bool {
        let changed = self.active != index;
        self.active = index;
        changed
    }
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new(NAV_ITEMS)
    }
}

/// The scroll-to-top button shows once the page is scrolled past half the
/// viewport
pub fn should_show_scroll_to_top(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y > viewport_height * 0.5
}

pub fn is_header_condensed(scroll_y: f64) -> bool {
    scroll_y > HEADER_CONDENSE_OFFSET
}

/// Something that stops delivering callbacks once disconnected
pub trait Disconnect {
    fn disconnect(&self);
}

/// Owns an observer together with the callback it calls into, and disconnects
/// the observer when dropped. The callback is released only after the observer
/// has stopped using it.
pub struct Subscription<O: Disconnect, C> {
    observer: O,
    _callback: C,
}

impl<O: Disconnect, C> Subscription<O, C> {
    pub fn new(observer: O, callback: C) -> Self {
        Self { observer, _callback: callback }
    }
}

impl<O: Disconnect, C> Drop for Subscription<O, C> {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
