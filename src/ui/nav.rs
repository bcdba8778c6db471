use crate::dom::{ClickTarget, Widget};

/// Class on the links container while the mobile menu is open.
pub const OPEN_CLASS: &str = "is-open";

const EXPANDED: &str = "aria-expanded";

/// Events the navigation controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    HamburgerClicked,
    /// A click anywhere in the document. `inside_nav` is true when the
    /// target sits within the nav region.
    DocumentClicked { inside_nav: bool },
    KeyDown(String),
}

impl NavEvent {
    /// Document click landing on `target`. Clicks without an element
    /// target count as outside the nav.
    pub fn document_click<T: ClickTarget>(target: Option<&T>, region: &str) -> Self {
        let inside_nav = target.is_some_and(|t| t.is_within(region));
        NavEvent::DocumentClicked { inside_nav }
    }
}

struct NavWidgets<W> {
    hamburger: W,
    links: W,
}

/// Mobile navigation menu: hamburger toggle, outside-click and Escape close.
pub struct NavMenu<W> {
    widgets: Option<NavWidgets<W>>,
}

impl<W: Widget> NavMenu<W> {
    /// Both handles are required; with either missing the menu is inert.
    pub fn new(hamburger: Option<W>, links: Option<W>) -> Self {
        let widgets = match (hamburger, links) {
            (Some(hamburger), Some(links)) => Some(NavWidgets { hamburger, links }),
            _ => {
                log::debug!("Nav hamburger or links missing, navigation toggle disabled");
                None
            }
        };
        Self { widgets }
    }

    pub fn is_enabled(&self) -> bool {
        self.widgets.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.widgets
            .as_ref()
            .is_some_and(|w| w.links.has_class(OPEN_CLASS))
    }

    pub fn handle(&self, event: NavEvent) {
        let Some(w) = &self.widgets else {
            return;
        };
        match event {
            NavEvent::HamburgerClicked => {
                let open = w.links.toggle_class(OPEN_CLASS);
                w.hamburger.set_state(EXPANDED, open);
            }
            NavEvent::DocumentClicked { inside_nav } => {
                if !inside_nav {
                    close(w);
                }
            }
            NavEvent::KeyDown(key) => {
                if key == "Escape" {
                    close(w);
                    // Keyboard users land back on the control that opened the menu
                    w.hamburger.take_focus(false);
                }
            }
        }
    }
}

fn close<W: Widget>(w: &NavWidgets<W>) {
    w.links.set_class(OPEN_CLASS, false);
    w.hamburger.set_state(EXPANDED, false);
}
