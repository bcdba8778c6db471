use crate::dom::Widget;

const PRESSED: &str = "aria-pressed";

/// Receives the label of the selected category.
pub type FilterHandler = Box<dyn FnMut(&str)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterEvent {
    /// Button at this index (document order) was clicked.
    Clicked(usize),
}

/// Mutually exclusive category pills.
///
/// Selecting a category only marks the button pressed and reports the label;
/// re-rendering the story grid is left to whoever installs a handler.
pub struct CategoryFilter<W> {
    buttons: Vec<W>,
    on_select: Option<FilterHandler>,
}

impl<W: Widget> CategoryFilter<W> {
    pub fn new(buttons: Vec<W>) -> Self {
        if buttons.is_empty() {
            log::debug!("No category filter buttons, filter disabled");
        }
        Self {
            buttons,
            on_select: None,
        }
    }

    pub fn with_handler(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }

    pub fn is_enabled(&self) -> bool {
        !self.buttons.is_empty()
    }

    /// Index of the pressed button, if exactly one is pressed.
    pub fn active(&self) -> Option<usize> {
        let mut pressed = self
            .buttons
            .iter()
            .enumerate()
            .filter(|(_, b)| b.state(PRESSED))
            .map(|(i, _)| i);
        match (pressed.next(), pressed.next()) {
            (Some(i), None) => Some(i),
            _ => None,
        }
    }

    pub fn handle(&mut self, event: FilterEvent) {
        let FilterEvent::Clicked(index) = event;
        let Some(clicked) = self.buttons.get(index) else {
            return;
        };

        for button in &self.buttons {
            button.set_state(PRESSED, false);
        }
        clicked.set_state(PRESSED, true);

        let category = clicked.text();
        let category = category.trim();
        log::info!("Filter: {category}");
        if let Some(handler) = self.on_select.as_mut() {
            handler(category);
        }
    }
}
