use crate::dom::Widget;

/// Class on the transcript content while it is shown.
pub const OPEN_CLASS: &str = "is-open";

pub const HIDE_LABEL: &str = "\u{2715} Hide Transcript";
pub const VIEW_LABEL: &str = "View Transcript";

const EXPANDED: &str = "aria-expanded";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptEvent {
    /// The panel's own toggle button.
    ToggleClicked,
    /// The "View Transcript" button in the player controls.
    PlayerButtonClicked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptState {
    Closed,
    Open,
}

struct TranscriptWidgets<W> {
    toggle: W,
    content: W,
    player_button: Option<W>,
    region: Option<W>,
}

/// Transcript disclosure panel driven from two buttons.
///
/// The content element's class is the source of truth; both buttons are
/// rewritten on every transition so they always agree with it.
pub struct TranscriptPanel<W> {
    widgets: Option<TranscriptWidgets<W>>,
}

impl<W: Widget> TranscriptPanel<W> {
    /// `toggle` and `content` are required. Without `player_button` only the
    /// panel toggle is live; without `region` opening does not scroll.
    pub fn new(
        toggle: Option<W>,
        content: Option<W>,
        player_button: Option<W>,
        region: Option<W>,
    ) -> Self {
        let widgets = match (toggle, content) {
            (Some(toggle), Some(content)) => Some(TranscriptWidgets {
                toggle,
                content,
                player_button,
                region,
            }),
            _ => {
                log::debug!("Transcript toggle or content missing, transcript disabled");
                None
            }
        };
        Self { widgets }
    }

    pub fn is_enabled(&self) -> bool {
        self.widgets.is_some()
    }

    pub fn state(&self) -> TranscriptState {
        match &self.widgets {
            Some(w) if w.content.has_class(OPEN_CLASS) => TranscriptState::Open,
            _ => TranscriptState::Closed,
        }
    }

    pub fn handle(&self, event: TranscriptEvent) {
        let Some(w) = &self.widgets else {
            return;
        };
        match (self.state(), event) {
            (TranscriptState::Open, _) => close(w),
            (TranscriptState::Closed, TranscriptEvent::ToggleClicked) => open(w),
            (TranscriptState::Closed, TranscriptEvent::PlayerButtonClicked) => {
                open(w);
                if let Some(region) = &w.region {
                    region.scroll_into_view_smooth();
                }
            }
        }
    }
}

fn open<W: Widget>(w: &TranscriptWidgets<W>) {
    w.content.set_class(OPEN_CLASS, true);
    w.toggle.set_state(EXPANDED, true);
    if let Some(button) = &w.player_button {
        button.set_state(EXPANDED, true);
        button.set_text(HIDE_LABEL);
    }
}

fn close<W: Widget>(w: &TranscriptWidgets<W>) {
    w.content.set_class(OPEN_CLASS, false);
    w.toggle.set_state(EXPANDED, false);
    if let Some(button) = &w.player_button {
        button.set_state(EXPANDED, false);
        button.set_text(VIEW_LABEL);
    }
}
