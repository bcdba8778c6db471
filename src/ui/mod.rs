pub mod a11y_demo;
pub mod anchor_scroll;
pub mod category_filter;
pub mod nav;
pub mod player;
pub mod transcript;

pub use a11y_demo::{A11yDemo, A11yEvent, FontScale};
pub use anchor_scroll::{follow_anchor, follow_link, fragment_target};
pub use category_filter::{CategoryFilter, FilterEvent, FilterHandler};
pub use nav::{NavEvent, NavMenu};
pub use player::{format_clock, AudioPlayer, PlayerControls, PlayerEvent};
pub use transcript::{TranscriptEvent, TranscriptPanel, TranscriptState};
