use crate::dom::{InlineStyle, Widget};

pub const HIGH_CONTRAST_CLASS: &str = "high-contrast";

/// Custom properties overridden while high contrast is on.
pub const HIGH_CONTRAST_PALETTE: [(&str, &str); 4] = [
    ("--color-text-primary", "#ffffff"),
    ("--color-text-secondary", "#ffffff"),
    ("--color-bg-surface", "#000000"),
    ("--color-bg-card", "#111111"),
];

const PRESSED: &str = "aria-pressed";

/// Root font size in pixels, always within `[MIN_PX, MAX_PX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontScale(u32);

impl FontScale {
    pub const DEFAULT_PX: u32 = 16;
    pub const MIN_PX: u32 = 12;
    pub const MAX_PX: u32 = 24;
    pub const STEP_PX: u32 = 2;

    pub fn px(self) -> u32 {
        self.0
    }

    pub fn increased(self) -> Self {
        Self((self.0 + Self::STEP_PX).min(Self::MAX_PX))
    }

    pub fn decreased(self) -> Self {
        Self(self.0.saturating_sub(Self::STEP_PX).max(Self::MIN_PX))
    }

    pub fn css_value(self) -> String {
        format!("{}px", self.0)
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self(Self::DEFAULT_PX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum A11yEvent {
    IncreaseClicked,
    DecreaseClicked,
    ContrastClicked,
}

/// Buttons on the about page demonstrating text scaling and high contrast.
pub struct A11yDemo<W, S> {
    root_style: S,
    body: W,
    increase: Option<W>,
    decrease: Option<W>,
    contrast: Option<W>,
    font: FontScale,
}

impl<W: Widget, S: InlineStyle> A11yDemo<W, S> {
    pub fn new(
        root_style: S,
        body: W,
        increase: Option<W>,
        decrease: Option<W>,
        contrast: Option<W>,
    ) -> Self {
        Self {
            root_style,
            body,
            increase,
            decrease,
            contrast,
            font: FontScale::default(),
        }
    }

    pub fn font(&self) -> FontScale {
        self.font
    }

    pub fn high_contrast(&self) -> bool {
        self.contrast
            .as_ref()
            .is_some_and(|b| b.state(PRESSED))
    }

    pub fn handle(&mut self, event: A11yEvent) {
        match event {
            A11yEvent::IncreaseClicked if self.increase.is_some() => {
                self.apply_font(self.font.increased());
            }
            A11yEvent::DecreaseClicked if self.decrease.is_some() => {
                self.apply_font(self.font.decreased());
            }
            A11yEvent::ContrastClicked => {
                if let Some(button) = &self.contrast {
                    let enable = !button.state(PRESSED);
                    self.body.set_class(HIGH_CONTRAST_CLASS, enable);
                    button.set_state(PRESSED, enable);
                    apply_palette(&self.root_style, enable);
                }
            }
            _ => {}
        }
    }

    fn apply_font(&mut self, font: FontScale) {
        self.font = font;
        self.root_style.set_property("font-size", &font.css_value());
    }
}

fn apply_palette<S: InlineStyle>(style: &S, enable: bool) {
    for (name, value) in HIGH_CONTRAST_PALETTE {
        if enable {
            style.set_property(name, value);
        } else {
            style.remove_property(name);
        }
    }
}
