//! Element capabilities the controllers are written against.
//!
//! The browser binding implements these for `web-sys` handles; tests use the
//! in-memory fakes in `testing`. All methods take `&self`: DOM handles are
//! shared references into the document, so mutation goes through them.

/// A page element the controllers can read and mutate.
pub trait Widget {
    fn attr(&self, name: &str) -> Option<String>;
    fn set_attr(&self, name: &str, value: &str);

    fn has_class(&self, class: &str) -> bool;
    fn set_class(&self, class: &str, present: bool);

    /// Flip `class` and return whether it is now present.
    fn toggle_class(&self, class: &str) -> bool {
        let present = !self.has_class(class);
        self.set_class(class, present);
        present
    }

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    fn take_focus(&self, prevent_scroll: bool);

    /// Smooth-scroll the element so its top edge aligns with the viewport start.
    fn scroll_into_view_smooth(&self);

    /// Read a boolean ARIA-style attribute. Anything but `"true"` is false.
    fn state(&self, name: &str) -> bool {
        self.attr(name).as_deref() == Some("true")
    }

    fn set_state(&self, name: &str, on: bool) {
        self.set_attr(name, if on { "true" } else { "false" });
    }
}

/// `<input type="range">` style control.
pub trait RangeInput: Widget {
    /// Current numeric value, NaN if the control holds no number.
    fn value(&self) -> f64;
    fn set_value(&self, value: f64);
    fn set_max(&self, max: f64);
}

/// Native media element. Playback, decoding and timing stay with the browser.
pub trait MediaElement {
    fn is_paused(&self) -> bool;
    fn play(&self);
    fn pause(&self);
    fn current_time(&self) -> f64;
    fn set_current_time(&self, seconds: f64);
    /// Total length in seconds; NaN until metadata has loaded.
    fn duration(&self) -> f64;
    fn set_volume(&self, volume: f64);
}

/// Inline style declaration of an element (used on the document root).
pub trait InlineStyle {
    fn set_property(&self, name: &str, value: &str);
    fn remove_property(&self, name: &str);
}

/// Node a document-level click can land on.
pub trait ClickTarget {
    /// Whether the node or one of its ancestors matches `selector`.
    fn is_within(&self, selector: &str) -> bool;
}
