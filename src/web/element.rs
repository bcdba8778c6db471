//! `dom` capabilities for live `web-sys` handles.
//!
//! Calls go through fully qualified paths: several trait methods share names
//! with inherent `web-sys` methods.

use wasm_bindgen::JsValue;
use web_sys::{
    CssStyleDeclaration, FocusOptions, HtmlElement, HtmlInputElement, HtmlMediaElement,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::dom::{ClickTarget, InlineStyle, MediaElement, RangeInput, Widget};

/// DOM mutations never abort a handler; a failed call is logged and skipped.
fn warn_on_err<T>(result: Result<T, JsValue>, what: &str) {
    if let Err(e) = result {
        log::warn!("{what} failed: {e:?}");
    }
}

fn smooth_start() -> ScrollIntoViewOptions {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    options
}

macro_rules! impl_widget {
    ($($ty:ty),+ $(,)?) => {$(
        impl Widget for $ty {
            fn attr(&self, name: &str) -> Option<String> {
                web_sys::Element::get_attribute(self, name)
            }

            fn set_attr(&self, name: &str, value: &str) {
                warn_on_err(web_sys::Element::set_attribute(self, name, value), "setAttribute");
            }

            fn has_class(&self, class: &str) -> bool {
                web_sys::Element::class_list(self).contains(class)
            }

            fn set_class(&self, class: &str, present: bool) {
                let classes = web_sys::Element::class_list(self);
                warn_on_err(classes.toggle_with_force(class, present), "classList.toggle");
            }

            fn text(&self) -> String {
                web_sys::Node::text_content(self).unwrap_or_default()
            }

            fn set_text(&self, text: &str) {
                web_sys::Node::set_text_content(self, Some(text));
            }

            fn take_focus(&self, prevent_scroll: bool) {
                let options = FocusOptions::new();
                options.set_prevent_scroll(prevent_scroll);
                warn_on_err(HtmlElement::focus_with_options(self, &options), "focus");
            }

            fn scroll_into_view_smooth(&self) {
                let options = smooth_start();
                web_sys::Element::scroll_into_view_with_scroll_into_view_options(self, &options);
            }
        }
    )+};
}

impl_widget!(HtmlElement, HtmlInputElement);

impl ClickTarget for web_sys::Element {
    fn is_within(&self, selector: &str) -> bool {
        match web_sys::Element::closest(self, selector) {
            Ok(found) => found.is_some(),
            Err(e) => {
                log::warn!("Invalid selector {selector:?}: {e:?}");
                false
            }
        }
    }
}

impl RangeInput for HtmlInputElement {
    fn value(&self) -> f64 {
        HtmlInputElement::value_as_number(self)
    }

    fn set_value(&self, value: f64) {
        HtmlInputElement::set_value(self, &value.to_string());
    }

    fn set_max(&self, max: f64) {
        HtmlInputElement::set_max(self, &max.to_string());
    }
}

impl MediaElement for HtmlMediaElement {
    fn is_paused(&self) -> bool {
        HtmlMediaElement::paused(self)
    }

    fn play(&self) {
        // The returned promise rejects on autoplay policy; the browser reports it.
        warn_on_err(HtmlMediaElement::play(self), "play");
    }

    fn pause(&self) {
        warn_on_err(HtmlMediaElement::pause(self), "pause");
    }

    fn current_time(&self) -> f64 {
        HtmlMediaElement::current_time(self)
    }

    fn set_current_time(&self, seconds: f64) {
        HtmlMediaElement::set_current_time(self, seconds);
    }

    fn duration(&self) -> f64 {
        HtmlMediaElement::duration(self)
    }

    fn set_volume(&self, volume: f64) {
        HtmlMediaElement::set_volume(self, volume);
    }
}

impl InlineStyle for CssStyleDeclaration {
    fn set_property(&self, name: &str, value: &str) {
        warn_on_err(CssStyleDeclaration::set_property(self, name, value), "style.setProperty");
    }

    fn remove_property(&self, name: &str) {
        warn_on_err(CssStyleDeclaration::remove_property(self, name), "style.removeProperty");
    }
}
