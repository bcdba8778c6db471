//! In-memory stand-ins for page elements, used by the controller tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::dom::{ClickTarget, InlineStyle, MediaElement, RangeInput, Widget};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Default)]
struct ElementState {
    attributes: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    text: String,
    value: f64,
    max: Option<f64>,
    focus_calls: Vec<bool>,
    scrolls: usize,
    /// Selectors matched by the element or one of its ancestors.
    within: BTreeSet<String>,
}

/// Fake element. Clones share state, like DOM handles do.
#[derive(Debug, Clone, Default)]
pub struct FakeElement(Rc<RefCell<ElementState>>);

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let el = Self::new();
        el.0.borrow_mut().text = text.to_string();
        el
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Place the element inside a region matching `selector`.
    pub fn inside(self, selector: &str) -> Self {
        self.0.borrow_mut().within.insert(selector.to_string());
        self
    }

    pub fn focus_count(&self) -> usize {
        self.0.borrow().focus_calls.len()
    }

    /// `prevent_scroll` flag of the most recent focus call.
    pub fn last_focus_prevented_scroll(&self) -> Option<bool> {
        self.0.borrow().focus_calls.last().copied()
    }

    pub fn scroll_count(&self) -> usize {
        self.0.borrow().scrolls
    }

    pub fn max(&self) -> Option<f64> {
        self.0.borrow().max
    }
}

impl Widget for FakeElement {
    fn attr(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attr(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn set_class(&self, class: &str, present: bool) {
        let mut state = self.0.borrow_mut();
        if present {
            state.classes.insert(class.to_string());
        } else {
            state.classes.remove(class);
        }
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn take_focus(&self, prevent_scroll: bool) {
        self.0.borrow_mut().focus_calls.push(prevent_scroll);
    }

    fn scroll_into_view_smooth(&self) {
        self.0.borrow_mut().scrolls += 1;
    }
}

impl ClickTarget for FakeElement {
    fn is_within(&self, selector: &str) -> bool {
        self.0.borrow().within.contains(selector)
    }
}

impl RangeInput for FakeElement {
    fn value(&self) -> f64 {
        self.0.borrow().value
    }

    fn set_value(&self, value: f64) {
        self.0.borrow_mut().value = value;
    }

    fn set_max(&self, max: f64) {
        self.0.borrow_mut().max = Some(max);
    }
}

#[derive(Debug)]
struct MediaState {
    paused: bool,
    current_time: f64,
    duration: f64,
    volume: f64,
}

/// Fake media element: starts paused at 0 with unknown duration.
#[derive(Debug, Clone)]
pub struct FakeMedia(Rc<RefCell<MediaState>>);

impl FakeMedia {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(MediaState {
            paused: true,
            current_time: 0.0,
            duration: f64::NAN,
            volume: 1.0,
        })))
    }

    pub fn with_duration(duration: f64) -> Self {
        let media = Self::new();
        media.0.borrow_mut().duration = duration;
        media
    }

    pub fn at(self, seconds: f64) -> Self {
        self.0.borrow_mut().current_time = seconds;
        self
    }

    pub fn volume(&self) -> f64 {
        self.0.borrow().volume
    }
}

impl MediaElement for FakeMedia {
    fn is_paused(&self) -> bool {
        self.0.borrow().paused
    }

    fn play(&self) {
        self.0.borrow_mut().paused = false;
    }

    fn pause(&self) {
        self.0.borrow_mut().paused = true;
    }

    fn current_time(&self) -> f64 {
        self.0.borrow().current_time
    }

    fn set_current_time(&self, seconds: f64) {
        self.0.borrow_mut().current_time = seconds;
    }

    fn duration(&self) -> f64 {
        self.0.borrow().duration
    }

    fn set_volume(&self, volume: f64) {
        self.0.borrow_mut().volume = volume;
    }
}

/// Fake inline style declaration.
#[derive(Debug, Clone, Default)]
pub struct FakeStyle(Rc<RefCell<BTreeMap<String, String>>>);

impl FakeStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.0.borrow().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }
}

impl InlineStyle for FakeStyle {
    fn set_property(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn remove_property(&self, name: &str) {
        self.0.borrow_mut().remove(name);
    }
}
