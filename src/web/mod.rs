//! Browser entry point: finds the page's controls, builds the controllers
//! and forwards DOM events to them.

mod element;
mod logger;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CssStyleDeclaration, Document, Event, EventTarget, HtmlElement, HtmlInputElement,
    HtmlMediaElement, KeyboardEvent,
};

use crate::config::{
    A11yConfig, Config, FilterConfig, NavConfig, PlayerConfig, TranscriptConfig,
    CONFIG_ELEMENT_ID,
};
use crate::error::{BindError, BindResult};
use crate::ui::{
    follow_link, A11yDemo, A11yEvent, AudioPlayer, CategoryFilter, FilterEvent, NavEvent, NavMenu,
    PlayerControls, PlayerEvent, TranscriptEvent, TranscriptPanel,
};

type WebPlayer = AudioPlayer<HtmlMediaElement, HtmlElement, HtmlInputElement>;

impl From<BindError> for JsValue {
    fn from(e: BindError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

/// Runs once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let document = document()?;
    let embedded = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let config = Config::load(embedded.as_deref());
    log::set_max_level(config.level_filter());

    log::info!("StoryCast page scripts starting");
    bind_page(&document, &config)?;
    Ok(())
}

/// Wire every controller against `document`. Controllers are independent;
/// one with missing markup does not affect the others.
pub fn bind_page(document: &Document, config: &Config) -> BindResult<()> {
    bind_nav(document, &config.nav)?;
    bind_category_filter(document, &config.filter)?;
    bind_transcript(document, &config.transcript)?;
    bind_player(document, &config.player)?;
    bind_a11y_demo(document, &config.a11y)?;
    bind_anchor_links(document, &config.anchors)?;
    Ok(())
}

fn document() -> BindResult<Document> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    window.document().ok_or(BindError::NoDocument)
}

fn js_error(context: &'static str, e: JsValue) -> BindError {
    BindError::Js {
        context,
        message: e.as_string().unwrap_or_else(|| format!("{e:?}")),
    }
}

/// First element matching `selector`, if it has the expected type.
fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    match document.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_into::<T>().ok()),
        Err(e) => {
            log::warn!("Invalid selector {selector:?}: {e:?}");
            None
        }
    }
}

fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("Invalid selector {selector:?}: {e:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

fn listen<T>(target: &T, kind: &str, handler: impl FnMut(Event) + 'static) -> BindResult<()>
where
    T: AsRef<EventTarget>,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .as_ref()
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|e| js_error("addEventListener", e))?;
    // Listeners live as long as the page
    closure.forget();
    Ok(())
}

fn bind_nav(document: &Document, config: &NavConfig) -> BindResult<()> {
    let hamburger: Option<HtmlElement> = query(document, &config.hamburger);
    let links: Option<HtmlElement> = query(document, &config.links);
    let nav = Rc::new(NavMenu::new(hamburger.clone(), links));
    let Some(hamburger) = hamburger.filter(|_| nav.is_enabled()) else {
        return Ok(());
    };

    {
        let nav = nav.clone();
        listen(&hamburger, "click", move |_| nav.handle(NavEvent::HamburgerClicked))?;
    }

    {
        let nav = nav.clone();
        let region = config.region.clone();
        listen(document, "click", move |event| {
            // SVG icons inside the nav are Elements but not HtmlElements
            let target = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok());
            nav.handle(NavEvent::document_click(target.as_ref(), &region));
        })?;
    }

    listen(document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) {
            nav.handle(NavEvent::KeyDown(key));
        }
    })?;

    log::debug!("Navigation menu bound");
    Ok(())
}

fn bind_category_filter(document: &Document, config: &FilterConfig) -> BindResult<()> {
    let buttons: Vec<HtmlElement> = query_all(document, &config.buttons);
    let filter = Rc::new(RefCell::new(CategoryFilter::new(buttons.clone())));

    for (index, button) in buttons.iter().enumerate() {
        let filter = filter.clone();
        listen(button, "click", move |_| {
            filter.borrow_mut().handle(FilterEvent::Clicked(index));
        })?;
    }

    log::debug!("Category filter bound to {} button(s)", buttons.len());
    Ok(())
}

fn bind_transcript(document: &Document, config: &TranscriptConfig) -> BindResult<()> {
    let toggle: Option<HtmlElement> = query(document, &config.toggle);
    let player_button: Option<HtmlElement> = query(document, &config.player_button);
    let panel = Rc::new(TranscriptPanel::new(
        toggle.clone(),
        query(document, &config.content),
        player_button.clone(),
        query(document, &config.region),
    ));
    if !panel.is_enabled() {
        return Ok(());
    }

    if let Some(toggle) = toggle {
        let panel = panel.clone();
        listen(&toggle, "click", move |_| panel.handle(TranscriptEvent::ToggleClicked))?;
    }
    if let Some(button) = player_button {
        listen(&button, "click", move |_| {
            panel.handle(TranscriptEvent::PlayerButtonClicked)
        })?;
    }

    log::debug!("Transcript panel bound");
    Ok(())
}

fn on_player<T: AsRef<EventTarget>>(
    player: &Rc<WebPlayer>,
    target: &T,
    kind: &str,
    event: PlayerEvent,
) -> BindResult<()> {
    let player = Rc::clone(player);
    listen(target, kind, move |_| player.handle(event))
}

fn bind_player(document: &Document, config: &PlayerConfig) -> BindResult<()> {
    let audio: Option<HtmlMediaElement> = query(document, &config.audio);
    let play: Option<HtmlElement> = query(document, &config.play);
    let controls: PlayerControls<HtmlElement, HtmlInputElement> = PlayerControls {
        rewind: query(document, &config.rewind),
        forward: query(document, &config.forward),
        progress: query(document, &config.progress),
        volume: query(document, &config.volume),
        time_current: query(document, &config.time_current),
        time_duration: query(document, &config.time_duration),
    };
    let rewind = controls.rewind.clone();
    let forward = controls.forward.clone();
    let progress = controls.progress.clone();
    let volume = controls.volume.clone();

    let player = Rc::new(AudioPlayer::new(audio.clone(), play.clone(), controls));
    let (Some(audio), Some(play)) = (audio, play) else {
        return Ok(());
    };

    on_player(&player, &play, "click", PlayerEvent::PlayClicked)?;
    if let Some(rewind) = &rewind {
        on_player(&player, rewind, "click", PlayerEvent::RewindClicked)?;
    }
    if let Some(forward) = &forward {
        on_player(&player, forward, "click", PlayerEvent::ForwardClicked)?;
    }
    on_player(&player, &audio, "timeupdate", PlayerEvent::TimeUpdate)?;
    on_player(&player, &audio, "loadedmetadata", PlayerEvent::LoadedMetadata)?;
    on_player(&player, &audio, "ended", PlayerEvent::Ended)?;
    if let Some(progress) = &progress {
        on_player(&player, progress, "input", PlayerEvent::ProgressInput)?;
    }
    if let Some(volume) = &volume {
        on_player(&player, volume, "input", PlayerEvent::VolumeInput)?;
    }

    log::debug!("Audio player bound");
    Ok(())
}

fn bind_a11y_demo(document: &Document, config: &A11yConfig) -> BindResult<()> {
    let root = document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let (Some(root), Some(body)) = (root, document.body()) else {
        log::debug!("Document root or body unavailable, accessibility demo disabled");
        return Ok(());
    };

    let increase: Option<HtmlElement> = query(document, &config.increase_text);
    let decrease: Option<HtmlElement> = query(document, &config.decrease_text);
    let contrast: Option<HtmlElement> = query(document, &config.high_contrast);
    let demo: Rc<RefCell<A11yDemo<HtmlElement, CssStyleDeclaration>>> =
        Rc::new(RefCell::new(A11yDemo::new(
            root.style(),
            body,
            increase.clone(),
            decrease.clone(),
            contrast.clone(),
        )));

    let buttons = [
        (increase, A11yEvent::IncreaseClicked),
        (decrease, A11yEvent::DecreaseClicked),
        (contrast, A11yEvent::ContrastClicked),
    ];
    for (button, event) in buttons {
        if let Some(button) = button {
            let demo = demo.clone();
            listen(&button, "click", move |_| demo.borrow_mut().handle(event))?;
        }
    }
    Ok(())
}

fn bind_anchor_links(document: &Document, selector: &str) -> BindResult<()> {
    let links: Vec<web_sys::Element> = query_all(document, selector);
    for link in &links {
        let document = document.clone();
        let anchor = link.clone();
        listen(link, "click", move |event| {
            let href = anchor.get_attribute("href");
            let followed = follow_link(href.as_deref(), |id| {
                document
                    .get_element_by_id(id)
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            });
            if followed {
                event.prevent_default();
            }
        })?;
    }
    log::debug!("Smooth scrolling bound to {} link(s)", links.len());
    Ok(())
}
