//! Page glue around the canvas: accent cycling, show cards with embedded
//! players, and the chasing contact bubble.

use backdrop_core::{Show, ShowSource, PALETTE, SHOWS};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const MIXCLOUD_PROFILE_URL: &str = "https://www.mixcloud.com/amooro/";
const SOUNDCLOUD_PROFILE_URL: &str = "https://soundcloud.com/nahuel-mendez-isla";
const INSTAGRAM_URL: &str = "https://www.instagram.com/nahuelthings";

// Accent keys off the wall clock so it keeps moving in background tabs
const ACCENT_SWAP_RATE: f64 = 0.3;
const ACCENT_INTERVAL_MS: i32 = 900;

const CARD_GLITCH_INTERVAL_MS: i32 = 900;
const CARD_GLITCH_HOLD_MS: i32 = 360;

const BUBBLE_PAD: f64 = 14.0;
const BUBBLE_HOP_DELAY_MS: i32 = 120;
const BUBBLE_ARM_HOPS: u32 = 2;

pub fn init(document: &web::Document) {
    init_header(document);
    render_shows(document);
    wire_contact_bubble(document);
}

// ---------------- Header and accent ----------------

fn init_header(document: &web::Document) {
    document.set_title("Nahuel — Never Not Playing");

    set_accent_from_clock(document);
    wire_accent_interval(document.clone());

    fix_profile_links(document, "a[href*=\"mixcloud.com\"]", MIXCLOUD_PROFILE_URL);
    fix_profile_links(document, "a[href*=\"soundcloud.com\"]", SOUNDCLOUD_PROFILE_URL);
    fix_profile_links(document, "a[href*=\"instagram.com\"]", INSTAGRAM_URL);
}

fn set_accent_from_clock(document: &web::Document) {
    let idx = ((js_sys::Date::now() / 1000.0 * ACCENT_SWAP_RATE).floor() as i64)
        .rem_euclid(PALETTE.len() as i64) as usize;
    if let Some(root) = document.document_element() {
        if let Some(el) = root.dyn_ref::<web::HtmlElement>() {
            _ = el.style().set_property("--accent", PALETTE[idx]);
        }
    }
}

fn wire_accent_interval(document: web::Document) {
    let closure = Closure::wrap(Box::new(move || {
        set_accent_from_clock(&document);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ACCENT_INTERVAL_MS,
        );
    }
    closure.forget();
}

/// Placeholder `#` links get pointed at the real profiles.
fn fix_profile_links(document: &web::Document, selector: &str, url: &str) {
    let Ok(links) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..links.length() {
        let Some(link) = links.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        if link.get_attribute("href").as_deref() == Some("#") {
            _ = link.set_attribute("href", url);
        }
    }
}

// ---------------- Show cards ----------------

fn render_shows(document: &web::Document) {
    let Some(root) = document.get_element_by_id("show-list") else {
        return;
    };
    let mut rng = StdRng::from_entropy();
    let mut shows: Vec<&Show> = SHOWS.iter().collect();
    shows.shuffle(&mut rng);

    root.set_inner_html("");
    for show in shows {
        match build_show_card(document, show) {
            Ok(card) => {
                _ = root.append_child(&card);
            }
            Err(e) => log::error!("[site] show card: {:?}", e),
        }
    }

    wire_card_glitch(root, rng);
}

fn build_show_card(document: &web::Document, show: &Show) -> Result<web::Element, JsValue> {
    let card = document.create_element("article")?;
    card.set_class_name("set-card");

    let title_row = document.create_element("div")?;
    title_row.set_class_name("set-title");

    let link = document.create_element("a")?;
    link.set_attribute("href", show.url)?;
    link.set_attribute("target", "_blank")?;
    link.set_attribute("rel", "noopener noreferrer")?;
    link.set_text_content(Some(show.title));

    let meta = document.create_element("small")?;
    meta.set_text_content(Some(show.source_label()));

    title_row.append_child(&link)?;
    title_row.append_child(&meta)?;

    let frame = document.create_element("iframe")?;
    frame.set_class_name(match show.source {
        ShowSource::Mixcloud => "mixcloud-frame",
        ShowSource::Soundcloud => "soundcloud-frame",
    });
    frame.set_attribute("loading", "lazy")?;
    frame.set_attribute("allow", "autoplay")?;
    frame.set_attribute("src", &show.embed_src())?;
    frame.set_attribute(
        "title",
        &format!("{} ({} embed)", show.title, show.source_label()),
    )?;

    card.append_child(&title_row)?;
    card.append_child(&frame)?;
    Ok(card)
}

/// Subtle glitch pulse on a random card: one card at a time carries the
/// `is-glitch` class for a short hold.
fn wire_card_glitch(root: web::Element, mut rng: StdRng) {
    let glitched: Rc<RefCell<Option<web::Element>>> = Rc::new(RefCell::new(None));

    let glitched_clear = glitched.clone();
    let clear = Rc::new(Closure::wrap(Box::new(move || {
        if let Some(card) = glitched_clear.borrow_mut().take() {
            _ = card.class_list().remove_1("is-glitch");
        }
    }) as Box<dyn FnMut()>));

    let tick = Closure::wrap(Box::new(move || {
        let Ok(cards) = root.query_selector_all(".set-card") else {
            return;
        };
        if cards.length() == 0 {
            return;
        }
        let pick = rng.gen_range(0..cards.length());
        let Some(card) = cards.get(pick).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            return;
        };
        _ = card.class_list().add_1("is-glitch");
        *glitched.borrow_mut() = Some(card);
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                clear.as_ref().as_ref().unchecked_ref(),
                CARD_GLITCH_HOLD_MS,
            );
        }
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            CARD_GLITCH_INTERVAL_MS,
        );
    }
    tick.forget();
}

// ---------------- Contact bubble ----------------

struct BubbleState {
    bubble: web::HtmlElement,
    document: web::Document,
    hops: Cell<u32>,
    armed: Cell<bool>,
    rng: RefCell<StdRng>,
}

fn wire_contact_bubble(document: &web::Document) {
    let Some(el) = document.get_element_by_id("contact-bubble") else {
        return;
    };
    let Ok(bubble) = el.dyn_into::<web::HtmlElement>() else {
        return;
    };
    let state = Rc::new(BubbleState {
        bubble: bubble.clone(),
        document: document.clone(),
        hops: Cell::new(0),
        armed: Cell::new(false),
        rng: RefCell::new(StdRng::from_entropy()),
    });

    let hover_state = state.clone();
    let hover = Closure::wrap(Box::new(move || {
        handle_hover(&hover_state);
    }) as Box<dyn FnMut()>);
    _ = bubble.add_event_listener_with_callback("mouseenter", hover.as_ref().unchecked_ref());
    hover.forget();

    // Touch devices: taps count as hovers until armed, then the anchor
    // works normally.
    let click_state = state;
    let click = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        if !click_state.armed.get() {
            ev.prevent_default();
            handle_hover(&click_state);
        }
    }) as Box<dyn FnMut(_)>);
    _ = bubble.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
    click.forget();
}

fn handle_hover(state: &BubbleState) {
    if state.armed.get() {
        return;
    }
    state.hops.set(state.hops.get() + 1);
    teleport_bubble(&state.bubble, &mut state.rng.borrow_mut());
    if state.hops.get() >= BUBBLE_ARM_HOPS {
        state.armed.set(true);
        arm_bubble(state);
    }
}

fn arm_bubble(state: &BubbleState) {
    _ = state.bubble.class_list().add_1("is-armed");
    reveal_contact(&state.document);
    _ = state.bubble.set_attribute("href", "#contact");
    _ = state.bubble.set_attribute("aria-label", "Contact");
    state.bubble.set_text_content(Some("@Contact"));
}

/// Hop to a random padded viewport position, fading out before the move
/// and back in after it.
fn teleport_bubble(bubble: &web::HtmlElement, rng: &mut StdRng) {
    let Some(window) = web::window() else {
        return;
    };
    let rect = bubble.get_bounding_client_rect();
    let vw = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let vh = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let max_x = (vw - rect.width() - BUBBLE_PAD).max(BUBBLE_PAD);
    let max_y = (vh - rect.height() - BUBBLE_PAD).max(BUBBLE_PAD);
    let x = (BUBBLE_PAD + rng.gen::<f64>() * (max_x - BUBBLE_PAD)).floor();
    let y = (BUBBLE_PAD + rng.gen::<f64>() * (max_y - BUBBLE_PAD)).floor();

    _ = bubble.style().set_property("opacity", "0");
    let bubble_move = bubble.clone();
    let land = Closure::wrap(Box::new(move || {
        let style = bubble_move.style();
        _ = style.set_property("left", &format!("{x}px"));
        _ = style.set_property("bottom", "auto");
        _ = style.set_property("top", &format!("{y}px"));
        _ = style.set_property("opacity", "1");
    }) as Box<dyn FnMut()>);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        land.as_ref().unchecked_ref(),
        BUBBLE_HOP_DELAY_MS,
    );
    land.forget();
}

fn reveal_contact(document: &web::Document) {
    if let Some(mount) = document.get_element_by_id("contact-title-mount") {
        if mount.get_attribute("data-ready").is_none() {
            if let Ok(title) = document.create_element("h2") {
                title.set_class_name("section-title");
                title.set_text_content(Some("Contact"));
                _ = mount.append_child(&title);
                _ = mount.set_attribute("data-ready", "1");
            }
        }
    }
    if let Ok(Some(line)) = document.query_selector("#contact .contact-line") {
        _ = line.class_list().remove_1("is-hidden");
    }
}
