//! Web ScrollSpy Utilities
//!
//! Tracks which page section is "in view" from the window scroll offset and
//! drives smooth navigation between sections.
//! Manual navigation pins the active section until the scroll settles.

use wasm_bindgen::JsCast;

/// Distance below the viewport top used to probe for the active section
pub const PROBE_OFFSET_PX: f64 = 200.0;

/// Scroll offset past which the page counts as scrolled
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Height reserved for the fixed header when scrolling to a section
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Quiet period after which an in-flight navigation is considered settled
pub const SETTLE_MS: f64 = 200.0;

/// A section that can be looked up in the document by element id
pub trait Anchor: Copy + PartialEq + 'static {
    /// The DOM id of the section's wrapper element
    fn anchor_id(self) -> &'static str;
}

/// Vertical extent of a rendered section, in document coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBox {
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open containment: `[top, top + height)`
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }

    /// Scroll offset that puts this section just below the fixed header
    pub fn scroll_target(&self) -> f64 {
        self.top - HEADER_OFFSET_PX
    }
}

/// Scan sections in order and return the first one containing the probe line.
///
/// Sections without geometry (not mounted yet) are skipped.
pub fn scan_active<Id>(scroll_y: f64, sections: impl IntoIterator<Item = (Id, Option<SectionBox>)>) -> Option<Id> {
    let probe = scroll_y + PROBE_OFFSET_PX;
    sections
        .into_iter()
        .find_map(|(id, geometry)| geometry.filter(|b| b.contains(probe)).map(|_| id))
}

/// Pending optimistic navigation
#[derive(Clone, Copy, Debug, PartialEq)]
struct Pin<Id> {
    target: Id,
    last_activity_ms: f64,
}

/// Authoritative navigation state: active section plus scrolled flag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSpy<Id> {
    active: Id,
    scrolled: bool,
    pin: Option<Pin<Id>>,
}

impl<Id: Copy + PartialEq> ScrollSpy<Id> {
    pub fn new(initial: Id) -> Self {
        Self { active: initial, scrolled: false, pin: None }
    }

    pub fn active(&self) -> Id {
        self.active
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_pinned(&self) -> bool {
        self.pin.is_some()
    }

    /// Recompute state from the current scroll offset and section geometry.
    ///
    /// While pinned, the active section only changes once the scan reaches
    /// the pinned target or the previous scroll has been quiet for longer
    /// than [`SETTLE_MS`].
    pub fn observe(
        &mut self,
        scroll_y: f64,
        sections: impl IntoIterator<Item = (Id, Option<SectionBox>)>,
        now_ms: f64,
    ) {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD_PX;
        let found = scan_active(scroll_y, sections);

        if let Some(pin) = self.pin.as_mut() {
            let reached = found == Some(pin.target);
            let settled = now_ms - pin.last_activity_ms > SETTLE_MS;
            if !reached && !settled {
                pin.last_activity_ms = now_ms;
                return;
            }
            self.pin = None;
        }

        if let Some(id) = found {
            self.active = id;
        }
    }

    /// Optimistically activate `target` and hold it until navigation settles
    pub fn pin(&mut self, target: Id, now_ms: f64) {
        self.active = target;
        self.pin = Some(Pin { target, last_activity_ms: now_ms });
    }
}

// ========================
// DOM helpers
// ========================

/// Current time in milliseconds
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Current vertical scroll offset of the window (0 outside a browser)
pub fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Measure the element with the given id
pub fn measure(anchor_id: &str) -> Option<SectionBox> {
    let element = web_sys::window()?
        .document()?
        .get_element_by_id(anchor_id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()?;
    Some(SectionBox::new(
        f64::from(element.offset_top()),
        f64::from(element.offset_height()),
    ))
}

/// Measure every section in order; unmounted sections yield `None`
pub fn measure_all<Id: Anchor>(sections: &[Id]) -> Vec<(Id, Option<SectionBox>)> {
    sections.iter().map(|&id| (id, measure(id.anchor_id()))).collect()
}

/// Smooth-scroll the window so the section sits below the header.
///
/// Returns `false` when the section is not in the document.
pub fn scroll_to_section<Id: Anchor>(section: Id) -> bool {
    let Some(geometry) = measure(section.anchor_id()) else {
        log::debug!("[scrollspy] section #{} not mounted, skipping scroll", section.anchor_id());
        return false;
    };
    let Some(win) = web_sys::window() else {
        return false;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(geometry.scroll_target());
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
    true
}

/// Bind a window scroll listener.
///
/// `on_scroll` receives the scroll offset and fresh geometry for `sections`.
/// It is also invoked once immediately so state is correct at mount.
pub fn bind_window_scroll<Id, F>(sections: &'static [Id], on_scroll: F)
where
    Id: Anchor,
    F: Fn(f64, Vec<(Id, Option<SectionBox>)>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    on_scroll(window_scroll_y(), measure_all(sections));

    let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        on_scroll(window_scroll_y(), measure_all(sections));
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
    }
    listener.forget();
}
