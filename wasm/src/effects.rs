//! Presentation effects: show/hide, slider fill, scrolling, navbar, sidebar

use shared::{slider_fill_percent, UiConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions,
    Window,
};

use crate::dom::{query_all, NavControls, SliderControls};
use crate::error::UiResult;
use crate::timer;

/// Attach `handler` to `target` for the lifetime of the page
pub fn listen(
    target: &EventTarget,
    event_type: &str,
    handler: impl FnMut(Event) + 'static,
) -> UiResult<()> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Make `element` visible, optionally with a transient animation class.
///
/// The class is removed after `animation_ms`. Overlapping calls on the same
/// element each schedule their own removal.
pub fn show_element(element: &HtmlElement, animation: Option<&'static str>, animation_ms: u32) {
    if let Err(err) = element.style().set_property("display", "block") {
        tracing::warn!(?err, "Could not show element");
    }
    if let Some(class) = animation {
        if element.class_list().add_1(class).is_ok() {
            let element = element.clone();
            timer::after(animation_ms, move || {
                let _ = element.class_list().remove_1(class);
            });
        }
    }
}

pub fn hide_element(element: &HtmlElement) {
    if let Err(err) = element.style().set_property("display", "none") {
        tracing::warn!(?err, "Could not hide element");
    }
}

/// Track background for a slider filled to `percent`
pub fn slider_gradient(percent: f64) -> String {
    format!(
        "linear-gradient(90deg, var(--primary-green) {p}%, var(--border-light) {p}%)",
        p = percent
    )
}

/// Repaint a slider's track from its current value
pub fn update_slider_fill(slider: &HtmlInputElement) {
    let max = slider.max().parse().unwrap_or(100.0);
    let percent = slider_fill_percent(slider.value_as_number(), max);
    if let Err(err) = slider.style().set_property("background", &slider_gradient(percent)) {
        tracing::warn!(?err, "Could not paint slider");
    }
}

/// Keep each slider's label and track in sync with its value
pub fn bind_sliders(sliders: &[SliderControls]) -> UiResult<()> {
    for controls in sliders {
        let slider = controls.slider.clone();
        let label = controls.value_label.clone();
        listen(&controls.slider, "input", move |_| {
            label.set_text_content(Some(&slider.value()));
            update_slider_fill(&slider);
        })?;
        update_slider_fill(&controls.slider);
    }
    Ok(())
}

/// Section id targeted by an in-page link (`#soil` -> `soil`)
pub fn section_id_from_href(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#').unwrap_or(href);
    (!id.is_empty()).then_some(id)
}

/// Smoothly scroll the section with `section_id` into view, if it exists
pub fn scroll_to_section(document: &Document, section_id: &str) {
    if let Some(target) = document.get_element_by_id(section_id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Smooth-scroll every `.nav-link` to its target section
pub fn bind_nav_links(document: &Document) -> UiResult<()> {
    for link in query_all(document, ".nav-link")? {
        let document = document.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        listen(&link, "click", move |event| {
            event.prevent_default();
            if let Some(id) = section_id_from_href(&href) {
                scroll_to_section(&document, id);
            }
        })?;
    }
    Ok(())
}

/// Fade in each `.analysis-card` once enough of it is visible
pub fn bind_scroll_reveal(document: &Document, ui: &UiConfig) -> UiResult<()> {
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(|entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1("fade-in");
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(ui.reveal_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for card in query_all(document, ".analysis-card")? {
        observer.observe(&card);
    }
    Ok(())
}

/// Navbar appearance for a scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

impl NavbarStyle {
    pub fn for_scroll(scroll_y: f64, threshold_px: f64) -> Self {
        if scroll_y > threshold_px {
            Self {
                background: "rgba(255, 255, 255, 0.98)",
                box_shadow: "var(--shadow-md)",
            }
        } else {
            Self {
                background: "rgba(255, 255, 255, 0.95)",
                box_shadow: "none",
            }
        }
    }

    fn apply(&self, navbar: &HtmlElement) -> Result<(), JsValue> {
        let style = navbar.style();
        style.set_property("background", self.background)?;
        style.set_property("box-shadow", self.box_shadow)
    }
}

/// Switch the navbar style as the page scrolls past the threshold
pub fn bind_navbar(window: &Window, navbar: &HtmlElement, ui: &UiConfig) -> UiResult<()> {
    let scroller = window.clone();
    let navbar = navbar.clone();
    let threshold = ui.navbar_threshold_px;
    listen(window, "scroll", move |_| {
        let scroll_y = scroller.scroll_y().unwrap_or(0.0);
        if let Err(err) = NavbarStyle::for_scroll(scroll_y, threshold).apply(&navbar) {
            tracing::warn!(?err, "Could not restyle navbar");
        }
    })
}

/// Sidebar open/close buttons
pub fn bind_sidebar(nav: &NavControls) -> UiResult<()> {
    let sidebar = nav.sidebar.clone();
    listen(&nav.sidebar_toggle, "click", move |_| {
        let _ = sidebar.class_list().toggle("open");
    })?;

    let sidebar = nav.sidebar.clone();
    listen(&nav.close_sidebar, "click", move |_| {
        let _ = sidebar.class_list().remove_1("open");
    })
}

/// Forward a click on `zone` to `target`
pub fn forward_click(zone: &Element, target: &HtmlElement) -> UiResult<()> {
    let target = target.clone();
    listen(zone, "click", move |_| target.click())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_gradient() {
        assert_eq!(
            slider_gradient(35.0),
            "linear-gradient(90deg, var(--primary-green) 35%, var(--border-light) 35%)"
        );
        assert_eq!(
            slider_gradient(12.5),
            "linear-gradient(90deg, var(--primary-green) 12.5%, var(--border-light) 12.5%)"
        );
    }

    #[test]
    fn test_section_id_from_href() {
        assert_eq!(section_id_from_href("#soil-analysis"), Some("soil-analysis"));
        assert_eq!(section_id_from_href("#"), None);
        assert_eq!(section_id_from_href(""), None);
    }

    #[test]
    fn test_navbar_switches_above_threshold() {
        assert_eq!(NavbarStyle::for_scroll(100.0, 100.0).box_shadow, "none");
        assert_eq!(
            NavbarStyle::for_scroll(100.5, 100.0).background,
            "rgba(255, 255, 255, 0.98)"
        );
    }
}
