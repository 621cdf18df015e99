//! Overlay focus and scroll side effects as a scoped guard.
//!
//! Opening a drawer or modal captures the previously focused element, locks
//! page scroll, and traps Tab focus inside the overlay container. All three
//! are released through [`OverlayGuard`]'s `Drop`, so cleanup runs on every
//! exit path.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[cfg(target_arch = "wasm32")]
const BODY_SCROLL_LOCK_CLASS: &str = "no-scroll";
#[cfg(target_arch = "wasm32")]
const FOCUSABLE_SELECTOR: &str =
    r#"button, [href], input, select, textarea, [tabindex]:not([tabindex="-1"])"#;

/// Focuses an element by id and reports whether a focusable HTML element was found.
pub fn focus_element_by_id(id: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return false;
        };
        let Some(element) = document.get_element_by_id(id) else {
            return false;
        };
        let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
            return false;
        };
        let _ = element.focus();
        true
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        false
    }
}

#[cfg(target_arch = "wasm32")]
fn focusable_children(container: &web_sys::Element) -> Vec<web_sys::HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    let mut items = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        if let Ok(item) = node.dyn_into::<web_sys::HtmlElement>() {
            items.push(item);
        }
    }
    items
}

#[cfg(target_arch = "wasm32")]
fn active_html_element() -> Option<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

#[cfg(target_arch = "wasm32")]
fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let class_list = body.class_list();
    let _ = if locked {
        class_list.add_1(BODY_SCROLL_LOCK_CLASS)
    } else {
        class_list.remove_1(BODY_SCROLL_LOCK_CLASS)
    };
}

/// Scoped overlay side effects: focus trap, scroll lock, focus restore.
///
/// Acquire when an overlay opens; drop when it closes. At most one guard
/// should be live at a time (the runtime's overlay reducer enforces this).
pub struct OverlayGuard {
    #[cfg(target_arch = "wasm32")]
    previous_focus: Option<web_sys::HtmlElement>,
    #[cfg(target_arch = "wasm32")]
    trap: Option<Closure<dyn FnMut(web_sys::KeyboardEvent)>>,
}

impl OverlayGuard {
    /// Captures focus state, locks scroll, and traps Tab inside `container_id`.
    ///
    /// When the container has no focusable children the trap is skipped but
    /// scroll lock and focus restore still apply.
    pub fn acquire(container_id: &str) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let previous_focus = active_html_element();
            set_body_scroll_locked(true);

            let document = web_sys::window().and_then(|window| window.document());
            let container = document
                .as_ref()
                .and_then(|doc| doc.get_element_by_id(container_id));

            let trap = container.and_then(|container| {
                let children = focusable_children(&container);
                let first = children.first()?.clone();
                let last = children.last()?.clone();
                let _ = first.focus();

                let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::wrap(Box::new(
                    move |event: web_sys::KeyboardEvent| {
                        if event.key() != "Tab" {
                            return;
                        }
                        let active = active_html_element();
                        let first_node: &web_sys::Node = first.as_ref();
                        let last_node: &web_sys::Node = last.as_ref();
                        let at_first = active
                            .as_ref()
                            .is_some_and(|el| el.is_same_node(Some(first_node)));
                        let at_last = active
                            .as_ref()
                            .is_some_and(|el| el.is_same_node(Some(last_node)));
                        if event.shift_key() && at_first {
                            event.prevent_default();
                            let _ = last.focus();
                        } else if !event.shift_key() && at_last {
                            event.prevent_default();
                            let _ = first.focus();
                        }
                    },
                ));

                let attached = document.as_ref().is_some_and(|doc| {
                    doc.add_event_listener_with_callback(
                        "keydown",
                        closure.as_ref().unchecked_ref(),
                    )
                    .is_ok()
                });
                attached.then_some(closure)
            });

            Self {
                previous_focus,
                trap,
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = container_id;
            Self {}
        }
    }
}

impl Drop for OverlayGuard {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let (Some(document), Some(closure)) = (
                web_sys::window().and_then(|window| window.document()),
                self.trap.take(),
            ) {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    closure.as_ref().unchecked_ref(),
                );
            }
            set_body_scroll_locked(false);
            if let Some(previous) = self.previous_focus.take() {
                let _ = previous.focus();
            }
        }
    }
}
