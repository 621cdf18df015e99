//! `prefers-color-scheme` probe and change subscription.

use storefront_host::{ColorScheme, ColorSchemeSource};

#[cfg(target_arch = "wasm32")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, Default)]
/// Color-scheme source backed by the browser media query.
pub struct WebColorSchemeSource;

impl ColorSchemeSource for WebColorSchemeSource {
    fn preferred(&self) -> ColorScheme {
        #[cfg(target_arch = "wasm32")]
        {
            let prefers_dark = web_sys::window()
                .and_then(|window| window.match_media(DARK_SCHEME_QUERY).ok().flatten())
                .map(|list| list.matches())
                .unwrap_or(false);
            if prefers_dark {
                ColorScheme::Dark
            } else {
                ColorScheme::Light
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            ColorScheme::Light
        }
    }
}

/// Subscription handle for OS color-scheme changes.
///
/// Dropping the handle without calling [`ColorSchemeWatch::remove`] leaks the
/// listener; the runtime removes it on cleanup.
pub struct ColorSchemeWatch {
    #[cfg(target_arch = "wasm32")]
    media: Option<web_sys::MediaQueryList>,
    #[cfg(target_arch = "wasm32")]
    closure: Option<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MediaQueryListEvent)>>,
}

impl ColorSchemeWatch {
    /// Detaches the underlying media-query listener.
    pub fn remove(self) {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            if let (Some(media), Some(closure)) = (self.media, self.closure) {
                let _ = media.remove_event_listener_with_callback(
                    "change",
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

/// Subscribes to OS color-scheme changes.
///
/// The callback receives the new preference whenever the OS-level setting
/// flips. On non-WASM targets this returns an inert handle and the callback is
/// never invoked.
pub fn watch_os_color_scheme(callback: impl Fn(ColorScheme) + 'static) -> ColorSchemeWatch {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast};

        let Some(media) = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        else {
            return ColorSchemeWatch {
                media: None,
                closure: None,
            };
        };

        let closure = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::wrap(Box::new(
            move |event: web_sys::MediaQueryListEvent| {
                let scheme = if event.matches() {
                    ColorScheme::Dark
                } else {
                    ColorScheme::Light
                };
                callback(scheme);
            },
        ));

        if media
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .is_err()
        {
            return ColorSchemeWatch {
                media: None,
                closure: None,
            };
        }

        ColorSchemeWatch {
            media: Some(media),
            closure: Some(closure),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = callback;
        ColorSchemeWatch {}
    }
}
