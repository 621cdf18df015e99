//! Browser (`wasm32`) implementations of [`storefront_host`] service contracts.
//!
//! Concrete adapters for the storefront's host traits: `localStorage`-backed
//! preference storage, the `prefers-color-scheme` media query, cross-tab
//! `storage` event subscription, and the overlay focus/scroll side-effect
//! guard. Every entry point degrades to a no-op on non-WASM targets so the
//! runtime crate stays testable on the host toolchain.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod color_scheme;
pub mod overlay;
pub mod storage;
pub mod storage_sync;

pub use color_scheme::{watch_os_color_scheme, ColorSchemeWatch, WebColorSchemeSource};
pub use overlay::{focus_element_by_id, OverlayGuard};
pub use storage::local_prefs::WebPrefsStore;
pub use storage_sync::{watch_storage_keys, StorageWatch};

/// Returns the preference store for the current target.
pub fn prefs_store() -> WebPrefsStore {
    WebPrefsStore
}

/// Returns the OS color-scheme source for the current target.
pub fn color_scheme_source() -> WebColorSchemeSource {
    WebColorSchemeSource
}

/// Returns the current `window.location.search` query string, if any.
pub fn location_query() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.location().search().ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
