//! Host-side helpers for executing reducer effects and wiring browser
//! environment watchers.
//!
//! Reducer semantics stay pure; everything that touches storage, timers, the
//! backend, or the DOM focus trap runs here behind a typed boundary that can
//! be injected and mocked.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::{logging, on_cleanup, set_timeout, spawn_local, Callable, Callback, SignalGetUntracked};
use storefront_host::{BackendGateway, ColorSchemeSource, NoopBackendGateway, PrefsStore};
use storefront_host_web::{
    color_scheme_source, prefs_store, watch_os_color_scheme, watch_storage_keys, OverlayGuard,
};

use crate::model::{Overlay, ORDER_SUBMIT_LATENCY_MS, TOAST_DISMISS_MS};
use crate::persistence::{
    self, CART_KEY, COMPARE_KEY, REVIEWS_KEY, STORAGE_KEYS, THEME_KEY, WISHLIST_KEY,
};
use crate::reducer::{StoreAction, StoreEffect};
use crate::runtime_context::StorefrontContext;

#[derive(Clone)]
/// Host service bundle for store side effects.
pub struct StoreHostContext {
    prefs: Rc<dyn PrefsStore>,
    backend: Rc<dyn BackendGateway>,
    color_scheme: Rc<dyn ColorSchemeSource>,
    // At most one overlay is open, so at most one focus trap is live.
    overlay_guard: Rc<RefCell<Option<OverlayGuard>>>,
}

impl Default for StoreHostContext {
    fn default() -> Self {
        Self {
            prefs: Rc::new(prefs_store()),
            backend: Rc::new(NoopBackendGateway),
            color_scheme: Rc::new(color_scheme_source()),
            overlay_guard: Rc::new(RefCell::new(None)),
        }
    }
}

impl StoreHostContext {
    /// Builds a host context with injected services, used by tests and
    /// alternative entry layers.
    pub fn new(
        prefs: Rc<dyn PrefsStore>,
        backend: Rc<dyn BackendGateway>,
        color_scheme: Rc<dyn ColorSchemeSource>,
    ) -> Self {
        Self {
            prefs,
            backend,
            color_scheme,
            overlay_guard: Rc::new(RefCell::new(None)),
        }
    }

    /// Returns the configured preference store.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Returns the configured backend gateway.
    pub fn backend_gateway(&self) -> Rc<dyn BackendGateway> {
        self.backend.clone()
    }

    /// Seeds the OS color scheme and asynchronously hydrates persisted
    /// collections into the store.
    pub fn install_boot_hydration(&self, dispatch: Callback<StoreAction>) {
        dispatch.call(StoreAction::OsColorSchemeChanged(
            self.color_scheme.preferred(),
        ));

        let prefs = self.prefs.clone();
        spawn_local(async move {
            let snapshot = persistence::load_boot_snapshot(prefs.as_ref()).await;
            dispatch.call(StoreAction::HydrateSnapshot(snapshot));
        });
    }

    /// Subscribes to OS color-scheme changes and cross-tab storage writes.
    /// Both listeners are detached when the owning scope is disposed.
    pub fn install_environment_watchers(&self, dispatch: Callback<StoreAction>) {
        let scheme_watch = watch_os_color_scheme(move |scheme| {
            dispatch.call(StoreAction::OsColorSchemeChanged(scheme));
        });

        let prefs = self.prefs.clone();
        let storage_watch = watch_storage_keys(&STORAGE_KEYS, move |key| {
            let prefs = prefs.clone();
            spawn_local(async move {
                // Last write wins; the other tab's persisted value replaces
                // this tab's collection wholesale.
                let action = match key {
                    CART_KEY => StoreAction::HydrateCart(
                        persistence::load_cart(prefs.as_ref()).await,
                    ),
                    WISHLIST_KEY => StoreAction::HydrateWishlist(
                        persistence::load_wishlist(prefs.as_ref()).await,
                    ),
                    COMPARE_KEY => StoreAction::HydrateCompare(
                        persistence::load_compare(prefs.as_ref()).await,
                    ),
                    REVIEWS_KEY => StoreAction::HydrateReviews(
                        persistence::load_reviews(prefs.as_ref()).await,
                    ),
                    THEME_KEY => StoreAction::HydrateTheme(
                        persistence::load_theme(prefs.as_ref()).await,
                    ),
                    _ => return,
                };
                dispatch.call(action);
            });
        });

        on_cleanup(move || {
            scheme_watch.remove();
            storage_watch.remove();
        });
    }

    /// Executes a single [`StoreEffect`] emitted by the reducer.
    pub fn run_store_effect(&self, runtime: StorefrontContext, effect: StoreEffect) {
        match effect {
            StoreEffect::PersistCart => {
                let prefs = self.prefs.clone();
                let cart = runtime.state.get_untracked().cart;
                spawn_local(async move {
                    persistence::persist_cart(prefs.as_ref(), &cart).await;
                });
            }
            StoreEffect::PersistWishlist => {
                let prefs = self.prefs.clone();
                let wishlist = runtime.state.get_untracked().wishlist;
                spawn_local(async move {
                    persistence::persist_wishlist(prefs.as_ref(), &wishlist).await;
                });
            }
            StoreEffect::PersistCompare => {
                let prefs = self.prefs.clone();
                let compare = runtime.state.get_untracked().compare;
                spawn_local(async move {
                    persistence::persist_compare(prefs.as_ref(), &compare).await;
                });
            }
            StoreEffect::PersistReviews => {
                let prefs = self.prefs.clone();
                let reviews = runtime.state.get_untracked().reviews;
                spawn_local(async move {
                    persistence::persist_reviews(prefs.as_ref(), &reviews).await;
                });
            }
            StoreEffect::PersistTheme => {
                let prefs = self.prefs.clone();
                let theme = runtime.state.get_untracked().theme.explicit;
                spawn_local(async move {
                    persistence::persist_theme(prefs.as_ref(), theme).await;
                });
            }
            StoreEffect::OverlayChanged(next) => self.move_focus_trap(next),
            StoreEffect::ScheduleToastDismiss(toast_id) => {
                set_timeout(
                    move || runtime.dispatch.call(StoreAction::DismissToast(toast_id)),
                    Duration::from_millis(TOAST_DISMISS_MS),
                );
            }
            StoreEffect::DeliverOrder(submission) => {
                let backend = self.backend.clone();
                set_timeout(
                    move || {
                        spawn_local(async move {
                            let envelope = backend.submit_order(&submission).await;
                            if let Some(error) = envelope.error {
                                logging::warn!("order delivery failed: {error}");
                            }
                            runtime.dispatch.call(StoreAction::OrderDelivered);
                        });
                    },
                    Duration::from_millis(ORDER_SUBMIT_LATENCY_MS),
                );
            }
            StoreEffect::DeliverNewsletter(signup) => {
                let backend = self.backend.clone();
                spawn_local(async move {
                    let envelope = backend.subscribe_newsletter(&signup).await;
                    if let Some(error) = envelope.error {
                        logging::warn!("newsletter signup failed: {error}");
                    }
                });
            }
        }
    }

    /// Drops the previous focus trap (restoring focus and scroll) before
    /// acquiring one for the newly opened overlay.
    fn move_focus_trap(&self, next: Option<Overlay>) {
        self.overlay_guard.borrow_mut().take();
        if let Some(overlay) = next {
            *self.overlay_guard.borrow_mut() =
                Some(OverlayGuard::acquire(overlay.container_dom_id()));
        }
    }
}
