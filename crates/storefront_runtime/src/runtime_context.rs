//! Store provider and context wiring.
//!
//! This module owns the long-lived reducer container, the effect queue, and
//! host bootstrap wiring. UI composition stays in [`crate::components`].

use leptos::*;

use crate::debug::current_debug_flag;
use crate::host::StoreHostContext;
use crate::model::StoreState;
use crate::reducer::{reduce_store, StoreAction, StoreEffect};

#[derive(Clone, Copy)]
/// Leptos context for reading store state and dispatching [`StoreAction`]
/// values.
pub struct StorefrontContext {
    /// Host service bundle for executing side effects.
    pub host: StoredValue<StoreHostContext>,
    /// Reactive store state signal.
    pub state: RwSignal<StoreState>,
    /// Queue of effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<StoreEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<StoreAction>,
}

impl StorefrontContext {
    /// Dispatches a reducer action through the context callback.
    pub fn dispatch_action(&self, action: StoreAction) {
        self.dispatch.call(action);
    }

    /// Dispatches a control by its symbolic action name. Unknown names and
    /// malformed arguments are logged and dropped.
    pub fn dispatch_ui(&self, name: &str, arg: Option<&str>) {
        match crate::dispatch::parse_ui_action(name, arg) {
            Some(action) => self.dispatch_action(action),
            None => logging::warn!("unhandled ui action: {name} {arg:?}"),
        }
    }
}

/// Installs the effect executor that drains reducer-emitted effects in order.
fn install_effect_executor(runtime: StorefrontContext) {
    // Clear the queue before processing so nested dispatches enqueue a fresh
    // batch instead of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            runtime.host.get_value().run_store_effect(runtime, effect);
        }
    });
}

#[component]
/// Provides [`StorefrontContext`] to descendant components and boots
/// persisted state.
pub fn StoreProvider(
    /// Injected host bundle assembled by the entry layer.
    #[prop(optional)]
    host_context: Option<StoreHostContext>,
    children: Children,
) -> impl IntoView {
    let host = store_value(host_context.unwrap_or_default());
    let state = create_rw_signal(StoreState::new(current_debug_flag()));
    let effects = create_rw_signal(Vec::<StoreEffect>::new());

    let dispatch = Callback::new(move |action: StoreAction| {
        let mut store = state.get_untracked();
        let previous = store.clone();
        if store.debug {
            logging::log!("store action: {action:?}");
        }

        match reduce_store(&mut store, action) {
            Ok(new_effects) => {
                if store != previous {
                    state.set(store);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("store reducer error: {err}"),
        }
    });

    let runtime = StorefrontContext {
        host,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);

    install_effect_executor(runtime);
    let booted_host = host.get_value();
    booted_host.install_boot_hydration(dispatch);
    booted_host.install_environment_watchers(dispatch);

    children().into_view()
}

/// Returns the current [`StorefrontContext`].
///
/// # Panics
///
/// Panics if called outside [`StoreProvider`].
pub fn use_storefront() -> StorefrontContext {
    use_context::<StorefrontContext>().expect("StorefrontContext not provided")
}
