use super::*;

use crate::model::Toast;

#[component]
pub(super) fn ToastStack() -> impl IntoView {
    let state = use_storefront().state;

    view! {
        <div class="toast-stack" aria-hidden="true">
            <For
                each=move || state.get().toasts.clone()
                key=|toast| toast.id
                children=move |toast| view! { <ToastCard toast/> }
            />
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let runtime = use_storefront();
    let toast_id = toast.id;

    view! {
        <div class=format!("toast toast-{}", toast.kind.icon_id())>
            <div class="toast-body">
                <strong>{toast.kind.title()}</strong>
                <p>{toast.message.clone()}</p>
            </div>
            <button
                class="icon-button"
                aria-label="Dismiss"
                data-action="toast-close"
                on:click=move |_| runtime.dispatch_ui("toast-close", Some(toast_id.0.to_string().as_str()))
            >
                "\u{2715}"
            </button>
        </div>
    }
}

/// Visually hidden live region mirroring the latest toast for screen readers.
#[component]
pub(super) fn LiveAnnouncer() -> impl IntoView {
    let state = use_storefront().state;

    view! {
        <div class="visually-hidden" role="status" aria-live="polite">
            {move || state.get().announcement.unwrap_or_default()}
        </div>
    }
}
