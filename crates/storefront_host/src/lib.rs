//! Typed host-domain contracts shared by the storefront runtime and browser adapters.
//!
//! This crate is the API boundary for platform services the storefront depends on:
//! keyed preference/collection storage, wall-clock time, the OS color-scheme
//! preference, and the (mocked) remote backend gateway. Concrete browser adapters
//! live in `storefront_host_web`; the runtime only ever talks to the traits here.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod backend;
pub mod color_scheme;
pub mod storage;
pub mod time;

pub use backend::{
    BackendEnvelope, BackendFuture, BackendGateway, NewsletterSignup, NoopBackendGateway,
    OrderSubmission,
};
pub use color_scheme::{ColorScheme, ColorSchemeSource, FixedColorSchemeSource};
pub use storage::prefs::{
    load_collection_with, load_pref_with, save_collection_with, save_pref_with, MemoryPrefsStore,
    NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use time::{mint_record_id, unix_time_ms_now};
