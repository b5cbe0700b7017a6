//! Error Banner Component
//!
//! Shows the current failure notice; dismissible, and clears itself after a
//! few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{clear_notice, use_app_store, AppStateStoreFields};

const NOTICE_TIMEOUT_MS: u32 = 8_000;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_app_store();

    // Auto-dismiss, unless a newer notice replaced this one meanwhile
    Effect::new(move |_| {
        if let Some(notice) = store.notice().get() {
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                if store.notice().get_untracked().as_ref() == Some(&notice) {
                    clear_notice(&store);
                }
            });
        }
    });

    view! {
        {move || store.notice().get().map(|message| view! {
            <div class="error-banner" role="alert">
                <span class="error-text">{message}</span>
                <button class="close-btn" on:click=move |_| clear_notice(&store)>"×"</button>
            </div>
        })}
    }
}
