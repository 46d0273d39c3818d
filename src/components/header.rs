//! Top bar of the authenticated view.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;

/// Title plus the logout button.
///
/// Logout clears local state first (through the callback), then tells
/// the server. A failed logout call is logged and otherwise ignored;
/// the local session is already gone by then.
#[component]
pub fn Header(api: ApiClient, #[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let log_out = move |_| {
        on_logout.run(());
        let api = api.clone();
        spawn_local(async move {
            if let Err(err) = api.post("/logout").await {
                leptos::logging::error!("Logout failed: {err}");
            }
        });
    };

    view! {
        <div class="app-header navbar bg-base-100 shadow-md px-4 md:px-8">
            <div class="flex-1">
                <h1 class="text-2xl font-bold">"Item Auction"</h1>
            </div>
            <div class="flex-none">
                <button class="logout-button btn btn-ghost" on:click=log_out>
                    "Logout"
                </button>
            </div>
        </div>
    }
}
