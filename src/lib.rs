//! Item auction frontend.
//!
//! A client-side rendered single page: session-cookie auth gating an
//! item list, with a dialog for posting new items.
//! - `api`: HTTP client, multipart bodies, failure taxonomy
//! - `session`: auth state machine and session-cookie helpers
//! - `items`: wire-to-display mapping and the hover picture cycle
//! - `validate`: form gates and their user-facing messages
//! - `components`: UI layer

mod api;
mod components {
    pub mod add_item_modal;
    pub mod header;
    mod icons;
    pub mod item_list;
    pub mod login;
    pub mod signup;
}
mod items;
mod session;
mod validate;

use crate::api::{ApiClient, FailureKind};
use crate::components::add_item_modal::AddItemModal;
use crate::components::header::Header;
use crate::components::item_list::ItemList;
use crate::components::login::LoginForm;
use crate::components::signup::SignupForm;
use crate::items::{Item, ItemRecord};
use crate::session::{AuthMode, AuthState};

use leptos::prelude::*;
use leptos::task::spawn_local;

// Thin wrappers over the browser APIs the app touches directly
// (document.cookie, window.location, object URLs).
pub(crate) mod web {
    pub mod cookie;
    pub mod location;
    mod object_url;

    pub use object_url::ObjectUrl;
}

#[component]
pub fn App() -> impl IntoView {
    let api = ApiClient::from_window();

    // Start from the optimistic side: render the item view and let the
    // first 400/401 demote us to the login screen.
    let auth = RwSignal::new(AuthState::assume_signed_in());
    let show_menu = RwSignal::new(false);

    leptos::logging::log!("session cookie present: {}", session::has_session());

    let signed_in = Memo::new(move |_| auth.with(AuthState::is_signed_in));
    let auth_mode = Memo::new(move |_| auth.with(AuthState::mode));
    let items = Signal::derive(move || auth.with(|state| state.items().to_vec()));

    let load_items = Callback::new({
        let api = api.clone();
        move |_: ()| {
            let api = api.clone();
            spawn_local(async move {
                match api.get_json::<Vec<ItemRecord>>("/items").await {
                    Ok(records) => {
                        let loaded = records
                            .into_iter()
                            .map(|record| Item::from_record(record, api.base_url()))
                            .collect();
                        auth.update(|state| state.items_loaded(loaded));
                    }
                    Err(err) if err.kind() == FailureKind::SessionInvalid => {
                        session::clear_session();
                        auth.update(AuthState::sign_out);
                    }
                    // Connectivity or server trouble leaves whatever
                    // list we already have on screen.
                    Err(_) => {}
                }
            });
        }
    });

    // Every promotion to signed-in kicks off a load. The memo only
    // fires on actual transitions, and a demotion racing a late
    // response is handled inside the state machine.
    Effect::new(move |_| {
        let signed_in = signed_in.get();
        leptos::logging::log!("signed in: {signed_in}");
        if signed_in {
            load_items.run(());
        }
    });

    let on_login_success = Callback::new(move |_: ()| auth.update(AuthState::login_succeeded));
    let on_signup_success = Callback::new(move |_: ()| auth.update(AuthState::signup_succeeded));
    let to_signup =
        Callback::new(move |_: ()| auth.update(|state| state.switch_mode(AuthMode::Signup)));
    let to_login =
        Callback::new(move |_: ()| auth.update(|state| state.switch_mode(AuthMode::Login)));
    let force_sign_out = Callback::new(move |_: ()| {
        session::clear_session();
        auth.update(AuthState::sign_out);
    });

    let api_auth = api.clone();
    let api_header = api.clone();
    let api_modal = api.clone();

    view! {
        <Show
            when=move || signed_in.get()
            fallback=move || {
                let api_login = api_auth.clone();
                let api_signup = api_auth.clone();
                view! {
                    <Show
                        when=move || auth_mode.get() == Some(AuthMode::Signup)
                        fallback=move || {
                            view! {
                                <LoginForm
                                    api=api_login.clone()
                                    on_login_success=on_login_success
                                    on_switch_to_signup=to_signup
                                />
                            }
                        }
                    >
                        <SignupForm
                            api=api_signup.clone()
                            on_signup_success=on_signup_success
                            on_switch_to_login=to_login
                        />
                    </Show>
                }
            }
        >
            <div class="App min-h-screen bg-base-200">
                <Header api=api_header.clone() on_logout=force_sign_out />
                <ItemList items=items />
                <button
                    class="add-item-button btn btn-primary fixed bottom-6 right-6 shadow-lg"
                    on:click=move |_| show_menu.update(|open| *open = !*open)
                >
                    {move || if show_menu.get() { "Close Menu" } else { "Add Item" }}
                </button>
                <AddItemModal
                    api=api_modal.clone()
                    open=show_menu
                    on_close=Callback::new(move |_: ()| show_menu.set(false))
                    on_success=load_items
                    on_failure=force_sign_out
                />
            </div>
        </Show>
    }
}
