//! Login form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::api::{ApiClient, ApiError, Multipart};
use crate::session::encode_password;

fn credentials_form(username: &str, password: &str) -> Result<Multipart, ApiError> {
    Multipart::new()?
        .text("username", username)?
        .text("password", &encode_password(password))
}

/// Maps a failed login call to the message shown in the banner.
fn login_error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Status { status: 400, .. } => "Invalid username or password",
        ApiError::Status { .. } => "Login failed. Please try again.",
        ApiError::NoResponse(_) => {
            "Cannot connect to server. Please check if the server is running."
        }
        ApiError::BuildFailed(_) | ApiError::ParseFailed(_) => {
            "Network error. Please check your connection."
        }
    }
}

#[component]
pub fn LoginForm(
    api: ApiClient,
    #[prop(into)] on_login_success: Callback<()>,
    #[prop(into)] on_switch_to_signup: Callback<()>,
) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if username.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            let sent = match credentials_form(&username.get(), &password.get()) {
                Ok(form) => api.post_form("/login", form).await.map(|_| ()),
                Err(err) => Err(err),
            };
            set_is_submitting.set(false);
            match sent {
                Ok(()) => on_login_success.run(()),
                Err(err) => set_error_msg.set(Some(login_error_message(&err).to_string())),
            }
        });
    };

    view! {
        <div class="auth-container hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="auth-form card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <h2 class="text-2xl font-bold text-center">"Login to Auction"</h2>

                        <div class="form-group form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                class="input input-bordered"
                                prop:value=username
                                on:input=move |ev| {
                                    set_username.set(event_target_value(&ev));
                                    set_error_msg.set(None);
                                }
                                required
                                disabled=move || is_submitting.get()
                            />
                        </div>

                        <div class="form-group form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                class="input input-bordered"
                                prop:value=password
                                on:input=move |ev| {
                                    set_password.set(event_target_value(&ev));
                                    set_error_msg.set(None);
                                }
                                required
                                disabled=move || is_submitting.get()
                            />
                        </div>

                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="error-message alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control mt-4">
                            <button
                                type="submit"
                                class="auth-button btn btn-primary"
                                disabled=move || is_submitting.get()
                            >
                                {move || if is_submitting.get() {
                                    view! {
                                        <span class="loading loading-spinner"></span>
                                        "Logging in..."
                                    }
                                        .into_any()
                                } else {
                                    "Login".into_any()
                                }}
                            </button>
                        </div>
                    </form>

                    <div class="auth-switch text-center pb-6">
                        <p class="text-sm">
                            "Don't have an account? "
                            <button
                                type="button"
                                class="link-button btn btn-link btn-xs px-1"
                                on:click=move |_| on_switch_to_signup.run(())
                                disabled=move || is_submitting.get()
                            >
                                "Sign up here"
                            </button>
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_message_mapping() {
        let bad_credentials = ApiError::Status {
            status: 400,
            message: None,
        };
        assert_eq!(
            login_error_message(&bad_credentials),
            "Invalid username or password"
        );

        let server_error = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(
            login_error_message(&server_error),
            "Login failed. Please try again."
        );

        let unreachable = ApiError::NoResponse("timeout".to_string());
        assert_eq!(
            login_error_message(&unreachable),
            "Cannot connect to server. Please check if the server is running."
        );

        let broken = ApiError::BuildFailed("no form".to_string());
        assert_eq!(
            login_error_message(&broken),
            "Network error. Please check your connection."
        );
    }
}
