//! Signup form with per-field validation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::api::{ApiClient, ApiError, Multipart};
use crate::session::encode_password;
use crate::validate::{SignupErrors, validate_signup};

fn signup_form(username: &str, email: &str, password: &str) -> Result<Multipart, ApiError> {
    Multipart::new()?
        .text("username", username)?
        .text("email", email)?
        .text("password", &encode_password(password))
}

/// Maps a failed signup call to the general banner message. A 400 is a
/// domain answer here (duplicate user, rejected input), not a session
/// problem, so the server's own message is surfaced when it has one.
fn signup_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status {
            status: 400,
            message,
        } => match message {
            Some(msg) if msg.contains("already exists") => {
                "User already exists, please login instead".to_string()
            }
            Some(msg) if !msg.is_empty() => msg.clone(),
            _ => "Invalid data provided".to_string(),
        },
        ApiError::Status { .. } => "Signup failed. Please try again.".to_string(),
        ApiError::NoResponse(_) => {
            "Cannot connect to server. Please check if the server is running.".to_string()
        }
        ApiError::BuildFailed(_) | ApiError::ParseFailed(_) => {
            "Network error. Please check your connection.".to_string()
        }
    }
}

#[component]
pub fn SignupForm(
    api: ApiClient,
    #[prop(into)] on_signup_success: Callback<()>,
    #[prop(into)] on_switch_to_login: Callback<()>,
) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (errors, set_errors) = signal(SignupErrors::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let found = validate_signup(
            &username.get(),
            &email.get(),
            &password.get(),
            &confirm_password.get(),
        );
        if !found.is_clean() {
            set_errors.set(found);
            return;
        }

        set_is_submitting.set(true);
        set_errors.set(SignupErrors::default());

        let api = api.clone();
        spawn_local(async move {
            let sent = match signup_form(&username.get(), &email.get(), &password.get()) {
                Ok(form) => api.post_form("/signup", form).await.map(|_| ()),
                Err(err) => Err(err),
            };
            set_is_submitting.set(false);
            match sent {
                Ok(()) => on_signup_success.run(()),
                Err(err) => {
                    set_errors.update(|e| e.general = Some(signup_error_message(&err)));
                }
            }
        });
    };

    view! {
        <div class="auth-container hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="auth-form card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <h2 class="text-2xl font-bold text-center">"Sign Up for Auction"</h2>

                        <div class="form-group form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username *"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                class="input input-bordered"
                                prop:value=username
                                on:input=move |ev| {
                                    set_username.set(event_target_value(&ev));
                                    set_errors.update(|e| e.username = None);
                                }
                                required
                                disabled=move || is_submitting.get()
                            />
                            <Show when=move || errors.with(|e| e.username.is_some())>
                                <div class="field-error text-error text-sm mt-1">
                                    {move || errors.with(|e| e.username.clone().unwrap_or_default())}
                                </div>
                            </Show>
                        </div>

                        <div class="form-group form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email *"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                class="input input-bordered"
                                prop:value=email
                                on:input=move |ev| {
                                    set_email.set(event_target_value(&ev));
                                    set_errors.update(|e| e.email = None);
                                }
                                required
                                disabled=move || is_submitting.get()
                            />
                            <Show when=move || errors.with(|e| e.email.is_some())>
                                <div class="field-error text-error text-sm mt-1">
                                    {move || errors.with(|e| e.email.clone().unwrap_or_default())}
                                </div>
                            </Show>
                        </div>

                        <div class="form-group form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password *"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                class="input input-bordered"
                                prop:value=password
                                on:input=move |ev| {
                                    set_password.set(event_target_value(&ev));
                                    set_errors.update(|e| e.password = None);
                                }
                                required
                                disabled=move || is_submitting.get()
                            />
                            <Show when=move || errors.with(|e| e.password.is_some())>
                                <div class="field-error text-error text-sm mt-1">
                                    {move || errors.with(|e| e.password.clone().unwrap_or_default())}
                                </div>
                            </Show>
                            <div class="password-requirements label">
                                <span class="label-text-alt text-base-content/60">
                                    "Password must be at least 8 characters long and contain \
                                     uppercase, lowercase, number, and special character."
                                </span>
                            </div>
                        </div>

                        <div class="form-group form-control">
                            <label class="label" for="confirm-password">
                                <span class="label-text">"Confirm Password *"</span>
                            </label>
                            <input
                                id="confirm-password"
                                type="password"
                                class="input input-bordered"
                                prop:value=confirm_password
                                on:input=move |ev| {
                                    set_confirm_password.set(event_target_value(&ev));
                                    set_errors.update(|e| e.confirm_password = None);
                                }
                                required
                                disabled=move || is_submitting.get()
                            />
                            <Show when=move || errors.with(|e| e.confirm_password.is_some())>
                                <div class="field-error text-error text-sm mt-1">
                                    {move || {
                                        errors.with(|e| e.confirm_password.clone().unwrap_or_default())
                                    }}
                                </div>
                            </Show>
                        </div>

                        <Show when=move || errors.with(|e| e.general.is_some())>
                            <div role="alert" class="error-message alert alert-error text-sm py-2">
                                <span>{move || errors.with(|e| e.general.clone().unwrap_or_default())}</span>
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
                                        "Creating Account..."
                                    }
                                        .into_any()
                                } else {
                                    "Sign Up".into_any()
                                }}
                            </button>
                        </div>
                    </form>

                    <div class="auth-switch text-center pb-6">
                        <p class="text-sm">
                            "Already have an account? "
                            <button
                                type="button"
                                class="link-button btn btn-link btn-xs px-1"
                                on:click=move |_| on_switch_to_login.run(())
                                disabled=move || is_submitting.get()
                            >
                                "Login here"
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
    fn test_signup_error_message_duplicate_user() {
        let err = ApiError::Status {
            status: 400,
            message: Some("User already exists".to_string()),
        };
        assert_eq!(
            signup_error_message(&err),
            "User already exists, please login instead"
        );
    }

    #[test]
    fn test_signup_error_message_surfaces_server_text() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Email is malformed".to_string()),
        };
        assert_eq!(signup_error_message(&err), "Email is malformed");

        let bare = ApiError::Status {
            status: 400,
            message: None,
        };
        assert_eq!(signup_error_message(&bare), "Invalid data provided");

        let blank = ApiError::Status {
            status: 400,
            message: Some(String::new()),
        };
        assert_eq!(signup_error_message(&blank), "Invalid data provided");
    }

    #[test]
    fn test_signup_error_message_other_failures() {
        let server_error = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(
            signup_error_message(&server_error),
            "Signup failed. Please try again."
        );

        let unreachable = ApiError::NoResponse("offline".to_string());
        assert_eq!(
            signup_error_message(&unreachable),
            "Cannot connect to server. Please check if the server is running."
        );

        let broken = ApiError::ParseFailed("bad body".to_string());
        assert_eq!(
            signup_error_message(&broken),
            "Network error. Please check your connection."
        );
    }
}
