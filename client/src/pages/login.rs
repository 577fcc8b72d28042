//! Login page: email + password sign-in with role-based landing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. A visitor who is already authenticated, or who signs in
//! here, is sent to the `from` location remembered by the route guard when
//! their role may enter it, otherwise to their role's landing page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::use_session;
use crate::components::loading_spinner::{LoadingSpinner, SpinnerSize};
use crate::util::guard::post_login_target;
use crate::util::validate;

/// Per-field validation messages for the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

/// Check the form before any network call. Returns the trimmed email.
pub fn validate_login_input(email: &str, password: &str) -> Result<String, LoginErrors> {
    let errors = LoginErrors { email: validate::email_error(email), password: validate::password_error(password) };
    if errors.email.is_none() && errors.password.is_none() {
        Ok(email.trim().to_owned())
    } else {
        Err(errors)
    }
}

/// Prefilled credentials for the seeded demo accounts.
pub const DEMO_ACCOUNTS: [(&str, &str, &str); 2] = [
    ("Employer Demo", "employer@example.com", "password123"),
    ("Manager Demo", "manager@example.com", "password123"),
];

#[component]
pub fn LoginPage() -> impl IntoView {
    let manager = use_session();
    let session = manager.session();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(LoginErrors::default());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let from = move || query.with(|q| q.get("from"));

    // Already signed in (restored session or just logged in): leave the page.
    let watcher = manager.clone();
    Effect::new(move || {
        let now = watcher.now();
        let Some(role) = session.with(|s| if s.is_authenticated() && !s.is_expired_at(now) { s.role() } else { None })
        else {
            return;
        };
        let target = post_login_target(role, from().as_deref());
        navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        failure.set(None);
        let password_value = password.get_untracked();
        let email_value = match validate_login_input(&email.get_untracked(), &password_value) {
            Ok(email_value) => {
                errors.set(LoginErrors::default());
                email_value
            }
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let manager = manager.clone();
            leptos::task::spawn_local(async move {
                // Navigation happens in the effect above once the session flips.
                if let Err(err) = manager.login(&email_value, &password_value).await
                    && err != crate::state::session::AuthError::Superseded
                {
                    failure.set(Some(err.user_message()));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&manager, email_value, password_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome Back"</h1>
                <p class="login-card__subtitle">"Sign in to your account to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="email">"Email Address"</label>
                    <input
                        id="email"
                        class="login-input"
                        class:login-input--error=move || errors.get().email.is_some()
                        type="email"
                        autocomplete="email"
                        placeholder="Email address"
                        disabled=move || busy.get()
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || errors.get().email.is_some()>
                        <p class="login-error">{move || errors.get().email.unwrap_or_default()}</p>
                    </Show>

                    <label class="login-label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        class:login-input--error=move || errors.get().password.is_some()
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        disabled=move || busy.get()
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || errors.get().password.is_some()>
                        <p class="login-error">{move || errors.get().password.unwrap_or_default()}</p>
                    </Show>

                    <Show when=move || failure.get().is_some()>
                        <p class="login-message login-message--error" role="alert">
                            {move || failure.get().unwrap_or_default()}
                        </p>
                    </Show>

                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        <Show when=move || busy.get() fallback=|| "Sign in">
                            <LoadingSpinner size=SpinnerSize::Small/>
                        </Show>
                    </button>
                </form>

                <div class="login-divider">
                    <span>"Demo Accounts"</span>
                </div>
                <div class="login-demo">
                    {DEMO_ACCOUNTS
                        .into_iter()
                        .map(|(label, demo_email, demo_password)| {
                            view! {
                                <button
                                    class="btn login-demo__button"
                                    type="button"
                                    on:click=move |_| {
                                        email.set(demo_email.to_owned());
                                        password.set(demo_password.to_owned());
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
