//! Login Page
//!
//! Email/password form. Errors mark both inputs for a few seconds and
//! disappear as soon as the visitor types again.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::validation::{FieldStatus, LoginForm};
use storefront_core::{Message, Route, SubmitOutcome};

use crate::commands::{navigate, navigate_after};
use crate::components::{FeedbackMessage, FormField, SubmitButton};
use crate::context::use_storefront;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_storefront();

    // Already signed in: nothing to do here
    if let Some(route) = ctx.login().guard() {
        navigate(route);
    }

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (highlight, set_highlight) = signal(false);
    let (loading, set_loading) = signal(false);

    let field_status = Signal::derive(move || {
        if highlight.get() {
            FieldStatus::Invalid
        } else {
            FieldStatus::Neutral
        }
    });

    let show_error = move |message: String| {
        set_error.set(Some(message));
        set_highlight.set(true);
        let delay = ctx.error_highlight_ms();
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            set_highlight.set(false);
        });
    };

    let hide_error = move || {
        set_error.set(None);
        set_highlight.set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let form = LoginForm::new(email.get_untracked(), password.get_untracked());

        spawn_local(async move {
            set_loading.set(true);
            let outcome = ctx.login().submit(&form).await;
            set_loading.set(false);

            match outcome {
                SubmitOutcome::Success { redirect, delay_ms, .. } => {
                    hide_error();
                    navigate_after(redirect, delay_ms).await;
                }
                SubmitOutcome::Invalid(message) | SubmitOutcome::Failed(message) => show_error(message),
            }
        });
    };

    view! {
        <div class="auth-container">
            <form id="login-form" class="auth-form" on:submit=on_submit>
                <h1>{ctx.t(Message::SignIn)}</h1>

                <FormField
                    id="email"
                    input_type="email"
                    label=Message::EmailLabel
                    value=email
                    set_value=set_email
                    status=field_status
                    on_input=move |_| hide_error()
                />
                <FormField
                    id="password"
                    input_type="password"
                    label=Message::PasswordLabel
                    value=password
                    set_value=set_password
                    status=field_status
                    on_input=move |_| hide_error()
                />

                <FeedbackMessage message=error />

                <SubmitButton id="login-btn" loading=loading idle=Message::SignIn busy=Message::SigningIn />

                <p class="auth-switch">
                    <a href=Route::Register.href()>{ctx.t(Message::NoAccount)}</a>
                </p>
            </form>
        </div>
    }
}
