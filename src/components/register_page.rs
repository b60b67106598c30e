//! Registration Page
//!
//! Name, email, phone and password form with live per-field validation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::validation::{RegistrationField, RegistrationForm};
use storefront_core::{Message, Route, SubmitOutcome};

use crate::commands::{navigate, navigate_after};
use crate::components::{FeedbackMessage, FormField, SubmitButton};
use crate::context::use_storefront;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_storefront();

    if let Some(route) = ctx.registration().guard() {
        navigate(route);
    }

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let form = Memo::new(move |_| RegistrationForm {
        name: name.get(),
        email: email.get(),
        phone: phone.get(),
        password: password.get(),
        confirm_password: confirm.get(),
    });
    let status = move |field: RegistrationField| Signal::derive(move || form.with(|f| f.field_status(field)));

    let hide_messages = move || {
        set_error.set(None);
        set_success.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let snapshot = form.get_untracked();

        spawn_local(async move {
            set_loading.set(true);
            hide_messages();
            let outcome = ctx.registration().submit(&snapshot).await;
            set_loading.set(false);

            match outcome {
                SubmitOutcome::Success { message, redirect, delay_ms } => {
                    set_success.set(message);
                    navigate_after(redirect, delay_ms).await;
                }
                SubmitOutcome::Invalid(message) | SubmitOutcome::Failed(message) => {
                    set_error.set(Some(message));
                }
            }
        });
    };

    view! {
        <div class="auth-container">
            <form id="register-form" class="auth-form" on:submit=on_submit>
                <h1>{ctx.t(Message::CreateAccount)}</h1>

                <FormField
                    id="name"
                    input_type="text"
                    label=Message::NameLabel
                    value=name
                    set_value=set_name
                    status=status(RegistrationField::Name)
                    on_input=move |_| hide_messages()
                />
                <FormField
                    id="email"
                    input_type="email"
                    label=Message::EmailLabel
                    value=email
                    set_value=set_email
                    status=status(RegistrationField::Email)
                    on_input=move |_| hide_messages()
                />
                <FormField
                    id="phone"
                    input_type="tel"
                    label=Message::PhoneLabel
                    value=phone
                    set_value=set_phone
                    status=status(RegistrationField::Phone)
                    on_input=move |_| hide_messages()
                />
                <FormField
                    id="password"
                    input_type="password"
                    label=Message::PasswordLabel
                    value=password
                    set_value=set_password
                    status=status(RegistrationField::Password)
                    on_input=move |_| hide_messages()
                />
                <FormField
                    id="confirm-password"
                    input_type="password"
                    label=Message::ConfirmPasswordLabel
                    value=confirm
                    set_value=set_confirm
                    status=status(RegistrationField::ConfirmPassword)
                    on_input=move |_| hide_messages()
                />

                <FeedbackMessage message=error />
                <FeedbackMessage message=success success=true />

                <SubmitButton
                    id="register-btn"
                    loading=loading
                    idle=Message::CreateAccount
                    busy=Message::CreatingAccount
                />

                <p class="auth-switch">
                    <a href=Route::Login.href()>{ctx.t(Message::HaveAccount)}</a>
                </p>
            </form>
        </div>
    }
}
