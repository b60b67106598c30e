//! Form Field Component
//!
//! Labelled input whose class reflects its live validity.

use leptos::prelude::*;
use storefront_core::validation::FieldStatus;
use storefront_core::Message;

use crate::context::use_storefront;

#[component]
pub fn FormField(
    id: &'static str,
    input_type: &'static str,
    label: Message,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(into)] status: Signal<FieldStatus>,
    /// Runs after every keystroke
    #[prop(optional, into)]
    on_input: Option<Callback<()>>,
) -> impl IntoView {
    let ctx = use_storefront();

    view! {
        <div class="form-group">
            <label for=id>{ctx.t(label)}</label>
            <input
                type=input_type
                id=id
                name=id
                class=move || status.get().css_class()
                prop:value=move || value.get()
                on:input=move |ev| {
                    set_value.set(event_target_value(&ev));
                    if let Some(callback) = on_input {
                        callback.run(());
                    }
                }
            />
        </div>
    }
}
