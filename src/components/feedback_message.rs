//! Feedback Message Component

use leptos::prelude::*;

/// Error or success banner under a form; hidden while `message` is `None`
#[component]
pub fn FeedbackMessage(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(default = false)] success: bool,
) -> impl IntoView {
    let (id, class) = if success {
        ("success-message", "message success")
    } else {
        ("error-message", "message error")
    };

    view! {
        <Show when=move || message.with(Option::is_some)>
            <div id=id class=class role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
