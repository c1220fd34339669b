use crate::shared::dom::HintTone;
use leptos::prelude::*;

/// Inline message under a form field (`form-hint -success` / `-error`)
#[component]
pub fn FieldHint(message: String, tone: HintTone) -> impl IntoView {
    view! {
        <span class=format!("form-hint {}", tone.modifier())>{message}</span>
    }
}
