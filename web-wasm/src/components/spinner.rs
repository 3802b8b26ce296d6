//! 読み込み中スピナー

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status">
            <div class="spinner-circle" />
        </div>
    }
}
