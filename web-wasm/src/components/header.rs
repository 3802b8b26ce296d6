//! ヘッダーコンポーネント（検索フォーム付き）

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use series_catalog_common::search_query;

#[component]
pub fn Header() -> impl IntoView {
    let navigate = use_navigate();
    let (term, set_term) = signal(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let term = term.get_untracked();
        if term.trim().is_empty() {
            return;
        }
        navigate(&format!("/{}", search_query(&term)), Default::default());
    };

    view! {
        <header class="header">
            <h1><A href="/">"Series"</A></h1>
            <form class="search-form" on:submit=on_submit>
                <input
                    type="search"
                    placeholder="Buscar serie..."
                    prop:value=move || term.get()
                    on:input=move |ev| {
                        set_term.set(event_target_value(&ev));
                    }
                />
            </form>
        </header>
    }
}
