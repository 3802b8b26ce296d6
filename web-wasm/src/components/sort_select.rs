//! 並び替えセレクト

use leptos::prelude::*;
use series_catalog_common::{find_sort, SortOption};

#[component]
pub fn SortSelect<F>(
    options: Vec<SortOption>,
    selected: Signal<String>,
    on_change: F,
) -> impl IntoView
where
    F: Fn(SortOption) + 'static + Clone,
{
    let choices = options.clone();

    view! {
        <div class="select-wrapper">
            <label for="sort">"Ordenar por"</label>
            <select
                id="sort"
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    if let Some(sort) = find_sort(&options, &value) {
                        on_change(sort.clone());
                    }
                }
            >
                {choices
                    .into_iter()
                    .map(|option| {
                        let value = option.value.clone();
                        view! {
                            <option
                                value=option.value.clone()
                                selected=move || selected.get() == value
                            >
                                {option.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
