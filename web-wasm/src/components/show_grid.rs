//! ポスターグリッドコンポーネント

use leptos::prelude::*;
use leptos_router::components::A;
use series_catalog_common::ShowTile;

#[component]
pub fn ShowGrid(tiles: Signal<Vec<ShowTile>>) -> impl IntoView {
    view! {
        <section class="show-grid">
            <For
                each=move || tiles.get().into_iter().enumerate()
                key=|(index, tile)| (*index, tile.id.clone())
                children=move |(_, tile)| view! { <ShowCard tile=tile /> }
            />
        </section>
    }
}

#[component]
fn ShowCard(tile: ShowTile) -> impl IntoView {
    view! {
        <A href=tile.href.clone()>
            <div class="show">
                <img alt="poster" src=tile.poster.clone().unwrap_or_default() />
                <div class="title">{tile.title.clone()}</div>
            </div>
        </A>
    }
}
