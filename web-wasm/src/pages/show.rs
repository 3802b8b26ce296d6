//! シリーズ詳細画面

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::app::LoadedShows;

#[component]
pub fn ShowPage() -> impl IntoView {
    let params = use_params_map();
    let loaded = expect_context::<LoadedShows>();

    let show = move || {
        let id = params.with(|p| p.get("id")).unwrap_or_default();
        loaded.0.with(|shows| shows.iter().find(|s| s.id == id).cloned())
    };

    view! {
        <div class="show-detail">
            {move || match show() {
                Some(show) => view! {
                    <h2>{show.title.clone()}</h2>
                    <img alt="poster" src=show.fanart().unwrap_or_default().to_string() />
                    <dl>
                        {show.images.iter().map(|(kind, url)| view! {
                            <dt>{kind.clone()}</dt>
                            <dd><a href=url.clone() target="_blank" rel="noopener noreferrer">{url.clone()}</a></dd>
                        }).collect_view()}
                    </dl>
                }.into_any(),
                None => view! {
                    <p class="text-muted">"Esta serie no está cargada."</p>
                }.into_any(),
            }}
            <A href="/">"← Volver"</A>
        </div>
    }
}
