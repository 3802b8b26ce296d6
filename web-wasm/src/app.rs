//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use series_catalog_common::Show;

use crate::components::header::Header;
use crate::pages::{home::HomePage, show::ShowPage};

/// 最後にホームで読み込んだ一覧（詳細ページから参照）
#[derive(Clone, Copy)]
pub struct LoadedShows(pub RwSignal<Vec<Show>>);

#[component]
pub fn App() -> impl IntoView {
    provide_context(LoadedShows(RwSignal::new(Vec::new())));

    view! {
        <Router>
            <Header />
            <main>
                <Routes fallback=|| view! { <p class="text-muted">"Página no encontrada"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/show/:id") view=ShowPage />
                </Routes>
            </main>
        </Router>
    }
}
