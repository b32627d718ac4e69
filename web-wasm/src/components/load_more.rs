//! 「もっと読む」ボタン

use leptos::prelude::*;
use pokedex_common::CatalogState;

#[component]
pub fn LoadMore<FL>(catalog: RwSignal<CatalogState>, on_load_more: FL) -> impl IntoView
where
    FL: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="load-more">
            <button
                class="btn btn-primary"
                disabled=move || catalog.with(|s| s.next_request().is_none())
                on:click={
                    let on_load_more = on_load_more.clone();
                    move |_| on_load_more(())
                }
            >
                {move || catalog.with(|s| s.load_more_label())}
            </button>
        </div>
    }
}
