//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::pokeapi::fetch_listing;
use crate::components::{
    header::Header,
    toolbar::Toolbar,
    pokemon_card::PokemonCard,
    load_more::LoadMore,
    pokemon_detail::PokemonDetailView,
};
use crate::local_store;
use pokedex_common::{Action, CaptureTag, CatalogState, ViewMode, DEFAULT_API_BASE};

/// 次のページを読み込む
///
/// 取得中・最終ページ到達後は何もしない。
fn load_next_page(catalog: RwSignal<CatalogState>) {
    let Some((limit, offset)) = catalog.with_untracked(|s| s.next_request()) else {
        return;
    };

    catalog.update(|s| s.apply(Action::FetchStarted));
    spawn_local(async move {
        match fetch_listing(DEFAULT_API_BASE, limit, offset).await {
            Ok(page) => catalog.update(|s| s.apply(Action::PageLoaded(page))),
            Err(e) => {
                gloo::console::error!(format!("page fetch failed at offset {}: {}", offset, e));
                catalog.update(|s| s.apply(Action::FetchFailed(e.to_string())));
            }
        }
    });
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let catalog = RwSignal::new(CatalogState::default());
    // 起動時に一度だけ読み込み、以降は追記のたびに更新
    let tags = RwSignal::new(local_store::tag_store().load_all());
    let (selected, set_selected) = signal(None::<String>);

    load_next_page(catalog);

    let on_load_more = move |_: ()| load_next_page(catalog);
    let on_select = move |name: String| set_selected.set(Some(name));
    let on_back = move |_: ()| set_selected.set(None);
    let on_captured = move |tag: CaptureTag| tags.update(|t| t.push(tag));

    let is_initial_loading = move || catalog.with(|s| !s.loaded && s.is_fetching);
    let initial_error = move || catalog.with(|s| if s.loaded { None } else { s.error.clone() });

    let list_view = move || {
        view! {
            <div class="container">
                <Header />

                <Toolbar catalog=catalog />

                {move || catalog.with(|s| s.error.clone()).map(|e| view! {
                    <p class="error-text">{format!("Error: {}", e)}</p>
                })}

                <div class=move || {
                    match catalog.with(|s| s.view_mode) {
                        ViewMode::Grid => "pokemon-list grid",
                        ViewMode::List => "pokemon-list list",
                    }
                }>
                    <Show
                        when=move || !catalog.with(|s| s.displayed(&tags.get())).is_empty()
                        fallback=|| view! { <p class="text-muted">"No data available"</p> }
                    >
                        <For
                            each=move || {
                                catalog
                                    .with(|s| s.displayed(&tags.get()))
                                    .into_iter()
                                    .enumerate()
                                    .collect::<Vec<_>>()
                            }
                            key=|(i, item)| format!("{}-{}", i, item.record.name)
                            children=move |(_, item)| {
                                let on_select = on_select.clone();
                                view! {
                                    <PokemonCard
                                        item=item
                                        view_mode=Signal::derive(move || catalog.with(|s| s.view_mode))
                                        on_select=on_select
                                    />
                                }
                            }
                        />
                    </Show>
                </div>

                <Show when=move || !catalog.with(|s| s.captured_only)>
                    <LoadMore catalog=catalog on_load_more=on_load_more />
                </Show>
            </div>
        }
    };

    view! {
        {move || {
            if let Some(name) = selected.get() {
                view! {
                    <PokemonDetailView
                        name=name
                        tags=tags
                        on_back=on_back
                        on_captured=on_captured
                    />
                }
                .into_any()
            } else if is_initial_loading() {
                view! {
                    <div class="loading">
                        <p>"Loading..."</p>
                    </div>
                }
                .into_any()
            } else if let Some(e) = initial_error() {
                view! { <div class="error-text">{format!("Error: {}", e)}</div> }.into_any()
            } else {
                list_view().into_any()
            }
        }}
    }
}
