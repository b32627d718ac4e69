//! 一覧の1件

use leptos::prelude::*;
use pokedex_common::{sprite_url, DisplayedRecord, ViewMode, DEFAULT_SPRITE_BASE};

#[component]
pub fn PokemonCard<FS>(
    item: DisplayedRecord,
    view_mode: Signal<ViewMode>,
    on_select: FS,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
{
    let name = item.record.name.clone();
    let image = item
        .id
        .map(|id| sprite_url(DEFAULT_SPRITE_BASE, id))
        .unwrap_or_default();

    let capture_view = match item.capture.clone() {
        Some(tag) => view! {
            <div class="capture-info">
                <p class="text-muted">{format!("Nickname: {}", tag.nickname)}</p>
                <p class="text-muted">{format!("Date: {}", tag.date)}</p>
            </div>
        }
        .into_any(),
        None => view! { <p class="text-muted not-captured">"Not captured"</p> }.into_any(),
    };

    view! {
        <div
            class=move || match view_mode.get() {
                ViewMode::Grid => "pokemon-card grid-card",
                ViewMode::List => "pokemon-card list-card",
            }
            on:click={
                let name = name.clone();
                move |_| on_select(name.clone())
            }
        >
            <img src=image alt=item.record.name.clone() class="pokemon-image" />
            <div class="pokemon-info">
                <h3 class="pokemon-name">{item.record.name.clone()}</h3>
                {capture_view}
            </div>
        </div>
    }
}
