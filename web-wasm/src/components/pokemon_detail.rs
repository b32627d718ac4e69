//! 詳細ビュー

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::pokeapi::{fetch_detail, FetchError};
use crate::components::capture_form::CaptureForm;
use pokedex_common::{
    sprite_url, CaptureTag, PokemonDetail, PokemonRef, DEFAULT_API_BASE, DEFAULT_SPRITE_BASE,
};

/// 詳細の読み込み状態
#[derive(Clone, Debug, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(PokemonDetail),
    NotFound,
    Failed(String),
}

#[component]
pub fn PokemonDetailView<FB, FC>(
    name: String,
    tags: RwSignal<Vec<CaptureTag>>,
    on_back: FB,
    on_captured: FC,
) -> impl IntoView
where
    FB: Fn(()) + 'static + Clone + Send + Sync,
    FC: Fn(CaptureTag) + 'static + Clone + Send + Sync,
{
    let state = RwSignal::new(DetailState::Loading);

    match name.parse::<PokemonRef>() {
        Ok(pokemon) => {
            spawn_local(async move {
                let next = match fetch_detail(DEFAULT_API_BASE, &pokemon).await {
                    Ok(detail) => DetailState::Loaded(detail),
                    Err(FetchError::NotFound) => DetailState::NotFound,
                    Err(e) => {
                        gloo::console::error!(format!("Failed to fetch Pokémon details: {}", e));
                        DetailState::Failed(e.to_string())
                    }
                };
                state.set(next);
            });
        }
        Err(_) => state.set(DetailState::NotFound),
    }

    let back_button = move || {
        let on_back = on_back.clone();
        view! {
            <button class="btn btn-primary" on:click=move |_| on_back(())>
                "← Back"
            </button>
        }
    };

    view! {
        <div class="detail-page">
            {move || match state.get() {
                DetailState::Loading => view! {
                    <div class="loading"><p>"Loading..."</p></div>
                }
                .into_any(),
                DetailState::NotFound => view! {
                    <div class="not-found">
                        {back_button()}
                        <p>"Pokemon not found"</p>
                    </div>
                }
                .into_any(),
                DetailState::Failed(e) => view! {
                    <div class="error-text">
                        {back_button()}
                        <p>{format!("Error: {}", e)}</p>
                    </div>
                }
                .into_any(),
                DetailState::Loaded(detail) => {
                    let abilities: Vec<String> =
                        detail.ability_names().into_iter().map(String::from).collect();
                    let abilities_view = if abilities.is_empty() {
                        view! { <p class="text-muted">"No abilities available."</p> }.into_any()
                    } else {
                        abilities
                            .into_iter()
                            .map(|a| view! { <p class="text-muted">{a}</p> })
                            .collect_view()
                            .into_any()
                    };
                    let experience = detail
                        .base_experience
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| "-".to_string());

                    view! {
                        <div>
                            {back_button()}
                            <div class="detail-header">
                                <img
                                    src=sprite_url(DEFAULT_SPRITE_BASE, detail.id)
                                    alt="Pokemon"
                                    class="pokemon-image"
                                />
                                <h1 class="pokemon-name">{detail.name.clone()}</h1>
                            </div>

                            <div class="detail-section">
                                <h2>"Base Experience:"</h2>
                                <p class="text-muted">{experience}</p>
                            </div>

                            <div class="detail-section">
                                <h2>"Abilities:"</h2>
                                {abilities_view}
                            </div>

                            <CaptureForm
                                character=detail.name.clone()
                                tags=tags
                                on_captured=on_captured.clone()
                            />
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
