//! 検索・絞り込み・表示切替

use leptos::prelude::*;
use pokedex_common::{Action, CatalogState, ViewMode};

#[component]
pub fn Toolbar(catalog: RwSignal<CatalogState>) -> impl IntoView {
    let dispatch = move |action: Action| catalog.update(|s| s.apply(action));

    let captured_only = move || catalog.with(|s| s.captured_only);
    let view_mode = move || catalog.with(|s| s.view_mode);

    let active = |on: bool| if on { "btn btn-primary" } else { "btn btn-tertiary" };

    view! {
        <div class="toolbar">
            <div class="form-group">
                <input
                    type="text"
                    placeholder="Search for a Pokémon..."
                    prop:value=move || catalog.with(|s| s.search_term.clone())
                    on:input=move |ev| dispatch(Action::SetSearch(event_target_value(&ev)))
                />
            </div>

            <div class="toolbar-buttons">
                <button
                    class=move || active(!captured_only())
                    on:click=move |_| dispatch(Action::SetCapturedOnly(false))
                >
                    "All"
                </button>
                <button
                    class=move || active(captured_only())
                    on:click=move |_| dispatch(Action::SetCapturedOnly(true))
                >
                    "Captured"
                </button>
            </div>

            <div class="toolbar-buttons">
                <button
                    class=move || active(view_mode() == ViewMode::Grid)
                    on:click=move |_| dispatch(Action::SetViewMode(ViewMode::Grid))
                >
                    "Grid View"
                </button>
                <button
                    class=move || active(view_mode() == ViewMode::List)
                    on:click=move |_| dispatch(Action::SetViewMode(ViewMode::List))
                >
                    "List View"
                </button>
            </div>
        </div>
    }
}
