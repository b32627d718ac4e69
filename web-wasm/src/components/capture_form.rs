//! 捕獲タグ入力フォーム

use leptos::prelude::*;
use gloo::timers::callback::Timeout;
use crate::local_store;
use pokedex_common::{CaptureTag, Error};

/// 成功メッセージを消すまでの時間
const SUCCESS_MESSAGE_MS: u32 = 3000;

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn CaptureForm<FC>(
    character: String,
    tags: RwSignal<Vec<CaptureTag>>,
    on_captured: FC,
) -> impl IntoView
where
    FC: Fn(CaptureTag) + 'static + Clone + Send + Sync,
{
    let (nickname, set_nickname) = signal(String::new());
    let (date, set_date) = signal(String::new());
    let (success_message, set_success_message) = signal(String::new());

    let captured_count = {
        let character = character.clone();
        move || tags.with(|t| t.iter().filter(|tag| tag.character == character).count())
    };

    let on_submit = move |_: leptos::ev::MouseEvent| {
        let mut store = local_store::tag_store();
        match store.capture(&character, &nickname.get_untracked(), &date.get_untracked()) {
            Ok(tag) => {
                on_captured(tag);
                set_nickname.set(String::new());
                set_date.set(String::new());
                set_success_message.set("Pokemon tagged as captured successfully!".to_string());
                Timeout::new(SUCCESS_MESSAGE_MS, move || set_success_message.set(String::new()))
                    .forget();
            }
            Err(Error::Validation(v)) => alert(&v.to_string()),
            Err(e) => {
                gloo::console::error!(format!("failed to save capture: {}", e));
                alert(&e.to_string());
            }
        }
    };

    view! {
        <div class="capture-form">
            <h3>"Tag as Captured"</h3>
            <div class="form-group">
                <label for="nickname">"Nickname:"</label>
                <input
                    type="text"
                    id="nickname"
                    placeholder="Enter nickname"
                    prop:value=move || nickname.get()
                    on:input=move |ev| set_nickname.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="date">"Date (MM/DD/YYYY):"</label>
                <input
                    type="text"
                    id="date"
                    placeholder="MM/DD/YYYY"
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                />
            </div>
            <button class="btn btn-primary" on:click=on_submit>
                "Tag as Captured"
            </button>

            <Show when=move || !success_message.get().is_empty()>
                <div class="success-text">{move || success_message.get()}</div>
            </Show>

            <p class="text-muted">
                {move || format!("Captured {} time(s)", captured_count())}
            </p>
        </div>
    }
}
