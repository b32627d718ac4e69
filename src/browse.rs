//! 一覧の読み込み
//!
//! `CatalogState` にアクションを流しながらページを順に取得する。

use crate::client::PokeApiClient;
use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use pokedex_common::{Action, CatalogState};
use std::time::Duration;

/// 何ページ読むか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBudget {
    Pages(u32),
    All,
}

impl PageBudget {
    fn allows(&self, loaded: u32) -> bool {
        match self {
            PageBudget::Pages(n) => loaded < *n,
            PageBudget::All => true,
        }
    }
}

/// ページを順に読み込んで状態に積み上げる
///
/// 途中で失敗した場合は `FetchFailed` を適用してからエラーを返す（リトライなし）。
/// それまでに読み込んだレコードは状態に残る。
pub async fn load_pages(
    client: &PokeApiClient,
    state: &mut CatalogState,
    budget: PageBudget,
    show_progress: bool,
) -> Result<u32> {
    let spinner = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let mut loaded = 0u32;
    while budget.allows(loaded) {
        let Some((limit, offset)) = state.next_request() else {
            break;
        };

        if let Some(pb) = &spinner {
            pb.set_message(format!("Fetching offset {}...", offset));
        }

        state.apply(Action::FetchStarted);
        match client.list(limit, offset).await {
            Ok(page) => {
                state.apply(Action::PageLoaded(page));
                loaded += 1;
            }
            Err(e) => {
                tracing::debug!("page fetch failed at offset {}: {}", offset, e);
                state.apply(Action::FetchFailed(e.to_string()));
                if let Some(pb) = &spinner {
                    pb.finish_and_clear();
                }
                return Err(e);
            }
        }
    }

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    tracing::info!("loaded {} page(s), {} record(s)", loaded, state.records.len());

    Ok(loaded)
}
