//! 一覧の状態管理
//!
//! 読み込んだページを順に積み上げ、検索・捕獲済みフィルタを適用して表示用の列を作る。
//! 状態の変更はすべて `CatalogState::apply` を通す。

use crate::api::DEFAULT_PAGE_LIMIT;
use crate::tag_store::find_first_by_character;
use crate::types::{CaptureTag, ListingPage, ListingRecord, ViewMode};

/// 検索中に表示する最大件数
pub const SEARCH_RESULT_LIMIT: usize = 150;

/// 状態更新アクション
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// ページ取得を開始
    FetchStarted,
    /// ページ取得に成功
    PageLoaded(ListingPage),
    /// ページ取得に失敗
    FetchFailed(String),
    SetSearch(String),
    SetCapturedOnly(bool),
    SetViewMode(ViewMode),
}

/// 一覧画面の状態
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    pub limit: u32,
    /// 最初のページのオフセット
    pub start_offset: u32,
    pub records: Vec<ListingRecord>,
    pub next_offset: Option<u32>,
    /// 1ページ以上読み込んだか
    pub loaded: bool,
    pub is_fetching: bool,
    pub error: Option<String>,
    pub search_term: String,
    pub captured_only: bool,
    pub view_mode: ViewMode,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT)
    }
}

/// 表示用レコード
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedRecord {
    pub record: ListingRecord,
    pub id: Option<u32>,
    /// 最初に一致した捕獲タグ
    pub capture: Option<CaptureTag>,
}

impl CatalogState {
    pub fn new(limit: u32) -> Self {
        Self::starting_at(limit, 0)
    }

    /// 途中のオフセットから読み始める
    pub fn starting_at(limit: u32, start_offset: u32) -> Self {
        Self {
            limit,
            start_offset,
            records: Vec::new(),
            next_offset: None,
            loaded: false,
            is_fetching: false,
            error: None,
            search_term: String::new(),
            captured_only: false,
            view_mode: ViewMode::default(),
        }
    }

    /// アクションを適用
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::FetchStarted => {
                self.is_fetching = true;
            }
            Action::PageLoaded(page) => {
                self.records.extend(page.records);
                self.next_offset = page.next_offset;
                self.loaded = true;
                self.is_fetching = false;
                self.error = None;
            }
            Action::FetchFailed(message) => {
                self.is_fetching = false;
                self.error = Some(message);
            }
            Action::SetSearch(term) => self.search_term = term,
            Action::SetCapturedOnly(flag) => self.captured_only = flag,
            Action::SetViewMode(mode) => self.view_mode = mode,
        }
    }

    /// 次ページがあるか（初回読み込み前は true）
    pub fn has_more(&self) -> bool {
        !self.loaded || self.next_offset.is_some()
    }

    /// 次に要求すべき (limit, offset)
    ///
    /// 取得中・最終ページ到達後は None。
    pub fn next_request(&self) -> Option<(u32, u32)> {
        if self.is_fetching {
            return None;
        }
        if !self.loaded {
            return Some((self.limit, self.start_offset));
        }
        self.next_offset.map(|offset| (self.limit, offset))
    }

    /// 「もっと読む」ボタンの文言
    pub fn load_more_label(&self) -> &'static str {
        if self.is_fetching {
            "Loading more..."
        } else if self.has_more() {
            "Load More"
        } else {
            "Nothing more to load"
        }
    }

    /// 表示するレコード列
    ///
    /// 検索フィルタ → 捕獲済みフィルタの順に適用し、各レコードに最初の捕獲タグを付ける。
    pub fn displayed(&self, tags: &[CaptureTag]) -> Vec<DisplayedRecord> {
        filter_by_name(&self.records, &self.search_term)
            .into_iter()
            .filter_map(|record| {
                let capture = find_first_by_character(tags, &record.name).cloned();
                if self.captured_only && capture.is_none() {
                    return None;
                }
                Some(DisplayedRecord {
                    id: record.id(),
                    record: record.clone(),
                    capture,
                })
            })
            .collect()
    }
}

/// 名前の部分一致（大文字小文字を区別しない）で絞り込む
///
/// 検索語が空でなければ先頭 `SEARCH_RESULT_LIMIT` 件まで。
pub fn filter_by_name<'a>(records: &'a [ListingRecord], term: &str) -> Vec<&'a ListingRecord> {
    let needle = term.to_lowercase();
    let matches = records
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle));

    if term.is_empty() {
        matches.collect()
    } else {
        matches.take(SEARCH_RESULT_LIMIT).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, id: u32) -> ListingRecord {
        ListingRecord::new(name, format!("https://pokeapi.co/api/v2/pokemon/{}/", id))
    }

    fn page(names: &[(&str, u32)], next_offset: Option<u32>) -> ListingPage {
        ListingPage {
            records: names.iter().map(|(n, id)| record(n, *id)).collect(),
            next_offset,
        }
    }

    fn names(displayed: &[DisplayedRecord]) -> Vec<&str> {
        displayed.iter().map(|d| d.record.name.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = CatalogState::default();
        assert_eq!(state.limit, 50);
        assert!(state.has_more());
        assert_eq!(state.next_request(), Some((50, 0)));
        assert_eq!(state.load_more_label(), "Load More");
    }

    #[test]
    fn test_starting_offset() {
        let mut state = CatalogState::starting_at(10, 40);
        assert_eq!(state.next_request(), Some((10, 40)));
        state.apply(Action::PageLoaded(page(&[("a", 41)], Some(50))));
        assert_eq!(state.next_request(), Some((10, 50)));
    }

    #[test]
    fn test_pages_accumulate_in_order() {
        let mut state = CatalogState::new(2);
        state.apply(Action::FetchStarted);
        assert_eq!(state.next_request(), None);
        assert_eq!(state.load_more_label(), "Loading more...");

        state.apply(Action::PageLoaded(page(&[("bulbasaur", 1), ("ivysaur", 2)], Some(2))));
        assert_eq!(state.next_request(), Some((2, 2)));

        state.apply(Action::FetchStarted);
        state.apply(Action::PageLoaded(page(&[("venusaur", 3)], None)));

        assert_eq!(state.records.len(), 3);
        assert_eq!(state.records[2].name, "venusaur");
        assert!(!state.has_more());
        assert_eq!(state.next_request(), None);
        assert_eq!(state.load_more_label(), "Nothing more to load");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut state = CatalogState::new(1);
        state.apply(Action::PageLoaded(page(&[("ditto", 132)], Some(1))));
        state.apply(Action::PageLoaded(page(&[("ditto", 132)], None)));
        assert_eq!(state.records.len(), 2);
    }

    #[test]
    fn test_fetch_failed_keeps_records() {
        let mut state = CatalogState::new(1);
        state.apply(Action::PageLoaded(page(&[("ditto", 132)], Some(1))));
        state.apply(Action::FetchStarted);
        state.apply(Action::FetchFailed("Network response was not ok".into()));

        assert!(!state.is_fetching);
        assert_eq!(state.error.as_deref(), Some("Network response was not ok"));
        assert_eq!(state.records.len(), 1);
        // 失敗後も同じオフセットを再要求できる
        assert_eq!(state.next_request(), Some((1, 1)));

        state.apply(Action::PageLoaded(page(&[("eevee", 133)], None)));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_search_filter() {
        let records = vec![record("bulbasaur", 1), record("charmander", 4), record("ivysaur", 2)];
        let found: Vec<&str> = filter_by_name(&records, "saur").iter().map(|r| r.name.as_str()).collect();
        assert_eq!(found, vec!["bulbasaur", "ivysaur"]);

        let found = filter_by_name(&records, "CHAR");
        assert_eq!(found.len(), 1);

        assert_eq!(filter_by_name(&records, "").len(), 3);
    }

    #[test]
    fn test_search_truncates_to_limit() {
        let records: Vec<ListingRecord> = (1..=200).map(|i| record(&format!("mon-{}", i), i)).collect();
        assert_eq!(filter_by_name(&records, "mon").len(), SEARCH_RESULT_LIMIT);
        assert_eq!(filter_by_name(&records, "mon")[149].name, "mon-150");
        // 検索なしなら切り詰めない
        assert_eq!(filter_by_name(&records, "").len(), 200);
    }

    #[test]
    fn test_displayed_annotates_first_capture() {
        let mut state = CatalogState::new(3);
        state.apply(Action::PageLoaded(page(
            &[("bulbasaur", 1), ("charmander", 4), ("ivysaur", 2)],
            None,
        )));
        let tags = vec![
            CaptureTag::new("bulbasaur", "First", "01/01/2024"),
            CaptureTag::new("bulbasaur", "Second", "02/01/2024"),
        ];

        let displayed = state.displayed(&tags);
        assert_eq!(displayed.len(), 3);
        assert_eq!(displayed[0].id, Some(1));
        assert_eq!(displayed[0].capture.as_ref().map(|c| c.nickname.as_str()), Some("First"));
        assert!(displayed[1].capture.is_none());
    }

    #[test]
    fn test_captured_only_with_empty_store() {
        let mut state = CatalogState::new(3);
        state.apply(Action::PageLoaded(page(&[("bulbasaur", 1), ("ivysaur", 2)], None)));
        state.apply(Action::SetCapturedOnly(true));
        assert!(state.displayed(&[]).is_empty());
    }

    #[test]
    fn test_search_and_captured_only_combined() {
        let mut state = CatalogState::new(3);
        state.apply(Action::PageLoaded(page(
            &[("bulbasaur", 1), ("charmander", 4), ("ivysaur", 2)],
            None,
        )));
        state.apply(Action::SetSearch("saur".into()));
        state.apply(Action::SetCapturedOnly(true));
        let tags = vec![
            CaptureTag::new("ivysaur", "Ivy", "01/01/2024"),
            CaptureTag::new("charmander", "Char", "01/01/2024"),
        ];
        assert_eq!(names(&state.displayed(&tags)), vec!["ivysaur"]);

        state.apply(Action::SetCapturedOnly(false));
        assert_eq!(names(&state.displayed(&tags)), vec!["bulbasaur", "ivysaur"]);
    }

    #[test]
    fn test_set_view_mode() {
        let mut state = CatalogState::default();
        state.apply(Action::SetViewMode(ViewMode::List));
        assert_eq!(state.view_mode, ViewMode::List);
    }
}
