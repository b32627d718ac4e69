//! Pokedex Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod api;
pub mod catalog;
pub mod error;
pub mod storage;
pub mod tag_store;
pub mod validate;

pub use types::{
    AbilitySlot, CaptureTag, ListingPage, ListingRecord, NamedResource, PokemonDetail,
    PokemonRef, Sprites, ViewMode,
};
pub use api::{
    detail_url, listing_url, parse_detail_response, parse_listing_response,
    pokemon_id_from_url, sprite_url, DEFAULT_API_BASE, DEFAULT_PAGE_LIMIT, DEFAULT_SPRITE_BASE,
};
pub use catalog::{filter_by_name, Action, CatalogState, DisplayedRecord, SEARCH_RESULT_LIMIT};
pub use error::{Error, Result, ValidationError};
pub use storage::{KeyValueStore, MemoryStore};
pub use tag_store::{find_first_by_character, TagStore, STORAGE_KEY};
pub use validate::{is_valid_date, validate_capture};
