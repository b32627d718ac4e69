pub mod header;
pub mod toolbar;
pub mod pokemon_card;
pub mod load_more;
pub mod pokemon_detail;
pub mod capture_form;
