//! pokedex-rust: PokeAPI図鑑ビューア・捕獲タグ管理ツール

pub mod browse;
pub mod capture;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod store;
