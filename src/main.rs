use clap::Parser;
use pokedex_common::{Action, CatalogState, KeyValueStore, PokemonRef, TagStore};
use pokedex_rust::{browse, capture, cli, client, config, error, render, store};
use browse::PageBudget;
use cli::{Cli, Commands};
use client::PokeApiClient;
use config::Config;
use error::{PokedexError, Result};
use std::process::ExitCode;
use store::FileStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("pokedex_rust={},pokedex_common={}", level, level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn parse_ref(text: &str) -> Result<PokemonRef> {
    text.parse()
        .map_err(|_| PokedexError::InvalidReference(text.to_string()))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // エラーはここで1回だけ表示する
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("{:?}", e);
            eprintln!("{}", e.report());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let storage_path = config.storage_path()?;
    tracing::debug!("storage: {}", storage_path.display());

    match cli.command {
        Commands::List { limit, offset, pages, all, search, captured, view } => {
            let limit = limit.unwrap_or(config.page_limit);
            if limit == 0 {
                return Err(PokedexError::InvalidLimit(limit));
            }

            let client = PokeApiClient::from_config(&config)?;
            let tags = TagStore::new(FileStore::new(&storage_path)).load_all();

            let mut state = CatalogState::starting_at(limit, offset);
            state.apply(Action::SetSearch(search.unwrap_or_default()));
            state.apply(Action::SetCapturedOnly(captured));
            state.apply(Action::SetViewMode(view));

            let budget = if all { PageBudget::All } else { PageBudget::Pages(pages) };
            let load_error = browse::load_pages(&client, &mut state, budget, !cli.verbose)
                .await
                .err();

            // 1ページも読めなければ一覧は出さない
            if !state.loaded {
                if let Some(e) = load_error {
                    return Err(e);
                }
            }

            let displayed = state.displayed(&tags);
            print!("{}", render::render_records(&displayed, state.view_mode, &config.sprite_base));

            if !state.captured_only {
                match state.next_offset {
                    Some(next) => println!("{} (--offset {})", state.load_more_label(), next),
                    None => println!("{}", state.load_more_label()),
                }
            }

            // 途中で失敗した場合は読めた分を出してからエラーを返す
            if let Some(e) = load_error {
                return Err(e);
            }
        }

        Commands::Show { pokemon } => {
            let client = PokeApiClient::from_config(&config)?;
            let pokemon = parse_ref(&pokemon)?;

            let detail = client.detail(&pokemon).await?;
            let tags = TagStore::new(FileStore::new(&storage_path)).load_all();
            print!("{}", render::render_detail(&detail, &tags, &config.sprite_base));
        }

        Commands::Capture { pokemon, nickname, date, today } => {
            let client = PokeApiClient::from_config(&config)?;
            let pokemon = parse_ref(&pokemon)?;

            // 正式名で記録するため詳細を引く
            let detail = client.detail(&pokemon).await?;
            println!("{} (#{:03})", detail.name, detail.id);

            let (nickname, date) = capture::resolve_fields(nickname, date, today)?;

            let mut tags = TagStore::new(FileStore::new(&storage_path));
            let tag = capture::capture_pokemon(&mut tags, &detail.name, &nickname, &date)?;
            tracing::info!("captured {} as {} on {}", tag.character, tag.nickname, tag.date);
            println!("✔ {}", capture::SUCCESS_MESSAGE);
        }

        Commands::Tags { character } => {
            let tags = TagStore::new(FileStore::new(&storage_path)).load_all();
            let tags: Vec<_> = match character {
                Some(name) => tags.into_iter().filter(|t| t.character == name).collect(),
                None => tags,
            };
            print!("{}", render::render_tags(&tags));
        }

        Commands::Config { set_api_base, set_page_limit, show } => {
            let mut config = config;

            if let Some(base) = set_api_base {
                config.set_api_base(base)?;
                println!("✔ APIベースURLを設定しました");
            }

            if let Some(limit) = set_page_limit {
                config.set_page_limit(limit)?;
                println!("✔ 1ページの件数を設定しました");
            }

            if show {
                println!("設定:");
                println!("  APIベースURL: {}", config.api_base);
                println!("  画像ベースURL: {}", config.sprite_base);
                println!("  1ページの件数: {}", config.page_limit);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  保存ファイル: {}", storage_path.display());
            }
        }

        Commands::Storage => {
            let file_store = FileStore::new(&storage_path);
            if storage_path.exists() {
                let has_entry = file_store.load(pokedex_common::STORAGE_KEY).is_some();
                let tags = TagStore::new(file_store).load_all();
                println!("保存ファイル情報:");
                println!("  パス: {}", storage_path.display());
                println!("  タグ件数: {}", tags.len());
                if !has_entry {
                    println!("  ({} は未保存)", pokedex_common::STORAGE_KEY);
                }
                if let Ok(meta) = std::fs::metadata(&storage_path) {
                    println!("  サイズ: {} bytes", meta.len());
                }
            } else {
                println!("保存ファイルが存在しません: {}", storage_path.display());
            }
        }
    }

    Ok(())
}
