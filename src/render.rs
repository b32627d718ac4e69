//! 端末表示用の整形
//!
//! すべて文字列を返すだけで、出力は呼び出し側が行う。

use pokedex_common::{sprite_url, CaptureTag, DisplayedRecord, PokemonDetail, ViewMode};

/// グリッド表示の列数
const GRID_COLUMNS: usize = 3;
/// グリッド1セルの幅
const CELL_WIDTH: usize = 26;

/// 捕獲情報の行
fn capture_lines(capture: Option<&CaptureTag>) -> Vec<String> {
    match capture {
        Some(tag) => vec![
            format!("Nickname: {}", tag.nickname),
            format!("Date: {}", tag.date),
        ],
        None => vec!["Not captured".to_string()],
    }
}

fn id_label(id: Option<u32>) -> String {
    match id {
        Some(id) => format!("#{:03}", id),
        None => "#---".to_string(),
    }
}

/// 一覧を整形
pub fn render_records(records: &[DisplayedRecord], view: ViewMode, sprite_base: &str) -> String {
    if records.is_empty() {
        return "No data available\n".to_string();
    }

    match view {
        ViewMode::Grid => render_grid(records),
        ViewMode::List => render_list(records, sprite_base),
    }
}

fn render_grid(records: &[DisplayedRecord]) -> String {
    let mut out = String::new();

    for row in records.chunks(GRID_COLUMNS) {
        let cells: Vec<Vec<String>> = row
            .iter()
            .map(|r| {
                let mut lines = vec![format!("{} {}", id_label(r.id), r.record.name)];
                lines.extend(capture_lines(r.capture.as_ref()));
                lines
            })
            .collect();
        let height = cells.iter().map(|c| c.len()).max().unwrap_or(0);

        for line_idx in 0..height {
            let line: Vec<String> = cells
                .iter()
                .map(|c| {
                    let text = c.get(line_idx).map(String::as_str).unwrap_or("");
                    format!("{:<width$}", text, width = CELL_WIDTH)
                })
                .collect();
            out.push_str(line.join(" ").trim_end());
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

fn render_list(records: &[DisplayedRecord], sprite_base: &str) -> String {
    let mut out = String::new();

    for r in records {
        let image = r
            .id
            .map(|id| sprite_url(sprite_base, id))
            .unwrap_or_default();
        let capture = capture_lines(r.capture.as_ref()).join(", ");
        out.push_str(&format!(
            "{:<6}{:<24}{:<40}{}\n",
            id_label(r.id),
            r.record.name,
            capture,
            image
        ));
    }

    out
}

/// 詳細を整形
pub fn render_detail(detail: &PokemonDetail, tags: &[CaptureTag], sprite_base: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", id_label(Some(detail.id)), detail.name));
    out.push_str(&format!("Image: {}\n", sprite_url(sprite_base, detail.id)));

    out.push_str("\nBase Experience:\n");
    match detail.base_experience {
        Some(exp) => out.push_str(&format!("  {}\n", exp)),
        None => out.push_str("  -\n"),
    }

    out.push_str("\nAbilities:\n");
    let abilities = detail.ability_names();
    if abilities.is_empty() {
        out.push_str("  No abilities available.\n");
    } else {
        for name in abilities {
            out.push_str(&format!("  {}\n", name));
        }
    }

    let captured: Vec<&CaptureTag> = tags.iter().filter(|t| t.character == detail.name).collect();
    out.push_str("\nCaptured:\n");
    if captured.is_empty() {
        out.push_str("  Not captured\n");
    } else {
        for tag in captured {
            out.push_str(&format!("  {} ({})\n", tag.nickname, tag.date));
        }
    }

    out
}

/// タグ一覧を整形
pub fn render_tags(tags: &[CaptureTag]) -> String {
    if tags.is_empty() {
        return "No data available\n".to_string();
    }

    tags.iter()
        .map(|t| format!("{:<24}{:<24}{}\n", t.character, t.nickname, t.date))
        .collect()
}
