//! Host Page Configuration
//!
//! Reads an optional `<script id="board-config" type="application/json">`
//! block from the page.

use lost_found_core::BoardConfig;

const CONFIG_ELEMENT_ID: &str = "board-config";

pub fn load_board_config() -> BoardConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(json) if !json.trim().is_empty() => BoardConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("[CONFIG] Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            BoardConfig::default()
        }),
        _ => BoardConfig::default(),
    }
}
