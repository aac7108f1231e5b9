use wasm_bindgen::prelude::*;

/// Parse one raw model response and return the name and tag fields as JSON.
#[wasm_bindgen]
pub fn parse_metadata(input: &str) -> String {
    let metadata = wasf_parse::parse_metadata(input);
    serde_json::to_string(&metadata).unwrap_or_else(|_| "{}".to_string())
}
