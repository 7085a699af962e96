use wasm_bindgen::prelude::*;

/// Converts a markdown document to html from javascript.
#[wasm_bindgen(js_name = markdownToHtml)]
pub fn markdown_to_html(source: &str) -> String {
    crate::document::convert(source)
}
