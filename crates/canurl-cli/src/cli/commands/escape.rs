//! `canurl escape` – percent-encode text.

use anyhow::Result;

use super::inputs;

pub fn run_escape(texts: Vec<String>) -> Result<()> {
    for text in inputs(texts)? {
        println!("{}", canurl_core::escape(&text));
    }
    Ok(())
}
