/// Collapses `**` to `*` so model-style bold renders as bold in Telegram's legacy Markdown.
///
/// Single left-to-right pass; `****` becomes `**`, so applying it twice is not always a no-op.
pub fn normalize_markdown(text: &str) -> String {
    text.replace("**", "*")
}
