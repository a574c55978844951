//! Write-time markup rendering.
//!
//! Post content arrives as restricted inline markup (`**bold**`, `*italic*`,
//! `__underline__`) and is stored as structural markup. The transform runs
//! once at persistence time and is not reversible; the raw input is
//! discarded.
//!
//! Replacement is a single non-overlapping left-to-right pass per pattern,
//! bold before italic. Nested or adjacent markers can misparse (a literal
//! `**` inside italic markers, for instance); consumers depend on the
//! current output, so the ordering is kept as-is.

use regex::Regex;
use std::sync::LazyLock;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("italic pattern"));
static UNDERLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.+?)__").expect("underline pattern"));

/// Render raw inline markup into the stored structural form.
pub fn render(raw: &str) -> String {
    let out = BOLD.replace_all(raw, "<b>$1</b>");
    let out = ITALIC.replace_all(&out, "<i>$1</i>");
    UNDERLINE.replace_all(&out, "<u>$1</u>").into_owned()
}
