//! Context block construction for grounded generation
//!
//! Serializes a ranked result list into the bounded textual context that
//! gets spliced into the generation prompt. Section order follows ranked
//! order exactly; most-relevant-first is semantically meaningful and must
//! survive verbatim into the prompt.

use crate::ranker::RankedResult;

const SECTION_SEPARATOR: &str = "\n---\n";

/// Build the context block: one section per ranked result, carrying only
/// the title and first author (empty string if none).
#[must_use]
pub fn build_context(results: &[RankedResult<'_>]) -> String {
    let sections: Vec<String> = results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "Book {} Title: {}\nAuthor: {}\n",
                i + 1,
                r.candidate.title(),
                r.candidate.first_author()
            )
        })
        .collect();

    sections.join(SECTION_SEPARATOR)
}

/// Parse the section titles back out of a context block, in order.
#[must_use]
pub fn context_titles(context: &str) -> Vec<String> {
    context
        .lines()
        .filter_map(|line| {
            let rest = line.strip_prefix("Book ")?;
            let (_, title) = rest.split_once("Title: ")?;
            Some(title.to_string())
        })
        .collect()
}

/// Render the chat prompt from its template.
///
/// Templates use `{context}` and `{query}` placeholders.
#[must_use]
pub fn render_prompt(template: &str, context: &str, query: &str) -> String {
    template
        .replace("{context}", context)
        .replace("{query}", query)
}

/// Render the per-book summary prompt from its template.
///
/// Templates use `{title}`, `{author}` and `{isbn}` placeholders.
#[must_use]
pub fn render_summary_prompt(template: &str, title: &str, author: &str, isbn: &str) -> String {
    template
        .replace("{title}", title)
        .replace("{author}", author)
        .replace("{isbn}", isbn)
}
