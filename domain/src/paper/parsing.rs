//! Section parsing for synthesized research papers.
//!
//! Model output is free-form text. A line is a section header when it is a
//! markdown heading (`## Abstract`), a bold heading (`**Abstract**`,
//! `**Abstract:** text`) or a `Label:` prefix (`Conclusion: text`), with an
//! optional numbering (`1.`, `2.3`, `IV.`) and an optional parenthetical
//! suffix. Only labels listed in [`section_for_label`] count as headers;
//! each section runs until the next recognised header. Words that often
//! open an ordinary sentence (`Summary:`, `Background:`, `Sources:`) are
//! headers only in the heading and bold forms.
//!
//! Missing sections stay empty rather than failing the parse.

use super::document::{PaperDocument, PaperPerspective};
use crate::participant::entities::Stance;
use regex::Regex;
use std::sync::LazyLock;

static NUMBERING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:\d+(?:\.\d+)*[.)]?|[ivx]+[.)])\s*").expect("valid numbering regex")
});

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)\s*$").expect("valid parenthetical regex"));

/// A recognised section of the paper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Title,
    Abstract,
    Introduction,
    /// Umbrella heading above the per-stance sections; its own text is dropped
    Perspectives,
    Perspective(Stance),
    Discussion,
    Conclusion,
    References,
}

/// Map a header label to a section, tolerating numbering, case, trailing
/// colons and a parenthetical suffix
pub fn section_for_label(label: &str) -> Option<Section> {
    let normalized = normalize_label(label);
    let section = match normalized.as_str() {
        "title" => Section::Title,
        "abstract" | "summary" | "executive summary" => Section::Abstract,
        "introduction" | "background" => Section::Introduction,
        "perspectives"
        | "different perspectives"
        | "analysis of perspectives"
        | "analysis of different perspectives"
        | "analysis of different viewpoints"
        | "viewpoints" => Section::Perspectives,
        "supporting perspective"
        | "for perspective"
        | "perspective for"
        | "pro perspective"
        | "affirmative perspective"
        | "argument for"
        | "arguments for"
        | "supporting argument"
        | "supporting arguments" => Section::Perspective(Stance::For),
        "opposing perspective"
        | "against perspective"
        | "perspective against"
        | "con perspective"
        | "counter perspective"
        | "argument against"
        | "arguments against"
        | "opposing argument"
        | "opposing arguments" => Section::Perspective(Stance::Against),
        "neutral perspective"
        | "balanced perspective"
        | "neutral analysis"
        | "balanced analysis"
        | "neutral view" => Section::Perspective(Stance::Neutral),
        "discussion" | "comparative analysis" => Section::Discussion,
        "conclusion" | "conclusions" => Section::Conclusion,
        "references" | "bibliography" | "sources" | "works cited" => Section::References,
        _ => return None,
    };
    Some(section)
}

/// Aliases too common in prose to trust as a bare `Label:` prefix
fn is_loose_alias(label: &str) -> bool {
    matches!(
        normalize_label(label).as_str(),
        "summary" | "background" | "sources"
    )
}

fn normalize_label(label: &str) -> String {
    let label = label.trim().trim_end_matches(':').trim();
    let label = NUMBERING.replace(label, "");
    let label = PARENTHETICAL.replace(&label, "");
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Recognise a header line, returning its section and any inline text
/// that follows the label on the same line
pub fn detect_header(line: &str) -> Option<(Section, String)> {
    let mut rest = line.trim();
    if rest.is_empty() {
        return None;
    }

    let heading = rest.starts_with('#');
    if heading {
        rest = rest.trim_start_matches('#').trim_start();
    }

    if let Some(inner) = rest.strip_prefix("**") {
        let end = inner.find("**")?;
        let section = section_for_label(&inner[..end])?;
        let after = inner[end + 2..].trim_start();
        let after = after.strip_prefix(':').unwrap_or(after).trim();
        return Some((section, after.to_string()));
    }

    if heading && let Some(section) = section_for_label(rest) {
        return Some((section, String::new()));
    }

    let (label, after) = rest.split_once(':')?;
    if !heading && is_loose_alias(label) {
        return None;
    }
    let section = section_for_label(label)?;
    Some((section, after.trim().to_string()))
}

/// Parse raw synthesis output into a [`PaperDocument`]
///
/// The title comes from a `Title` section, else from a leading markdown
/// heading that is not itself a section, else from `topic`.
pub fn parse_paper_response(topic: &str, raw: &str) -> PaperDocument {
    let mut blocks: Vec<(Section, Vec<String>)> = Vec::new();
    let mut preamble_title: Option<String> = None;

    for line in raw.lines() {
        if let Some((section, inline)) = detect_header(line) {
            let mut lines = Vec::new();
            if !inline.is_empty() {
                lines.push(inline);
            }
            blocks.push((section, lines));
        } else if let Some((_, lines)) = blocks.last_mut() {
            lines.push(line.to_string());
        } else if preamble_title.is_none() && line.trim_start().starts_with('#') {
            let heading = line.trim().trim_start_matches('#').trim();
            let heading = heading.trim_matches('*').trim();
            if !heading.is_empty() {
                preamble_title = Some(heading.to_string());
            }
        }
    }

    let mut doc = PaperDocument::titled(topic);
    let mut title: Option<String> = None;

    for (section, lines) in blocks {
        let content = lines.join("\n").trim().to_string();
        match section {
            Section::Title => {
                if title.is_none() && !content.is_empty() {
                    title = content.lines().next().map(|l| l.trim().to_string());
                }
            }
            Section::Abstract => append(&mut doc.abstract_text, &content),
            Section::Introduction => append(&mut doc.introduction, &content),
            Section::Perspectives => {}
            Section::Perspective(stance) => {
                match doc.perspectives.iter_mut().find(|p| p.stance == stance) {
                    Some(existing) => append(&mut existing.content, &content),
                    None => doc.perspectives.push(PaperPerspective { stance, content }),
                }
            }
            Section::Discussion => append(&mut doc.discussion, &content),
            Section::Conclusion => append(&mut doc.conclusion, &content),
            Section::References => doc.references.extend(
                content
                    .lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(str::to_string),
            ),
        }
    }

    if let Some(title) = title.or(preamble_title) {
        doc.title = title;
    }

    doc
}

fn append(target: &mut String, content: &str) {
    if content.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push_str("\n\n");
    }
    target.push_str(content);
}
