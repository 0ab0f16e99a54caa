//! Named sub-sections inside a step block.
//!
//! A section starts at its heading and runs up to the next line that begins
//! with one of its terminators. Purpose and work sections only count when a
//! terminator follows; comparison and supplement may run to the end.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("section regex should compile")
}

// Headings. `\s*\n` is greedy, so the body starts after the last line break
// of the whitespace run.
static PURPOSE_HEADING: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)目的と内容\s*\n"));
static WORK_HEADING: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)作業内容\s*\n"));
static COMPARISON_HEADING: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)モデル比較・推奨\s*\n"));
static SUPPLEMENT_HEADING: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)補足[:：]"));

static PURPOSE_END: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\n(?:作業内容|【|プロンプト|Gemini|ChatGPT|Claude|システム|モデル比較)")
});
static WORK_END: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)\n(?:決定事項|【|プロンプト|Gemini|ChatGPT|Claude|システム|モデル比較)")
});
static COMPARISON_END: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\n(?:補足|________________)"));
static SUPPLEMENT_END: LazyLock<Regex> = LazyLock::new(|| compile(r"\n________________"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Purpose,
    Work,
    Comparison,
    Supplement,
}

impl Section {
    pub fn heading(self) -> &'static str {
        match self {
            Section::Purpose => "目的と内容",
            Section::Work => "作業内容",
            Section::Comparison => "モデル比較・推奨",
            Section::Supplement => "補足",
        }
    }

    /// Maximum number of characters rendered for this section.
    pub fn limit(self) -> usize {
        match self {
            Section::Purpose | Section::Work => 2000,
            Section::Comparison => 1500,
            Section::Supplement => 2500,
        }
    }

    fn heading_regex(self) -> &'static Regex {
        match self {
            Section::Purpose => &*PURPOSE_HEADING,
            Section::Work => &*WORK_HEADING,
            Section::Comparison => &*COMPARISON_HEADING,
            Section::Supplement => &*SUPPLEMENT_HEADING,
        }
    }

    fn end_regex(self) -> &'static Regex {
        match self {
            Section::Purpose => &*PURPOSE_END,
            Section::Work => &*WORK_END,
            Section::Comparison => &*COMPARISON_END,
            Section::Supplement => &*SUPPLEMENT_END,
        }
    }

    fn runs_to_end(self) -> bool {
        matches!(self, Section::Comparison | Section::Supplement)
    }
}

/// Byte offset of the first terminator match in `body`. The body is at least
/// one character long, so a match at offset 0 is ignored.
pub(crate) fn terminator_offset(body: &str, end: &Regex) -> Option<usize> {
    end.find_iter(body).map(|m| m.start()).find(|&start| start > 0)
}

/// Extract `section` from a step body, trimmed. Empty if absent.
pub fn extract_section(text: &str, section: Section) -> String {
    for heading in section.heading_regex().find_iter(text) {
        let body = &text[heading.end()..];
        if body.is_empty() {
            continue;
        }
        return match terminator_offset(body, section.end_regex()) {
            Some(stop) => body[..stop].trim().to_string(),
            None if section.runs_to_end() => body.trim().to_string(),
            None => String::new(),
        };
    }
    String::new()
}

/// First `limit` characters of `text`.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: &str = "\
目的と内容
検索意図を三層で整理する。
  読者の不安を特定する。
作業内容
- 候補を出す
- 絞り込む
決定事項
上位3件を採用。
モデル比較・推奨
Geminiは速い。
補足：脳科学の観点では扁桃体への訴求が有効。";

    #[test]
    fn purpose_runs_until_work_heading() {
        assert_eq!(
            extract_section(STEP, Section::Purpose),
            "検索意図を三層で整理する。\n  読者の不安を特定する。"
        );
    }

    #[test]
    fn work_stops_at_decisions() {
        assert_eq!(extract_section(STEP, Section::Work), "- 候補を出す\n- 絞り込む");
    }

    #[test]
    fn comparison_stops_at_supplement() {
        assert_eq!(extract_section(STEP, Section::Comparison), "Geminiは速い。");
    }

    #[test]
    fn supplement_follows_colon_to_end() {
        assert_eq!(
            extract_section(STEP, Section::Supplement),
            "脳科学の観点では扁桃体への訴求が有効。"
        );
    }

    #[test]
    fn purpose_without_terminator_is_empty() {
        assert_eq!(extract_section("目的と内容\n最後まで続く本文", Section::Purpose), "");
    }

    #[test]
    fn comparison_may_run_to_end() {
        assert_eq!(
            extract_section("モデル比較・推奨\nClaudeを推奨", Section::Comparison),
            "Claudeを推奨"
        );
    }

    #[test]
    fn terminators_match_case_insensitively() {
        let text = "目的と内容\n本文\nchatgpt用プロンプト：";
        assert_eq!(extract_section(text, Section::Purpose), "本文");
    }

    #[test]
    fn heading_inside_a_sentence_is_skipped() {
        let text = "ここで目的と内容を述べる。\n目的と内容\n本当の本文\n作業内容\n";
        assert_eq!(extract_section(text, Section::Purpose), "本当の本文");
    }

    #[test]
    fn heading_may_trail_ideographic_space() {
        let text = "目的と内容\u{3000}\n本文\n作業内容\n";
        assert_eq!(extract_section(text, Section::Purpose), "本文");
    }

    #[test]
    fn missing_heading_is_empty() {
        assert_eq!(extract_section("本文だけ", Section::Supplement), "");
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_chars("あいうえお", 3), "あいう");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
