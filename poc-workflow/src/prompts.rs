//! Per-model prompt blocks (`Gemini用プロンプト：` and friends).

use std::sync::LazyLock;

use regex::Regex;

use crate::sections::terminator_offset;

/// Prompts this short are headings or placeholders, not real prompts.
const MIN_PROMPT_CHARS: usize = 50;

const SHARED_END: [&str; 3] = ["システム実装例", "モデル比較", "補足"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini,
    ChatGpt,
    Claude,
}

impl Model {
    pub const ALL: [Model; 3] = [Model::Gemini, Model::ChatGpt, Model::Claude];

    pub fn name(self) -> &'static str {
        match self {
            Model::Gemini => "Gemini",
            Model::ChatGpt => "ChatGPT",
            Model::Claude => "Claude",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Model::Gemini => "gemini-prompt",
            Model::ChatGpt => "chatgpt-prompt",
            Model::Claude => "claude-prompt",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Model::Gemini => "Gemini用プロンプト",
            Model::ChatGpt => "ChatGPT用プロンプト",
            Model::Claude => "Claude用プロンプト",
        }
    }
}

/// Heading and terminator patterns for one model.
struct PromptPattern {
    model: Model,
    /// `X用プロンプト：rest of line\n` or `X用プロンプト（qualifier）：\n`.
    heading: Regex,
    /// A line starting with another model's heading or a shared section.
    end: Regex,
}

static PROMPT_PATTERNS: LazyLock<Vec<PromptPattern>> = LazyLock::new(|| {
    Model::ALL
        .iter()
        .map(|&model| {
            let heading = format!(
                r"(?i){}(?:[:：][^\n]*\n|\s*（[^）]+）[:：]?\s*\n)",
                regex::escape(model.heading())
            );
            let others: Vec<String> = Model::ALL
                .iter()
                .filter(|&&other| other != model)
                .map(|other| other.heading())
                .chain(SHARED_END)
                .map(regex::escape)
                .collect();
            let end = format!(r"(?i)\n(?:{})", others.join("|"));
            PromptPattern {
                model,
                heading: Regex::new(&heading).expect("prompt heading regex should compile"),
                end: Regex::new(&end).expect("prompt end regex should compile"),
            }
        })
        .collect()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub model: Model,
    pub text: String,
}

fn extract_for(text: &str, pattern: &PromptPattern) -> Vec<Prompt> {
    let mut prompts = Vec::new();
    let mut resume = 0;

    while let Some(heading) = pattern.heading.find_at(text, resume) {
        let body = &text[heading.end()..];
        let len = terminator_offset(body, &pattern.end).unwrap_or(body.len());
        resume = heading.end() + len;

        let content = body[..len].trim();
        if content.chars().count() > MIN_PROMPT_CHARS {
            prompts.push(Prompt {
                model: pattern.model,
                text: content.to_string(),
            });
        } else {
            log::debug!("skipping short {} prompt", pattern.model.name());
        }
    }
    prompts
}

/// All prompts in a step body, grouped by model in `Model::ALL` order and in
/// text order within a model.
pub fn extract_prompts(text: &str) -> Vec<Prompt> {
    PROMPT_PATTERNS
        .iter()
        .flat_map(|pattern| extract_for(text, pattern))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long(seed: &str) -> String {
        format!("{seed}。{}", "検索意図に沿って見出し構成を作成してください".repeat(3))
    }

    #[test]
    fn colon_heading_takes_body_from_next_line() {
        let body = long("あなたはSEOの専門家です");
        let text = format!("Gemini用プロンプト：高速処理向け\n{body}\nモデル比較・推奨\n速い");
        let prompts = extract_prompts(&text);
        assert_eq!(prompts.len(), 1, "one prompt expected: {prompts:?}");
        assert_eq!(prompts[0].model, Model::Gemini);
        assert_eq!(prompts[0].text, body);
    }

    #[test]
    fn parenthesized_heading_is_accepted() {
        let body = long("競合記事を分析してください");
        let text = format!("Claude用プロンプト（長文解析）：\n{body}");
        let prompts = extract_prompts(&text);
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].model, Model::Claude);
        assert_eq!(prompts[0].text, body);
    }

    #[test]
    fn bodies_stop_at_another_model() {
        let gemini = long("Gemini向けの指示");
        let chatgpt = long("ChatGPT向けの指示");
        let text = format!(
            "Gemini用プロンプト：\n{gemini}\nChatGPT用プロンプト：\n{chatgpt}\n補足：なし"
        );
        let prompts = extract_prompts(&text);
        let models: Vec<Model> = prompts.iter().map(|p| p.model).collect();
        assert_eq!(models, vec![Model::Gemini, Model::ChatGpt]);
        assert_eq!(prompts[0].text, gemini);
        assert_eq!(prompts[1].text, chatgpt);
    }

    #[test]
    fn short_bodies_are_dropped() {
        let text = "ChatGPT用プロンプト：\n短い指示\nClaude用プロンプト：\n同じく短い";
        assert!(extract_prompts(text).is_empty());
    }

    #[test]
    fn heading_match_ignores_ascii_case() {
        let body = long("指示");
        let text = format!("chatgpt用プロンプト：\n{body}");
        assert_eq!(extract_prompts(&text).len(), 1);
    }

    #[test]
    fn qualifier_may_sit_on_the_next_line() {
        let body = long("指示");
        let text = format!("Gemini用プロンプト\n（構造化出力）\n{body}");
        let prompts = extract_prompts(&text);
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].text, body);
    }

    #[test]
    fn heading_without_colon_or_qualifier_is_ignored() {
        let text = format!("Gemini用プロンプト\n{}", long("指示"));
        assert!(extract_prompts(&text).is_empty());
    }

    #[test]
    fn repeated_prompts_for_one_model_are_kept_in_order() {
        let first = long("一つ目");
        let second = long("二つ目");
        let text = format!(
            "Gemini用プロンプト：A\n{first}\nシステム実装例\ncode\nGemini用プロンプト：B\n{second}"
        );
        let texts: Vec<String> = extract_prompts(&text).into_iter().map(|p| p.text).collect();
        assert_eq!(texts, vec![first, second]);
    }
}
