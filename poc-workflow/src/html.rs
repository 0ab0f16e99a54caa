//! HTML rendering of workflow steps.

use std::sync::LazyLock;

use regex::Regex;

use crate::prompts::{extract_prompts, Prompt};
use crate::sections::{extract_section, truncate_chars, Section};
use crate::steps::ProcessStep;

pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

static BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*\-]\s+(.+)").expect("bullet regex should compile"));
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.+)").expect("numbered item regex should compile"));

/// Content of a `* item`, `- item` or `12. item` line.
fn list_item(line: &str) -> Option<&str> {
    BULLET_ITEM
        .captures(line)
        .or_else(|| NUMBERED_ITEM.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|item| item.as_str())
}

fn flush_list(parts: &mut Vec<String>, items: &mut Vec<&str>) {
    if items.is_empty() {
        return;
    }
    parts.push("<ul class=\"detail-list\">".to_string());
    parts.extend(items.drain(..).map(|item| format!("<li>{}</li>", html_escape(item))));
    parts.push("</ul>".to_string());
}

/// Plain text to `<p>` paragraphs, with runs of list lines grouped into a
/// `<ul class="detail-list">`. Blank lines end a list.
pub fn text_to_html_paragraphs(text: &str) -> String {
    let mut parts = Vec::new();
    let mut items = Vec::new();

    for line in text.split('\n').map(str::trim) {
        if line.is_empty() {
            flush_list(&mut parts, &mut items);
            continue;
        }
        match list_item(line) {
            Some(item) => items.push(item),
            None => {
                flush_list(&mut parts, &mut items);
                parts.push(format!("<p>{}</p>", html_escape(line)));
            }
        }
    }
    flush_list(&mut parts, &mut items);

    parts.join("\n")
}

fn content_box(class: &str, title: &str, text: &str, limit: usize) -> String {
    format!(
        "\n        <div class=\"{class}\">\n            <h3>{title}</h3>\n            {}\n        </div>\n",
        text_to_html_paragraphs(truncate_chars(text, limit))
    )
}

fn prompts_box(section_id: &str, prompts: &[Prompt]) -> String {
    let mut html = String::from(
        "\n        <div class=\"process-detail\">\n            <h3>🤖 AIモデル別プロンプト</h3>\n",
    );
    for (idx, prompt) in prompts.iter().enumerate() {
        let prompt_id = format!("prompt-{section_id}-{idx}");
        html.push_str(&format!(
            "\n            <h4>{heading}</h4>\n            <div class=\"prompt-box {class}\">\n                <button class=\"copy-btn\" onclick=\"copyToClipboard('{prompt_id}')\">📋 コピー</button>\n                <pre id=\"{prompt_id}\">{text}</pre>\n            </div>\n",
            heading = prompt.model.heading(),
            class = prompt.model.css_class(),
            text = html_escape(&prompt.text),
        ));
    }
    html.push_str("\n        </div>\n");
    html
}

/// Rendered `<section>` for one step, plus the number of prompts in it.
pub fn process_section_html(step: &ProcessStep, content: &str) -> (String, usize) {
    let section_id = step.section_id();
    let purpose = extract_section(content, Section::Purpose);
    let work = extract_section(content, Section::Work);
    let comparison = extract_section(content, Section::Comparison);
    let supplement = extract_section(content, Section::Supplement);
    let prompts = extract_prompts(content);

    let mut html = format!(
        "\n    <section id=\"{section_id}\">\n        <h2>{}</h2>\n",
        step.title
    );
    if !purpose.is_empty() {
        html.push_str(&content_box("principle-box", "📌 目的と内容", &purpose, Section::Purpose.limit()));
    }
    if !work.is_empty() {
        html.push_str(&content_box("process-detail", "🔧 作業内容", &work, Section::Work.limit()));
    }
    if !prompts.is_empty() {
        html.push_str(&prompts_box(&section_id, &prompts));
    }
    if !comparison.is_empty() {
        html.push_str(&content_box(
            "comparison-box",
            "⚖️ モデル比較・推奨",
            &comparison,
            Section::Comparison.limit(),
        ));
    }
    if !supplement.is_empty() {
        html.push_str(&content_box(
            "enhancement-box",
            "🧠 脳科学・行動経済学・LLMO・KGI観点からの強化ポイント",
            &supplement,
            Section::Supplement.limit(),
        ));
    }
    html.push_str("\n    </section>\n");

    (html, prompts.len())
}

/// `<li>` navigation entries linking to each step's section.
pub fn navigation_html(steps: &[ProcessStep]) -> String {
    steps
        .iter()
        .map(|step| {
            format!(
                "<li><a href=\"#{}\">{}</a></li>",
                step.section_id(),
                step.nav_title()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::PROCESS_STEPS;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            html_escape("<a href=\"x\">Tom & 'Jerry'</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn list_lines_are_grouped() {
        let html = text_to_html_paragraphs("手順:\n* 一つ目\n- 二つ目\n3. 三つ目\n\n終わり");
        assert_eq!(
            html,
            "<p>手順:</p>\n<ul class=\"detail-list\">\n<li>一つ目</li>\n<li>二つ目</li>\n<li>三つ目</li>\n</ul>\n<p>終わり</p>"
        );
    }

    #[test]
    fn markers_without_space_are_paragraphs() {
        assert_eq!(list_item("-5度"), None);
        assert_eq!(list_item("2.1. Extract"), None);
        assert_eq!(list_item("10. 最終"), Some("最終"));
        assert_eq!(text_to_html_paragraphs("*強調*"), "<p>*強調*</p>");
    }

    #[test]
    fn full_width_numbers_form_a_list() {
        assert_eq!(
            text_to_html_paragraphs("１. 全角番号の項目\n２. 二つ目"),
            "<ul class=\"detail-list\">\n<li>全角番号の項目</li>\n<li>二つ目</li>\n</ul>"
        );
    }

    #[test]
    fn empty_text_renders_nothing() {
        assert_eq!(text_to_html_paragraphs(""), "");
        assert_eq!(text_to_html_paragraphs("\n  \n"), "");
    }

    #[test]
    fn section_has_id_title_and_boxes() {
        let content = "目的と内容\nキーワードを決める。\n作業内容\n- 候補を出す\n決定事項\n";
        let (html, prompts) = process_section_html(&PROCESS_STEPS[3], content);
        assert_eq!(prompts, 0);
        assert!(html.contains("<section id=\"process-2-1\">"), "{html}");
        assert!(html.contains("<h2>工程2.1: 競合記事本文抽出</h2>"));
        assert!(html.contains("<div class=\"principle-box\">"));
        assert!(html.contains("<li>候補を出す</li>"));
        assert!(!html.contains("comparison-box"), "no comparison expected");
    }

    #[test]
    fn prompts_get_copy_buttons() {
        let prompt = "競合上位記事の見出しを列挙し、共通する論点と不足している論点を表形式で整理してください。出力は日本語で、見出しごとに根拠も添えること。";
        let content = format!("Gemini用プロンプト：\n{prompt}\n補足：なし");
        let (html, prompts) = process_section_html(&PROCESS_STEPS[0], &content);
        assert_eq!(prompts, 1);
        assert!(html.contains("<div class=\"prompt-box gemini-prompt\">"));
        assert!(html.contains("onclick=\"copyToClipboard('prompt-process-0-0')\""));
        assert!(html.contains("<pre id=\"prompt-process-0-0\">"));
        assert!(html.contains("<div class=\"enhancement-box\">"));
    }

    #[test]
    fn navigation_lists_every_step() {
        let nav = navigation_html(&PROCESS_STEPS[..2]);
        assert_eq!(
            nav,
            "<li><a href=\"#process-0\">0:キーワード選定</a></li>\n<li><a href=\"#process-1\">1:キーワード入力</a></li>"
        );
    }
}
