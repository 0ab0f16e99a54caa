//! Splice rendered steps into the report's HTML template.

use std::sync::LazyLock;

use regex::Regex;

use crate::html::{navigation_html, process_section_html};
use crate::parse::{block_for_step, parse_processes};
use crate::steps::{ProcessStep, PROCESS_STEPS};

const WORKFLOW_CSS: &str = include_str!("../assets/workflow.css");
const OVERVIEW_HTML: &str = include_str!("../assets/overview.html");
const COMPLETION_HTML: &str = include_str!("../assets/completion.html");

// The content area runs to the first `</div>` that is followed, past
// whitespace, by another `</div>` and `</body>`.
static CONTENT_AREA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)(<div class="content">)(.*?)(</div>\s*</div>\s*</body>)"#)
        .expect("content area regex should compile")
});
static NAV_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(<nav>.*?<ul>)(.*?)(</ul>.*?</nav>)").expect("nav regex should compile")
});

/// Replace the middle group of the first `pattern` match with `inner`.
fn replace_inner(html: &str, pattern: &Regex, inner: &str) -> Option<String> {
    let caps = pattern.captures(html)?;
    let open = caps.get(1)?.end();
    let close = caps.get(3)?.start();
    Some(format!("{}{inner}{}", &html[..open], &html[close..]))
}

/// Result of integrating a workflow text into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integration {
    pub html: String,
    /// Number of step sections rendered.
    pub sections: usize,
    /// Number of prompts across all sections.
    pub prompts: usize,
    /// Steps with no block in the text.
    pub missing: Vec<&'static ProcessStep>,
    pub content_replaced: bool,
    pub nav_replaced: bool,
}

/// Insert the workflow styles before every `</style>`.
pub fn add_additional_styles(template: &str) -> String {
    template.replace("</style>", &format!("{}\n</style>", WORKFLOW_CSS.trim_end()))
}

/// Replace the inner HTML of the content area. `None` if the template has no
/// recognizable content area.
pub fn replace_content(html: &str, sections_html: &str) -> Option<String> {
    let inner = format!("\n\n{OVERVIEW_HTML}\n{sections_html}\n\n{COMPLETION_HTML}\n");
    replace_inner(html, &CONTENT_AREA, &inner)
}

/// Replace the items of the first `<ul>` inside `<nav>`.
pub fn replace_navigation(html: &str, nav_html: &str) -> Option<String> {
    replace_inner(html, &NAV_LIST, &format!("\n{nav_html}\n"))
}

/// Render every step found in `text` and splice the result into `template`.
///
/// Steps are emitted in their fixed order, whatever their order in the text.
/// The navigation lists all steps, including those missing from the text.
pub fn integrate(text: &str, template: &str) -> Integration {
    let blocks = parse_processes(text);
    log::info!("detected {} step blocks", blocks.len());

    let mut sections = Vec::new();
    let mut prompts = 0;
    let mut missing = Vec::new();
    for (index, step) in PROCESS_STEPS.iter().enumerate() {
        match block_for_step(&blocks, index) {
            Some(block) => {
                let (html, count) = process_section_html(step, &block.body);
                log::debug!("{}: {} prompts", step.title, count);
                sections.push(html);
                prompts += count;
            }
            None => {
                log::warn!("{} - no content found", step.title);
                missing.push(step);
            }
        }
    }

    let styled = add_additional_styles(template);
    let (with_content, content_replaced) = match replace_content(&styled, &sections.join("\n")) {
        Some(html) => (html, true),
        None => {
            log::warn!("template has no content area; sections not inserted");
            (styled, false)
        }
    };
    let (html, nav_replaced) =
        match replace_navigation(&with_content, &navigation_html(&PROCESS_STEPS)) {
            Some(html) => (html, true),
            None => {
                log::warn!("template has no <nav><ul>; navigation not updated");
                (with_content, false)
            }
        };

    Integration {
        html,
        sections: sections.len(),
        prompts,
        missing,
        content_replaced,
        nav_replaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<html><head><style>body{}</style></head><body>
<div class=\"container\">
<nav><ul><li>old</li></ul></nav>
<div class=\"content\">
<section>old section</section>
</div>
</div>
</body></html>";

    const TEXT: &str = "\
0. キーワード選定
目的と内容
ターゲットの悩みを特定する。
作業内容
* 検索ボリュームを確認
決定事項
________________
11. SEO記事完成
モデル比較・推奨
Claudeの文章が最も自然。";

    #[test]
    fn styles_go_before_every_style_close() {
        let html = add_additional_styles("<style>a{}</style><style></style>");
        assert_eq!(html.matches(".detail-list {").count(), 2);
        assert!(html.ends_with("}\n</style>"), "{html}");
    }

    #[test]
    fn content_area_is_replaced() {
        let result = integrate(TEXT, TEMPLATE);
        assert!(result.content_replaced && result.nav_replaced);
        assert!(!result.html.contains("old section"), "old content should be gone");
        assert!(result.html.contains("<section id=\"overview\">"));
        assert!(result.html.contains("<section id=\"completion\">"));
        assert!(result.html.ends_with("</div>\n</div>\n</body></html>"));
    }

    #[test]
    fn sections_follow_step_order() {
        let result = integrate(TEXT, TEMPLATE);
        assert_eq!(result.sections, 2);
        let first = result.html.find("id=\"process-0\"").unwrap();
        let last = result.html.find("id=\"process-11\"").unwrap();
        assert!(first < last);
    }

    #[test]
    fn missing_steps_are_reported_but_still_navigable() {
        let result = integrate(TEXT, TEMPLATE);
        assert_eq!(result.missing.len(), PROCESS_STEPS.len() - 2);
        assert!(result.missing.iter().all(|s| s.number != "0" && s.number != "11"));
        assert!(!result.html.contains("<li>old</li>"));
        assert_eq!(result.html.matches("<li><a href=\"#process-").count(), PROCESS_STEPS.len());
    }

    #[test]
    fn template_without_anchors_is_left_alone() {
        let result = integrate(TEXT, "<body><p>plain</p></body>");
        assert!(!result.content_replaced);
        assert!(!result.nav_replaced);
        assert_eq!(result.html, "<body><p>plain</p></body>");
    }

    #[test]
    fn content_area_ends_before_closing_body() {
        let html = "<div class=\"content\"><div>a</div>\n</div>\n</body>";
        let replaced = replace_content(html, "<section>new</section>").unwrap();
        assert!(!replaced.contains("<div>a</div>"), "{replaced}");
        assert!(replaced.contains("<section>new</section>"));
        assert!(replaced.ends_with("\n</div>\n</div>\n</body>"), "{replaced}");
        assert_eq!(replace_content("<div class=\"content\"></div></div>", "x"), None);
    }

    #[test]
    fn only_the_first_nav_list_is_replaced() {
        let html = "<nav><ul><li>a</li></ul></nav><nav><ul><li>b</li></ul></nav>";
        assert_eq!(
            replace_navigation(html, "<li>new</li>").unwrap(),
            "<nav><ul>\n<li>new</li>\n</ul></nav><nav><ul><li>b</li></ul></nav>"
        );
        assert_eq!(replace_navigation("<ul><li>a</li></ul>", "x"), None);
    }

    #[test]
    fn styles_keep_one_line_break_before_close() {
        let html = add_additional_styles("<style></style>");
        assert!(!html.contains("\n\n</style>"), "{html}");
    }
}
