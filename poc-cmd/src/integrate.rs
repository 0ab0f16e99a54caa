//! `integrate` subcommand.

use log::{info, warn};
use poc_workflow::Integration;

fn read(path: &str, what: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {} {}: {}", what, path, e))
}

/// Read the workflow text and template, integrate, and write `output_path`.
///
/// Fails without writing if the template has no content area, since the
/// output would silently lack every step.
pub fn run_integrate(
    text_path: &str,
    template_path: &str,
    output_path: &str,
) -> anyhow::Result<Integration> {
    let text = read(text_path, "workflow text")?;
    info!("Read {} characters of workflow text", text.chars().count());
    let template = read(template_path, "template")?;
    info!("Read {} characters of template", template.chars().count());

    let result = poc_workflow::integrate(&text, &template);
    if !result.content_replaced {
        anyhow::bail!(
            "{} has no <div class=\"content\"> area closed before </body>",
            template_path
        );
    }
    if !result.nav_replaced {
        warn!("{} has no <nav><ul> list; navigation left unchanged", template_path);
    }
    for step in &result.missing {
        warn!("{} - no content found", step.title);
    }

    std::fs::write(output_path, &result.html)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", output_path, e))?;

    info!(
        "Integrated {} sections, {} prompts into {} ({} characters)",
        result.sections,
        result.prompts,
        output_path,
        result.html.chars().count()
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TEMPLATE: &str = "<style></style><nav><ul></ul></nav>
<div class=\"content\">
</div>
</div>
</body>";

    const TEXT: &str = "1. Start - キーワード入力\n目的と内容\n入力を受け取る。\n作業内容\n検証する。\n決定事項\n";

    #[test]
    fn writes_integrated_html() {
        let dir = tempdir().unwrap();
        let text = dir.path().join("flow.txt");
        let template = dir.path().join("page.html");
        let output = dir.path().join("out.html");
        std::fs::write(&text, TEXT).unwrap();
        std::fs::write(&template, TEMPLATE).unwrap();

        let result = run_integrate(
            text.to_str().unwrap(),
            template.to_str().unwrap(),
            output.to_str().unwrap(),
        )
        .unwrap();

        assert_eq!(result.sections, 1);
        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("<section id=\"process-1\">"), "section missing: {written}");
        assert_eq!(
            std::fs::read_to_string(&template).unwrap(),
            TEMPLATE,
            "template must be untouched when an output path is given"
        );
    }

    #[test]
    fn template_without_content_area_is_an_error() {
        let dir = tempdir().unwrap();
        let text = dir.path().join("flow.txt");
        let template = dir.path().join("page.html");
        let output = dir.path().join("out.html");
        std::fs::write(&text, TEXT).unwrap();
        std::fs::write(&template, "<body></body>").unwrap();

        let err = run_integrate(
            text.to_str().unwrap(),
            template.to_str().unwrap(),
            output.to_str().unwrap(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("content"), "unexpected error: {err}");
        assert!(!output.exists(), "nothing should be written on failure");
    }

    #[test]
    fn missing_input_names_the_file() {
        let err = run_integrate("/nonexistent/flow.txt", "/nonexistent/page.html", "/tmp/x.html")
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/flow.txt"));
    }
}
