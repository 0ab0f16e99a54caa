//! `outline` subcommand.

use poc_workflow::parse::{block_for_step, parse_processes};
use poc_workflow::prompts::extract_prompts;
use poc_workflow::PROCESS_STEPS;

/// One line per known step: its title, and either its prompt count or a
/// missing marker.
pub fn outline(text: &str) -> Vec<String> {
    let blocks = parse_processes(text);
    PROCESS_STEPS
        .iter()
        .enumerate()
        .map(|(index, step)| match block_for_step(&blocks, index) {
            Some(block) => format!(
                "✓ {} ({} prompts)",
                step.title,
                extract_prompts(&block.body).len()
            ),
            None => format!("⚠ {} - no content found", step.title),
        })
        .collect()
}

pub fn run_outline(text_path: &str) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(text_path)
        .map_err(|e| anyhow::anyhow!("Failed to read workflow text {}: {}", text_path, e))?;
    let lines = outline(&text);
    log::info!("Outlined {} steps from {}", lines.len(), text_path);
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_step_with_status() {
        let prompt = "あなたは編集者です。".repeat(8);
        let text = format!("8. 本文生成\nClaude用プロンプト：\n{prompt}\n");
        let lines = outline(&text);
        assert_eq!(lines.len(), PROCESS_STEPS.len());
        assert_eq!(lines[9], "✓ 工程8: 本文生成・10重チェック (1 prompts)");
        assert_eq!(lines[0], "⚠ 工程0: キーワード選定 - no content found");
    }
}
