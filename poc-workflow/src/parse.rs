//! Split the workflow text into per-step blocks.

use crate::steps::step_for_line;

/// Horizontal rule used between blocks in the source document.
pub const SEPARATOR: &str = "________________";

/// Text belonging to one step, without its marker line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessBlock {
    /// Index into `PROCESS_STEPS`.
    pub step: usize,
    /// The trimmed marker line that opened the block.
    pub heading: String,
    pub body: String,
}

/// Split `text` at lines starting with a step marker.
///
/// Lines before the first marker are dropped, as are separator lines. If the
/// same heading appears twice, the later body replaces the earlier one but
/// keeps its position.
pub fn parse_processes(text: &str) -> Vec<ProcessBlock> {
    let mut blocks: Vec<ProcessBlock> = Vec::new();
    let mut current: Option<(usize, String)> = None;
    let mut lines: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        let trimmed = line.trim();
        if let Some(step) = step_for_line(trimmed) {
            if let Some((step, heading)) = current.take() {
                store(&mut blocks, step, heading, lines.join("\n"));
            }
            current = Some((step, trimmed.to_string()));
            lines.clear();
            continue;
        }
        if current.is_some() && trimmed != SEPARATOR {
            lines.push(line);
        }
    }
    if let Some((step, heading)) = current {
        store(&mut blocks, step, heading, lines.join("\n"));
    }

    blocks
}

fn store(blocks: &mut Vec<ProcessBlock>, step: usize, heading: String, body: String) {
    match blocks.iter_mut().find(|b| b.heading == heading) {
        Some(existing) => existing.body = body,
        None => blocks.push(ProcessBlock { step, heading, body }),
    }
}

/// Body of the first block for `step`.
pub fn block_for_step(blocks: &[ProcessBlock], step: usize) -> Option<&ProcessBlock> {
    blocks.iter().find(|b| b.step == step)
}
