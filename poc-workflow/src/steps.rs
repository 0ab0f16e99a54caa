//! The numbered steps of the workflow document.

/// One workflow step: the line prefix that starts it in the text, and how it
/// is titled in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub marker: &'static str,
    pub number: &'static str,
    pub title: &'static str,
}

impl ProcessStep {
    /// Anchor id of the step's section (`2.1` → `process-2-1`).
    pub fn section_id(&self) -> String {
        format!("process-{}", self.number.replace('.', "-"))
    }

    /// Title used in the navigation list.
    pub fn nav_title(&self) -> String {
        self.title.replace("工程", "").replace(": ", ":")
    }
}

pub static PROCESS_STEPS: [ProcessStep; 14] = [
    ProcessStep { marker: "0. キーワード選定", number: "0", title: "工程0: キーワード選定" },
    ProcessStep { marker: "1. Start - キーワード入力", number: "1", title: "工程1: キーワード入力" },
    ProcessStep { marker: "2. Search - 上位10サイト取得", number: "2", title: "工程2: 上位10サイト取得" },
    ProcessStep { marker: "2.1. Extract - 競合記事本文抽出", number: "2.1", title: "工程2.1: 競合記事本文抽出" },
    ProcessStep { marker: "3. クエリ分析・ペルソナ深掘り", number: "3", title: "工程3: クエリ分析・ペルソナ深掘り" },
    ProcessStep { marker: "4. 共起語・関連キーワード抽出", number: "4", title: "工程4: 共起語・関連キーワード抽出【心臓部】" },
    ProcessStep { marker: "5. 競合分析・差別化", number: "5", title: "工程5: 競合分析・差別化切り口発見" },
    ProcessStep { marker: "6. 戦略的アウトライン生成", number: "6", title: "工程6: 戦略的アウトライン生成" },
    ProcessStep { marker: "7. 一次情報追加", number: "7", title: "工程7: 一次情報追加・知識ギャップ解消" },
    ProcessStep { marker: "8. 本文生成", number: "8", title: "工程8: 本文生成・10重チェック" },
    ProcessStep { marker: "9. ファクトチェック", number: "9", title: "工程9: ファクトチェック" },
    ProcessStep { marker: "10. 最終リライト", number: "10", title: "工程10: 最終リライト・品質向上" },
    ProcessStep { marker: "11. SEO記事完成", number: "11", title: "工程11: SEO記事完成・最終出力" },
    ProcessStep { marker: "12.", number: "12", title: "工程12: 拡張工程（将来用）" },
];

/// Index of the step whose marker starts `line` (already trimmed).
pub fn step_for_line(line: &str) -> Option<usize> {
    PROCESS_STEPS
        .iter()
        .position(|step| line.starts_with(step.marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_replace_dots() {
        assert_eq!(PROCESS_STEPS[0].section_id(), "process-0");
        assert_eq!(PROCESS_STEPS[3].section_id(), "process-2-1");
        assert_eq!(PROCESS_STEPS[13].section_id(), "process-12");
    }

    #[test]
    fn nav_titles_drop_step_word() {
        assert_eq!(PROCESS_STEPS[1].nav_title(), "1:キーワード入力");
        assert_eq!(PROCESS_STEPS[3].nav_title(), "2.1:競合記事本文抽出");
    }

    #[test]
    fn markers_do_not_shadow_each_other() {
        assert_eq!(step_for_line("2. Search - 上位10サイト取得（Serper）"), Some(2));
        assert_eq!(step_for_line("2.1. Extract - 競合記事本文抽出"), Some(3));
        assert_eq!(step_for_line("10. 最終リライト"), Some(11));
        assert_eq!(step_for_line("12. 拡張"), Some(13));
        assert_eq!(step_for_line("1. 候補を列挙する"), None);
        assert_eq!(step_for_line("目的と内容"), None);
    }
}
