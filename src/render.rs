//! Plain-text rendering of stories for the terminal.

use crate::story::quiz::QuizScore;
use crate::story::{StoryRecord, StorySummary};

const OPTION_LABELS: &[char] = &['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

pub fn render_summaries(stories: &[StorySummary]) -> String {
    if stories.is_empty() {
        return "no stories yet.".to_string();
    }
    stories
        .iter()
        .map(|s| format!("{:>4}  {}  {}  ({})", s.id, s.created_at, s.title, s.topic))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full story with its questions. Answers stay hidden unless asked for.
pub fn render_story(story: &StoryRecord, reveal: bool) -> String {
    let mut out = format!(
        "# {}\n\ntopic: {}  model: {}  created: {}\n\n{}\n\nAnlama Soruları\n",
        story.title, story.topic, story.model_used, story.created_at, story.content
    );
    for (i, q) in story.questions.iter().enumerate() {
        out.push_str(&format!("\nSoru {}: {}\n", i + 1, q.question));
        for (j, option) in q.options.iter().enumerate() {
            let label = OPTION_LABELS.get(j).copied().unwrap_or('?');
            let mark = if reveal && j == q.correct_answer { " ✓" } else { "" };
            out.push_str(&format!("  {label}) {option}{mark}\n"));
        }
    }
    out
}

pub fn render_score(score: &QuizScore) -> String {
    format!(
        "Sonuç: {} / {}\n{}",
        score.correct,
        score.total,
        score.verdict().message()
    )
}
