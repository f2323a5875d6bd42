use crate::story::Topic;

const LANGUAGE: &str = "Turkish";
const AUDIENCE: &str = "The story should be engaging and appropriate for general audiences.";
const QUESTIONS: &str =
    "After the story, create 3 multiple-choice comprehension questions to test understanding.";
const RESPONSE_HEADER: &str = "Please respond with a JSON object in this exact format:";
const RESPONSE_FORMAT: &str = r#"{
    "title": "Story title in Turkish",
    "content": "The full story text in Turkish",
    "questions": [
        {
            "question": "Question text in Turkish",
            "options": ["Option A", "Option B", "Option C", "Option D"],
            "correct_answer": 0
        },
        {
            "question": "Question text in Turkish",
            "options": ["Option A", "Option B", "Option C", "Option D"],
            "correct_answer": 1
        },
        {
            "question": "Question text in Turkish",
            "options": ["Option A", "Option B", "Option C", "Option D"],
            "correct_answer": 2
        }
    ]
}"#;
const CLOSING: &str = "Make sure the response is valid JSON and the correct_answer is the index (0-3) of the correct option.";

/// Render the single user message sent to the provider for `topic`.
pub fn build_story_prompt(topic: &Topic) -> String {
    format!(
        "Create a short story (300-500 words) about \"{topic}\" in {language}.\n{audience}\n\n{questions}\n\n{response_header}\n{response_format}\n\n{closing}",
        topic = topic,
        language = LANGUAGE,
        audience = AUDIENCE,
        questions = QUESTIONS,
        response_header = RESPONSE_HEADER,
        response_format = RESPONSE_FORMAT,
        closing = CLOSING,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(topic: &str) -> String {
        build_story_prompt(&Topic::new(topic).unwrap())
    }

    #[test]
    fn prompt_quotes_topic() {
        assert!(prompt("uzayda bir robot").contains("about \"uzayda bir robot\""));
    }

    #[test]
    fn prompt_asks_for_length_and_language() {
        let p = prompt("deniz");
        assert!(p.contains("300-500 words"));
        assert!(p.contains("in Turkish"));
    }

    #[test]
    fn prompt_asks_for_three_questions() {
        assert!(prompt("deniz").contains("3 multiple-choice comprehension questions"));
    }

    #[test]
    fn prompt_names_every_field() {
        let p = prompt("deniz");
        for field in [
            "\"title\"",
            "\"content\"",
            "\"questions\"",
            "\"question\"",
            "\"options\"",
            "\"correct_answer\"",
        ] {
            assert!(p.contains(field), "missing {field}");
        }
    }

    #[test]
    fn response_format_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(RESPONSE_FORMAT).unwrap();
        assert_eq!(value["questions"].as_array().unwrap().len(), 3);
        assert_eq!(value["questions"][0]["options"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn prompt_is_deterministic() {
        assert_eq!(prompt("deniz"), prompt("deniz"));
    }

    #[test]
    fn prompt_has_no_markdown_fences() {
        assert!(!prompt("deniz").contains("```"));
    }
}
