//! Turning raw completion text into a [`GeneratedStory`].
//!
//! Only the shape is checked: every required key must be present with the
//! right JSON type. Question and option counts are not enforced.

use serde_json::{Map, Value};

use crate::error::ResponseError;
use crate::story::{ComprehensionQuestion, GeneratedStory};

type Object = Map<String, Value>;

pub fn parse_story(text: &str) -> Result<GeneratedStory, ResponseError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| ResponseError::Malformed(e.to_string()))?;
    let root = value
        .as_object()
        .ok_or_else(|| ResponseError::Malformed("expected a JSON object".to_string()))?;

    let questions = require(root, "questions", "questions")?
        .as_array()
        .ok_or_else(|| wrong_type("questions", "an array"))?
        .iter()
        .enumerate()
        .map(|(i, q)| parse_question(i, q))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GeneratedStory {
        title: string_field(root, "title", "title")?,
        content: string_field(root, "content", "content")?,
        questions,
    })
}

fn parse_question(index: usize, value: &Value) -> Result<ComprehensionQuestion, ResponseError> {
    let path = |key: &str| format!("questions[{index}].{key}");
    let obj = value
        .as_object()
        .ok_or_else(|| wrong_type(&format!("questions[{index}]"), "an object"))?;

    let question = string_field(obj, "question", &path("question"))?;

    let options = require(obj, "options", &path("options"))?
        .as_array()
        .ok_or_else(|| wrong_type(&path("options"), "an array"))?
        .iter()
        .map(|o| {
            o.as_str()
                .map(str::to_string)
                .ok_or_else(|| wrong_type(&path("options"), "an array of strings"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let correct_answer = require(obj, "correct_answer", &path("correct_answer"))?
        .as_u64()
        .ok_or_else(|| wrong_type(&path("correct_answer"), "a non-negative integer"))?
        as usize;

    Ok(ComprehensionQuestion {
        question,
        options,
        correct_answer,
    })
}

fn require<'a>(obj: &'a Object, key: &str, path: &str) -> Result<&'a Value, ResponseError> {
    obj.get(key).ok_or_else(|| ResponseError::Incomplete {
        field: path.to_string(),
    })
}

fn string_field(obj: &Object, key: &str, path: &str) -> Result<String, ResponseError> {
    require(obj, key, path)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| wrong_type(path, "a string"))
}

fn wrong_type(path: &str, expected: &str) -> ResponseError {
    ResponseError::Malformed(format!("`{path}` must be {expected}"))
}
