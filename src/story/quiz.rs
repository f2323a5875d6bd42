//! Grading a reader's answers against a story's questions.

use thiserror::Error;

use super::ComprehensionQuestion;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("all questions must be answered ({expected} expected, got {got})")]
    Unanswered { expected: usize, got: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Perfect,
    Good,
    NeedsReview,
}

impl Verdict {
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Perfect => "Mükemmel! Tüm soruları doğru cevapladınız.",
            Verdict::Good => "İyi iş! Çoğu soruyu doğru cevapladınız.",
            Verdict::NeedsReview => "Hikayeyi tekrar okuyarak daha iyi anlayabilirsiniz.",
        }
    }
}

impl QuizScore {
    /// Perfect when everything is right, good from 70% upwards.
    pub fn verdict(&self) -> Verdict {
        if self.correct == self.total {
            Verdict::Perfect
        } else if self.correct * 10 >= self.total * 7 {
            Verdict::Good
        } else {
            Verdict::NeedsReview
        }
    }
}

/// Count answers that hit `correct_answer`. Every question needs an answer.
pub fn score_answers(
    questions: &[ComprehensionQuestion],
    answers: &[usize],
) -> Result<QuizScore, QuizError> {
    if answers.len() != questions.len() {
        return Err(QuizError::Unanswered {
            expected: questions.len(),
            got: answers.len(),
        });
    }
    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(q, a)| q.correct_answer == **a)
        .count();
    Ok(QuizScore {
        correct,
        total: questions.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<ComprehensionQuestion> {
        vec![
            ComprehensionQuestion::new("1", ["a", "b", "c", "d"], 0),
            ComprehensionQuestion::new("2", ["a", "b", "c", "d"], 1),
            ComprehensionQuestion::new("3", ["a", "b", "c", "d"], 1),
        ]
    }

    #[test]
    fn all_correct_is_perfect() {
        let score = score_answers(&questions(), &[0, 1, 1]).unwrap();
        assert_eq!(score, QuizScore { correct: 3, total: 3 });
        assert_eq!(score.verdict(), Verdict::Perfect);
    }

    #[test]
    fn two_of_three_needs_review() {
        // 66% is under the 70% bar
        let score = score_answers(&questions(), &[0, 1, 3]).unwrap();
        assert_eq!(score.correct, 2);
        assert_eq!(score.verdict(), Verdict::NeedsReview);
    }

    #[test]
    fn seventy_percent_is_good() {
        let score = QuizScore {
            correct: 7,
            total: 10,
        };
        assert_eq!(score.verdict(), Verdict::Good);
    }

    #[test]
    fn missing_answers_rejected() {
        let err = score_answers(&questions(), &[0, 1]).unwrap_err();
        assert_eq!(
            err,
            QuizError::Unanswered {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn out_of_range_answer_is_just_wrong() {
        let score = score_answers(&questions(), &[9, 9, 9]).unwrap();
        assert_eq!(score.correct, 0);
    }

    #[test]
    fn verdict_messages_are_distinct() {
        assert_ne!(Verdict::Perfect.message(), Verdict::Good.message());
        assert_ne!(Verdict::Good.message(), Verdict::NeedsReview.message());
    }
}
