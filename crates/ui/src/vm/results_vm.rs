use trivia_core::model::{AnswerReview, ResultsSummary};

#[derive(Clone, Debug, PartialEq)]
pub struct AnswerReviewVm {
    pub heading: String,
    pub user_answer: String,
    /// Set only for incorrect answers; correct ones don't repeat themselves.
    pub correct_answer: Option<String>,
    pub card_class: &'static str,
    pub status_class: &'static str,
    pub status_label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultsVm {
    pub score: u32,
    pub total: u32,
    pub percentage_label: String,
    pub emoji: &'static str,
    pub reviews: Vec<AnswerReviewVm>,
}

#[must_use]
pub fn map_results(summary: &ResultsSummary) -> ResultsVm {
    ResultsVm {
        score: summary.score,
        total: summary.total,
        percentage_label: format!("{:.0}%", summary.percentage),
        emoji: summary.band().emoji(),
        reviews: summary.answers.iter().map(map_answer_review).collect(),
    }
}

fn map_answer_review(answer: &AnswerReview) -> AnswerReviewVm {
    let (card_class, status_class, status_label) = if answer.is_correct {
        (
            "answer-card answer-card--correct",
            "status status--correct",
            "✓ Correct",
        )
    } else {
        (
            "answer-card answer-card--incorrect",
            "status status--incorrect",
            "✗ Incorrect",
        )
    };

    AnswerReviewVm {
        heading: format!("{}. {}", answer.question_number, answer.question),
        user_answer: answer.user_answer.clone(),
        correct_answer: (!answer.is_correct).then(|| answer.correct_answer.clone()),
        card_class,
        status_class,
        status_label,
    }
}
