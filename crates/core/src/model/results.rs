//
// ─── ANSWER VERDICT ────────────────────────────────────────────────────────────
//

/// The backend's judgement of a single submitted answer.
///
/// `correct_answer` holds decoded text so it compares cleanly against the
/// decoded option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerVerdict {
    pub is_correct: bool,
    pub correct_answer: String,
}

//
// ─── RESULTS SUMMARY ───────────────────────────────────────────────────────────
//

/// One reviewed answer in the end-of-quiz summary, in question order.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerReview {
    pub question_number: u32,
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Final score report for a completed session, supplied by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsSummary {
    pub score: u32,
    pub total: u32,
    pub percentage: f64,
    pub answers: Vec<AnswerReview>,
}

impl ResultsSummary {
    /// Qualitative band for the achieved percentage.
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_percentage(self.percentage)
    }
}

//
// ─── SCORE BAND ────────────────────────────────────────────────────────────────
//

/// Qualitative performance band derived from the score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 80% and above.
    Excellent,
    /// 60% to 79%.
    Good,
    /// 40% to 59%.
    Fair,
    /// Below 40%.
    NeedsPractice,
}

impl ScoreBand {
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            ScoreBand::Excellent
        } else if percentage >= 60.0 {
            ScoreBand::Good
        } else if percentage >= 40.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::NeedsPractice
        }
    }

    /// Emoji indicator shown on the results screen.
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "🎉",
            ScoreBand::Good => "😊",
            ScoreBand::Fair => "🤔",
            ScoreBand::NeedsPractice => "📚",
        }
    }
}
