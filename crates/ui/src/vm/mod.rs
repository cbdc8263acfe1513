mod quiz_vm;
mod results_vm;

pub use quiz_vm::{
    OptionMarker, OptionRowVm, QuestionCardVm, QuizIntent, QuizOutcome, QuizVm, start_quiz,
};
pub use results_vm::{AnswerReviewVm, ResultsVm, map_results};
