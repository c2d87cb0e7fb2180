mod quiz_vm;
mod results_vm;
mod time_fmt;

pub use quiz_vm::{
    OptionVm, QuestionCardVm, QuizIntent, QuizNotice, QuizOutcome, QuizPhase, QuizScreenVm,
    QuizVm,
};
pub use results_vm::{ResultRowVm, ResultsVm, map_results};
