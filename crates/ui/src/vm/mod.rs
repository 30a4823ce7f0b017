mod quiz_vm;

pub use quiz_vm::{
    CategoryOptionVm, QuestionVm, QuizScreen, ScoreVm, SelectionVm, category_from_value,
    map_quiz_screen, map_selection,
};
