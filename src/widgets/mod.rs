pub mod question_input;

pub use question_input::{QuestionInput, QuestionInputWidget};
