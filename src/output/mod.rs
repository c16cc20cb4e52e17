use crate::game::quiz::definition::{MalformedRecord, Question};

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AnswerReveal {
        explanation: String,
        reference: String,
    },
    GuessCorrect,
    GuessIncorrect(String),
    QuestionBegins {
        number: usize,
        total: usize,
        question: Question,
    },
    QuestionsRejected(Vec<MalformedRecord>),
    QuizResults {
        score: usize,
        total: usize,
    },
    QuizRules(usize),
    ScoreUpdate {
        score: usize,
        answered: usize,
    },
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}
