use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

use self::definition::Question;
use self::settings::Settings;

pub mod definition;
pub mod settings;


#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum QuizError {
    #[error("There are no questions to ask")]
    EmptyQuestionSet,
    #[error("The quiz is over, restart it to play again")]
    SessionComplete,
    #[error("This question was already answered, move on to the next one")]
    AlreadyAnswered,
    #[error("Answer the current question before moving on")]
    NotYetAnswered,
    #[error("`{0}` is not one of the options")]
    UnknownOption(String),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GuessResult {
    pub guess: String,
    pub is_correct: bool,
    pub correct_option: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct QuestionState {
    guess: Option<GuessResult>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Phase {
    InProgress(QuestionState),
    Completed,
}

/// One run through a shuffled question set.
///
/// The question list never changes after construction. `order` is drawn once
/// per run and only replaced by `restart`.
#[derive(Debug)]
pub struct Quiz {
    questions: Vec<Question>,
    order: Vec<usize>,
    position: usize,
    score: usize,
    current_phase: Phase,
    rng: StdRng,
}

impl Quiz {
    pub fn new(questions: Vec<Question>, settings: &Settings) -> Result<Quiz, QuizError> {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut quiz = Quiz {
            questions,
            order: Vec::new(),
            position: 0,
            score: 0,
            current_phase: Phase::Completed,
            rng,
        };
        quiz.restart()?;
        Ok(quiz)
    }

    pub fn start(questions: Vec<Question>) -> Result<Quiz, QuizError> {
        Quiz::new(questions, &Settings::default())
    }

    pub fn restart(&mut self) -> Result<(), QuizError> {
        if self.questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }
        let mut order: Vec<usize> = (0..self.questions.len()).collect();
        order.shuffle(&mut self.rng);
        info!("Starting quiz with {} questions", order.len());
        debug!("Question order: {:?}", order);
        self.order = order;
        self.position = 0;
        self.score = 0;
        self.current_phase = Phase::InProgress(QuestionState::default());
        Ok(())
    }

    pub fn current_question(&self) -> Result<&Question, QuizError> {
        match self.current_phase {
            Phase::InProgress(_) => Ok(&self.questions[self.order[self.position]]),
            Phase::Completed => Err(QuizError::SessionComplete),
        }
    }

    /// Checks the guess by option text, as a UI listing option labels would submit it.
    pub fn submit_answer(&mut self, guess: &str) -> Result<GuessResult, QuizError> {
        let question = self.unanswered_question()?;
        if question.option_index(guess).is_none() {
            return Err(QuizError::UnknownOption(guess.to_owned()));
        }
        let is_correct = question.is_guess_correct(guess);
        let result = GuessResult {
            guess: guess.to_owned(),
            is_correct,
            correct_option: question.correct_option().to_owned(),
        };
        Ok(self.record_guess(result))
    }

    /// Checks the guess by its position among the presented options.
    pub fn submit_option(&mut self, index: usize) -> Result<GuessResult, QuizError> {
        let question = self.unanswered_question()?;
        let guess = question
            .options
            .get(index)
            .ok_or_else(|| QuizError::UnknownOption(format!("option #{}", index + 1)))?;
        let result = GuessResult {
            guess: guess.clone(),
            is_correct: question.is_option_correct(index),
            correct_option: question.correct_option().to_owned(),
        };
        Ok(self.record_guess(result))
    }

    fn unanswered_question(&self) -> Result<&Question, QuizError> {
        match &self.current_phase {
            Phase::Completed => Err(QuizError::SessionComplete),
            Phase::InProgress(QuestionState { guess: Some(_) }) => Err(QuizError::AlreadyAnswered),
            Phase::InProgress(QuestionState { guess: None }) => self.current_question(),
        }
    }

    fn record_guess(&mut self, result: GuessResult) -> GuessResult {
        if result.is_correct {
            self.score += 1;
        }
        debug!(
            "Question {} answered ({}), score is now {}",
            self.position + 1,
            if result.is_correct { "correct" } else { "incorrect" },
            self.score
        );
        self.current_phase = Phase::InProgress(QuestionState {
            guess: Some(result.clone()),
        });
        result
    }

    pub fn advance(&mut self) -> Result<(), QuizError> {
        match &self.current_phase {
            Phase::Completed => return Err(QuizError::SessionComplete),
            Phase::InProgress(QuestionState { guess: None }) => {
                return Err(QuizError::NotYetAnswered)
            }
            Phase::InProgress(QuestionState { guess: Some(_) }) => (),
        }
        self.position += 1;
        if self.position == self.order.len() {
            info!("Quiz completed with score {}/{}", self.score, self.order.len());
            self.current_phase = Phase::Completed;
        } else {
            self.current_phase = Phase::InProgress(QuestionState::default());
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.position == self.order.len()
    }

    pub fn is_answered(&self) -> bool {
        match &self.current_phase {
            Phase::InProgress(state) => state.guess.is_some(),
            Phase::Completed => false,
        }
    }

    pub fn last_guess(&self) -> Option<&GuessResult> {
        match &self.current_phase {
            Phase::InProgress(state) => state.guess.as_ref(),
            Phase::Completed => None,
        }
    }

    /// `(score, number of questions in this run)`
    pub fn final_score(&self) -> (usize, usize) {
        (self.score, self.order.len())
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Questions submitted so far, including the current one once answered.
    pub fn answered_count(&self) -> usize {
        self.position + if self.is_answered() { 1 } else { 0 }
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
