use anyhow::Result;
use log::{info, warn};

pub mod quiz;

use crate::game::quiz::definition::QuizDefinition;
use crate::game::quiz::settings::Settings;
use crate::game::quiz::{GuessResult, Quiz};
use crate::output::{Message, QuizOutput};

#[cfg(test)]
mod tests;

/// Drives a quiz from UI events and narrates each step to the output.
pub struct Game<O: QuizOutput> {
    quiz: Quiz,
    output: O,
}

impl<O: QuizOutput> Game<O> {
    pub fn new(definition: QuizDefinition, settings: &Settings, output: O) -> Result<Self> {
        if !definition.get_rejected().is_empty() {
            warn!(
                "{} malformed question(s) were skipped",
                definition.get_rejected().len()
            );
            output.say(&Message::QuestionsRejected(
                definition.get_rejected().clone(),
            ));
        }
        let quiz = Quiz::new(definition.into_questions(), settings)?;
        Ok(Game { quiz, output })
    }

    pub fn begin(&mut self) -> Result<()> {
        self.output
            .say(&Message::QuizRules(self.quiz.questions().len()));
        self.announce_question()
    }

    pub fn answer(&mut self, guess: &str) -> Result<GuessResult> {
        let result = self.quiz.submit_answer(guess)?;
        self.reveal(&result)?;
        Ok(result)
    }

    pub fn answer_option(&mut self, index: usize) -> Result<GuessResult> {
        let result = self.quiz.submit_option(index)?;
        self.reveal(&result)?;
        Ok(result)
    }

    pub fn next(&mut self) -> Result<()> {
        self.quiz.advance()?;
        if self.quiz.is_complete() {
            let (score, total) = self.quiz.final_score();
            self.output.say(&Message::QuizResults { score, total });
            Ok(())
        } else {
            self.announce_question()
        }
    }

    pub fn restart(&mut self) -> Result<()> {
        info!("Restarting quiz");
        self.quiz.restart()?;
        self.announce_question()
    }

    pub fn is_over(&self) -> bool {
        self.quiz.is_complete()
    }

    pub fn get_quiz(&self) -> &Quiz {
        &self.quiz
    }

    fn announce_question(&mut self) -> Result<()> {
        let question = self.quiz.current_question()?.clone();
        self.output.say(&Message::QuestionBegins {
            number: self.quiz.position() + 1,
            total: self.quiz.order().len(),
            question,
        });
        Ok(())
    }

    fn reveal(&mut self, result: &GuessResult) -> Result<()> {
        if result.is_correct {
            self.output.say(&Message::GuessCorrect);
        } else {
            self.output
                .say(&Message::GuessIncorrect(result.correct_option.clone()));
        }

        let question = self.quiz.current_question()?;
        self.output.say(&Message::AnswerReveal {
            explanation: question.explanation.clone(),
            reference: question.reference.clone(),
        });
        self.output.say(&Message::ScoreUpdate {
            score: self.quiz.score(),
            answered: self.quiz.answered_count(),
        });
        Ok(())
    }
}
