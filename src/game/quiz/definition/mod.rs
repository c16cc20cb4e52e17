use anyhow::{Context, Result};
use itertools::Itertools;
use log::{debug, warn};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::game::quiz::settings::ExplanationPolicy;

pub mod question;

pub use question::{AnswerKey, AnswerKeyError, Question};
use question::Line;


#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum MalformedReason {
    #[error("no question prompt")]
    MissingPrompt,
    #[error("only {0} option(s), at least 2 are required")]
    TooFewOptions(usize),
    #[error("no ANSWER line")]
    MissingAnswer,
    #[error(transparent)]
    AnswerKey(#[from] AnswerKeyError),
}

/// A question block that was dropped from the usable set.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("malformed record starting at line {line}: {reason}")]
pub struct MalformedRecord {
    pub number: Option<u32>,
    pub line: usize,
    pub reason: MalformedReason,
}

#[derive(Debug)]
struct RecordBuilder {
    number: Option<u32>,
    line: usize,
    prompt: Option<String>,
    options: Vec<String>,
    answer: Option<String>,
    explanation: Vec<String>,
    capturing_explanation: bool,
    reference: String,
}

impl RecordBuilder {
    fn new(number: Option<u32>, line: usize) -> Self {
        RecordBuilder {
            number,
            line,
            prompt: None,
            options: Vec::new(),
            answer: None,
            explanation: Vec::new(),
            capturing_explanation: false,
            reference: String::new(),
        }
    }

    fn push_text(&mut self, text: &str) {
        if self.answer.is_some() {
            if self.capturing_explanation {
                self.explanation.push(text.to_owned());
            } else {
                debug!("Ignoring trailing line in record at line {}: {}", self.line, text);
            }
        } else if self.prompt.is_none() {
            self.prompt = Some(text.to_owned());
        } else {
            self.options.push(text.to_owned());
        }
    }

    fn build(self) -> Result<Question, MalformedRecord> {
        let number = self.number;
        let line = self.line;
        let malformed = |reason: MalformedReason| MalformedRecord {
            number,
            line,
            reason,
        };

        let prompt = self
            .prompt
            .ok_or_else(|| malformed(MalformedReason::MissingPrompt))?;
        if self.options.len() < 2 {
            return Err(malformed(MalformedReason::TooFewOptions(self.options.len())));
        }
        let answer = self
            .answer
            .ok_or_else(|| malformed(MalformedReason::MissingAnswer))?;
        let options = self.options;
        let correct_index = AnswerKey::parse(&answer)
            .and_then(|key| key.resolve(&options))
            .map_err(|e| malformed(e.into()))?;

        Ok(Question {
            number,
            prompt,
            options,
            correct_index,
            explanation: self.explanation.iter().join(" "),
            reference: self.reference,
        })
    }
}

#[derive(Debug, Default)]
pub struct QuizDefinition {
    questions: Vec<Question>,
    rejected: Vec<MalformedRecord>,
}

impl QuizDefinition {
    pub fn open(source: &Path, policy: ExplanationPolicy) -> Result<QuizDefinition> {
        let text = fs::read_to_string(source)
            .with_context(|| format!("Could not read question corpus {}", source.display()))?;
        Ok(QuizDefinition::parse(&text, policy))
    }

    /// Malformed records never abort the parse, they are collected in `get_rejected`.
    pub fn parse(text: &str, policy: ExplanationPolicy) -> QuizDefinition {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let mut definition = QuizDefinition::default();
        let mut current: Option<RecordBuilder> = None;

        for (index, raw_line) in lines.iter().enumerate() {
            let line = Line::classify(raw_line);

            if let Line::QuestionMarker(number) = line {
                if let Some(record) = current.take() {
                    definition.push(record);
                }
                current = Some(RecordBuilder::new(number, index + 1));
                continue;
            }

            let record = match current.as_mut() {
                Some(record) => record,
                None => {
                    if line != Line::Blank {
                        debug!("Ignoring line {} outside of any question", index + 1);
                    }
                    continue;
                }
            };

            match line {
                Line::Blank | Line::QuestionMarker(_) => (),
                Line::Answer(key) => {
                    if record.answer.is_some() && record.capturing_explanation {
                        record.push_text(raw_line);
                        continue;
                    }
                    if record.answer.is_some() {
                        warn!(
                            "Ignoring extra ANSWER line {} in record starting at line {}",
                            index + 1,
                            record.line
                        );
                        continue;
                    }
                    record.answer = Some(key.to_owned());
                    match policy {
                        ExplanationPolicy::NextLine => {
                            if let Some(next) = lines.get(index + 1) {
                                record.explanation = vec![next.to_string()];
                            }
                        }
                        ExplanationPolicy::UntilMarker => {
                            record.capturing_explanation = true;
                        }
                    }
                }
                Line::Reference(reference) => {
                    record.reference = reference.to_owned();
                    record.capturing_explanation = false;
                }
                Line::Text(text) => record.push_text(text),
            }
        }

        if let Some(record) = current.take() {
            definition.push(record);
        }

        debug!(
            "Parsed {} questions, rejected {} records",
            definition.questions.len(),
            definition.rejected.len()
        );
        definition
    }

    fn push(&mut self, record: RecordBuilder) {
        match record.build() {
            Ok(question) => self.questions.push(question),
            Err(malformed) => {
                warn!("Dropping question: {}", malformed);
                self.rejected.push(malformed);
            }
        }
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub fn get_rejected(&self) -> &Vec<MalformedRecord> {
        &self.rejected
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}
