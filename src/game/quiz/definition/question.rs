use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref QUESTION_MARKER_REGEX: Regex = Regex::new(r"(?i)^question\s+(\d+)").unwrap();
    static ref ANSWER_REGEX: Regex = Regex::new(r"(?i)^answer:\s*(\w*)").unwrap();
    static ref REFERENCE_REGEX: Regex = Regex::new(r"(?i)^reference:\s*(.*)$").unwrap();
}

const ANSWER_KEYS: &'static str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// What a single trimmed corpus line means to the parser.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line<'a> {
    Blank,
    QuestionMarker(Option<u32>),
    Answer(&'a str),
    Reference(&'a str),
    Text(&'a str),
}

impl<'a> Line<'a> {
    pub fn classify(line: &'a str) -> Line<'a> {
        if line.is_empty() {
            return Line::Blank;
        }
        if let Some(captures) = QUESTION_MARKER_REGEX.captures(line) {
            let number = captures.get(1).and_then(|m| m.as_str().parse().ok());
            return Line::QuestionMarker(number);
        }
        if let Some(captures) = ANSWER_REGEX.captures(line) {
            let key = captures.get(1).map_or("", |m| m.as_str().trim());
            return Line::Answer(key);
        }
        if let Some(captures) = REFERENCE_REGEX.captures(line) {
            let reference = captures.get(1).map_or("", |m| m.as_str().trim());
            return Line::Reference(reference);
        }
        Line::Text(line)
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum AnswerKeyError {
    #[error("`{0}` is not an answer letter")]
    NotALetter(String),
    #[error("answer {key} is out of range for {options} options")]
    OutOfRange { key: char, options: usize },
}

/// Letter answer key (A, B, C...) resolved to a zero-based option index.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AnswerKey {
    letter: char,
    index: usize,
}

impl AnswerKey {
    pub fn parse(key: &str) -> Result<AnswerKey, AnswerKeyError> {
        let mut chars = key.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_ascii_uppercase(),
            _ => return Err(AnswerKeyError::NotALetter(key.to_owned())),
        };
        let index = ANSWER_KEYS
            .find(letter)
            .ok_or_else(|| AnswerKeyError::NotALetter(key.to_owned()))?;
        Ok(AnswerKey { letter, index })
    }

    pub fn for_index(index: usize) -> Option<AnswerKey> {
        ANSWER_KEYS
            .chars()
            .nth(index)
            .map(|letter| AnswerKey { letter, index })
    }

    pub fn resolve(&self, options: &[String]) -> Result<usize, AnswerKeyError> {
        if self.index < options.len() {
            Ok(self.index)
        } else {
            Err(AnswerKeyError::OutOfRange {
                key: self.letter,
                options: options.len(),
            })
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub number: Option<u32>,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
    pub reference: String,
}

impl Question {
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    pub fn is_option_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }

    /// Compares by option text. Duplicate option texts are indistinguishable here.
    pub fn is_guess_correct(&self, guess: &str) -> bool {
        self.correct_option() == guess
    }

    pub fn option_index(&self, guess: &str) -> Option<usize> {
        self.options.iter().position(|o| o == guess)
    }
}
