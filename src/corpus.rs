use anyhow::{Context, Result};
use directories_next::BaseDirs;
use log::info;
use std::path::PathBuf;

use crate::game::quiz::definition::QuizDefinition;
use crate::game::quiz::settings::ExplanationPolicy;

const SAMPLE_CORPUS: &'static str = include_str!("../assets/sample_questions.txt");
const CORPUS_FILE_NAME: &'static str = "questions.txt";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CorpusSource {
    File(PathBuf),
    Embedded,
}

fn get_data_dir() -> Result<PathBuf> {
    let mut dir = BaseDirs::new()
        .context("could not locate system directories")?
        .data_dir()
        .to_path_buf();
    dir.push("mcq-quiz");
    Ok(dir)
}

/// An explicit path wins, then the user's data directory, then the built-in sample.
pub fn locate(path_argument: Option<String>) -> CorpusSource {
    if let Some(path) = path_argument {
        return CorpusSource::File(PathBuf::from(path));
    }
    if let Ok(mut path) = get_data_dir() {
        path.push(CORPUS_FILE_NAME);
        if path.exists() {
            return CorpusSource::File(path);
        }
    }
    CorpusSource::Embedded
}

pub fn load(source: &CorpusSource, policy: ExplanationPolicy) -> Result<QuizDefinition> {
    match source {
        CorpusSource::File(path) => {
            info!("Reading questions from {}", path.display());
            QuizDefinition::open(path, policy)
        }
        CorpusSource::Embedded => {
            info!("Using the built-in sample questions");
            Ok(QuizDefinition::parse(SAMPLE_CORPUS, policy))
        }
    }
}
