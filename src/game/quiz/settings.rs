use anyhow::{anyhow, Context, Result};
use std::env::{self, VarError};
use std::str::FromStr;

const ENV_SEED: &'static str = "MCQ_QUIZ_SEED";
const ENV_EXPLANATION: &'static str = "MCQ_QUIZ_EXPLANATION";

/// How the parser decides which lines after `ANSWER:` form the explanation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExplanationPolicy {
    /// Only the line right after the answer, whatever it contains.
    NextLine,
    /// Every line up to the next `Reference:` line, question marker or end of input.
    UntilMarker,
}

impl Default for ExplanationPolicy {
    fn default() -> Self {
        ExplanationPolicy::UntilMarker
    }
}

impl FromStr for ExplanationPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_ref() {
            "next-line" => Ok(ExplanationPolicy::NextLine),
            "until-marker" => Ok(ExplanationPolicy::UntilMarker),
            other => Err(anyhow!(
                "Unknown explanation policy `{}` (expected next-line or until-marker)",
                other
            )),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub explanation_policy: ExplanationPolicy,
    pub seed: Option<u64>,
}

fn read_var(name: &str, value: std::result::Result<String, VarError>) -> Result<Option<String>> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(anyhow!("{} is not valid unicode", name)),
    }
}

impl Settings {
    pub fn from_env() -> Result<Settings> {
        let mut settings = Settings::default();
        if let Some(seed) = read_var(ENV_SEED, env::var(ENV_SEED))? {
            let seed = seed
                .trim()
                .parse()
                .with_context(|| format!("{} must be an unsigned integer", ENV_SEED))?;
            settings.seed = Some(seed);
        }
        if let Some(policy) = read_var(ENV_EXPLANATION, env::var(ENV_EXPLANATION))? {
            settings.explanation_policy = policy
                .parse()
                .with_context(|| format!("Invalid {}", ENV_EXPLANATION))?;
        }
        Ok(settings)
    }
}
