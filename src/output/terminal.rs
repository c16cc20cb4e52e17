use crate::game::quiz::definition::{AnswerKey, Question};
use crate::output::{Message, QuizOutput};

const NO_EXPLANATION: &'static str = "No explanation provided.";
const NO_REFERENCE: &'static str = "No reference provided.";

#[derive(Clone, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        TerminalOutput
    }

    fn interpret_question(&self, number: usize, total: usize, question: &Question) -> String {
        let mut text = format!("\n📝 Question {} of {}\n{}\n", number, total, question.prompt);
        for (index, option) in question.options.iter().enumerate() {
            let label = AnswerKey::for_index(index)
                .map(|k| k.letter().to_string())
                .unwrap_or_else(|| (index + 1).to_string());
            text += &format!("  {}) {}\n", label, option);
        }
        text + "Select your answer:"
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            QuizRules(total) => format!("🩺 MCQ Quiz: {} questions in random order.\nType an option letter (or its text) to answer, `next` to continue, `restart` to start over and `quit` to leave.", total),
            QuestionBegins { number, total, question } => self.interpret_question(*number, *total, question),
            GuessCorrect => "✅ Correct!".into(),
            GuessIncorrect(correct_option) => format!("❌ Incorrect. Correct answer: {}", correct_option),
            AnswerReveal { explanation, reference } => {
                let explanation = if explanation.is_empty() { NO_EXPLANATION } else { explanation.as_str() };
                let reference = if reference.is_empty() { NO_REFERENCE } else { reference.as_str() };
                format!("Explanation: {}\nReference: {}\nType `next` for the next question.", explanation, reference)
            }
            ScoreUpdate { score, answered } => format!("📈 Current score: {}/{}", score, answered),
            QuizResults { score, total } => format!("🎊 Quiz completed! Your final score: {} / {}\nType `restart` to play again or `quit` to leave.", score, total),
            QuestionsRejected(records) => {
                let mut message = format!("⚠️ {} question(s) could not be read and were skipped:", records.len());
                for record in records {
                    let name = record
                        .number
                        .map(|n| format!("Question {}", n))
                        .unwrap_or_else(|| "Unnumbered question".to_owned());
                    message += &format!("\n- {} (line {}): {}", name, record.line, record.reason);
                }
                message
            }
        }
    }
}

impl QuizOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        println!("{}", self.interpret_message(message));
    }
}
