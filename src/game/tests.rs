use super::*;

use crate::game::quiz::settings::ExplanationPolicy;
use crate::game::quiz::QuizError;
use crate::output::mock::MockQuizOutput;

const CORPUS: &'static str = "
QUESTION 1
Which organ makes insulin?
Pancreas
Liver
ANSWER: A
Beta cells of the islets of Langerhans.
Reference: Physiology, p 12

QUESTION 2
Which bone is in the thigh?
Femur
Tibia
Ulna
ANSWER: A
Reference: Anatomy, p 3
";

struct Context {
    game: Game<MockQuizOutput>,
    output: MockQuizOutput,
}

fn build(corpus: &str) -> Result<Context> {
    let output = MockQuizOutput::new();
    let definition = QuizDefinition::parse(corpus, ExplanationPolicy::UntilMarker);
    let settings = Settings {
        seed: Some(5),
        ..Default::default()
    };
    let game = Game::new(definition, &settings, output.clone())?;
    Ok(Context { game, output })
}

#[test]
fn begin_announces_rules_and_first_question() {
    let mut ctx = build(CORPUS).unwrap();
    ctx.game.begin().unwrap();
    let question = ctx.game.get_quiz().current_question().unwrap().clone();
    assert_eq!(
        ctx.output.flush(),
        vec![
            Message::QuizRules(2),
            Message::QuestionBegins {
                number: 1,
                total: 2,
                question,
            },
        ]
    );
}

#[test]
fn correct_answer_is_narrated() {
    let mut ctx = build(CORPUS).unwrap();
    ctx.game.begin().unwrap();
    ctx.output.flush();

    let question = ctx.game.get_quiz().current_question().unwrap().clone();
    let result = ctx.game.answer(question.correct_option()).unwrap();
    assert!(result.is_correct);
    assert_eq!(
        ctx.output.flush(),
        vec![
            Message::GuessCorrect,
            Message::AnswerReveal {
                explanation: question.explanation.clone(),
                reference: question.reference.clone(),
            },
            Message::ScoreUpdate {
                score: 1,
                answered: 1,
            },
        ]
    );
}

#[test]
fn incorrect_answer_reveals_correct_option() {
    let mut ctx = build(CORPUS).unwrap();
    ctx.game.begin().unwrap();
    ctx.game.answer_option(1).unwrap();
    let question = ctx.game.get_quiz().current_question().unwrap();
    assert!(ctx
        .output
        .contains_message(&Message::GuessIncorrect(question.correct_option().to_owned())));
    assert!(ctx.output.contains_message(&Message::ScoreUpdate {
        score: 0,
        answered: 1,
    }));
}

#[test]
fn session_errors_reach_the_caller() {
    let mut ctx = build(CORPUS).unwrap();
    ctx.game.begin().unwrap();

    let error = ctx.game.next().unwrap_err();
    assert_eq!(
        error.downcast_ref::<QuizError>(),
        Some(&QuizError::NotYetAnswered)
    );

    ctx.game.answer_option(0).unwrap();
    let error = ctx.game.answer_option(0).unwrap_err();
    assert_eq!(
        error.downcast_ref::<QuizError>(),
        Some(&QuizError::AlreadyAnswered)
    );
}

#[test]
fn announces_results_after_last_question() {
    let mut ctx = build(CORPUS).unwrap();
    ctx.game.begin().unwrap();
    for _ in 0..2 {
        ctx.game.answer_option(0).unwrap();
        ctx.game.next().unwrap();
    }
    assert!(ctx.game.is_over());
    assert_eq!(
        ctx.output.last_message(),
        Some(Message::QuizResults { score: 2, total: 2 })
    );
}

#[test]
fn restart_announces_first_question_again() {
    let mut ctx = build(CORPUS).unwrap();
    ctx.game.begin().unwrap();
    for _ in 0..2 {
        ctx.game.answer_option(1).unwrap();
        ctx.game.next().unwrap();
    }
    ctx.output.flush();

    ctx.game.restart().unwrap();
    assert!(!ctx.game.is_over());
    let question = ctx.game.get_quiz().current_question().unwrap().clone();
    assert_eq!(
        ctx.output.flush(),
        vec![Message::QuestionBegins {
            number: 1,
            total: 2,
            question,
        }]
    );
}

#[test]
fn reports_rejected_records() {
    let corpus = format!("{}\nQUESTION 3\nWhich?\nyes\nno\nANSWER: D\n", CORPUS);
    let ctx = build(&corpus).unwrap();
    let rejected = match ctx.output.flush().first() {
        Some(Message::QuestionsRejected(records)) => records.clone(),
        other => panic!("Unexpected message: {:?}", other),
    };
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].number, Some(3));
    assert_eq!(ctx.game.get_quiz().questions().len(), 2);
}

#[test]
fn refuses_corpus_without_questions() {
    let error = build("QUESTION 1\nWhich?\nyes\nANSWER: A\n").err().unwrap();
    assert_eq!(
        error.downcast_ref::<QuizError>(),
        Some(&QuizError::EmptyQuestionSet)
    );
}
