use std::str::FromStr;

use crate::game::quiz::definition::AnswerKey;

/// One line typed by the player.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Option(usize),
    Guess(String),
    Next,
    Restart,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let command = match input.to_lowercase().as_ref() {
            "next" => Command::Next,
            "restart" => Command::Restart,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => {
                if let Ok(key) = AnswerKey::parse(input) {
                    Command::Option(key.index())
                } else if let Ok(number) = input.parse::<usize>() {
                    match number.checked_sub(1) {
                        Some(index) => Command::Option(index),
                        None => Command::Guess(input.to_owned()),
                    }
                } else {
                    Command::Guess(input.to_owned())
                }
            }
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Command {
        input.parse().unwrap()
    }

    #[test]
    fn letters_and_numbers_select_options() {
        assert_eq!(parse("a"), Command::Option(0));
        assert_eq!(parse(" C "), Command::Option(2));
        assert_eq!(parse("2"), Command::Option(1));
    }

    #[test]
    fn keywords() {
        assert_eq!(parse("next"), Command::Next);
        assert_eq!(parse("NEXT"), Command::Next);
        assert_eq!(parse("restart"), Command::Restart);
        assert_eq!(parse("?"), Command::Help);
        assert_eq!(parse("quit"), Command::Quit);
    }

    #[test]
    fn single_letters_are_always_options() {
        assert_eq!(parse("H"), Command::Option(7));
        assert_eq!(parse("n"), Command::Option(13));
        assert_eq!(parse("Q"), Command::Option(16));
        assert_eq!(parse("r"), Command::Option(17));
    }

    #[test]
    fn anything_else_is_option_text() {
        assert_eq!(
            parse("The mass contains 12 separate cysts."),
            Command::Guess("The mass contains 12 separate cysts.".to_owned())
        );
        assert_eq!(parse("0"), Command::Guess("0".to_owned()));
    }
}
