use anyhow::Result;
use log::{error, info};
use std::env;
use std::io::{self, BufRead, Write};

mod commands;
mod corpus;
mod game;
mod output;

use crate::commands::Command;
use crate::game::quiz::settings::Settings;
use crate::game::Game;
use crate::output::terminal::TerminalOutput;

const HELP: &'static str = "Commands: <letter> or <number> to answer, or type the option text; next; restart; quit";

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

fn run() -> Result<()> {
    let settings = Settings::from_env()?;
    let source = corpus::locate(env::args().nth(1));
    let definition = corpus::load(&source, settings.explanation_policy)?;

    let mut game = Game::new(definition, &settings, TerminalOutput::new())?;
    game.begin()?;
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt()?;
            continue;
        }
        let result = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                println!("{}", HELP);
                Ok(())
            }
            Ok(Command::Next) => game.next(),
            Ok(Command::Restart) => game.restart(),
            Ok(Command::Option(index)) => game.answer_option(index).map(|_| ()),
            Ok(Command::Guess(text)) => game.answer(&text).map(|_| ()),
            Err(never) => match never {},
        };
        if let Err(e) = result {
            eprintln!("{}", e);
        }
        prompt()?;
    }

    let (score, total) = game.get_quiz().final_score();
    info!("Leaving with score {}/{}", score, total);
    Ok(())
}

fn main() {
    pretty_env_logger::init();
    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
