//! Interactive play
//!
//! The player thinks of a five-letter word. The solver guesses, the player
//! replies with the number of letters the guess shares with the secret, and
//! once one anagram set is left the solver names its words one at a time.

use crate::output::formatters::format_links;
use crate::solver::Engine;
use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Outcome of one finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// The secret, or `None` if the solver ran out of words
    pub word: Option<String>,
    pub guesses: usize,
}

enum GameEnd {
    Finished(GameRecord),
    Restart,
    Quit,
}

/// Run games until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure or if the engine has no tree loaded.
pub fn run_play<R: BufRead, W: Write>(
    engine: &mut Engine,
    mut input: R,
    mut output: W,
) -> Result<Vec<GameRecord>> {
    writeln!(output, "\n{}", "═".repeat(62).bright_cyan())?;
    writeln!(output, "{}", "  Jotto Solver - Interactive Mode".bright_cyan().bold())?;
    writeln!(output, "{}\n", "═".repeat(62).bright_cyan())?;
    writeln!(output, "Think of a five-letter word and I'll try to find it.")?;
    writeln!(output, "After each guess, enter how many letters it shares with your word.")?;
    writeln!(output, "Type 'yes' if I guessed your word exactly.\n")?;
    writeln!(output, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last reply\n")?;

    let mut records = Vec::new();

    loop {
        engine.restart()?;
        match play_game(engine, &mut input, &mut output)? {
            GameEnd::Quit => break,
            GameEnd::Restart => writeln!(output, "\nNew game started!\n")?,
            GameEnd::Finished(record) => {
                report(&record, &mut output)?;
                records.push(record);

                let again = prompt(&mut input, &mut output, "Play again? (yes/no)")?;
                if !matches!(again.as_deref(), Some("yes" | "y")) {
                    break;
                }
                writeln!(output, "\nNew game started!\n")?;
            }
        }
    }

    writeln!(output, "\nThanks for playing!\n")?;
    Ok(records)
}

fn play_game<R: BufRead, W: Write>(
    engine: &mut Engine,
    input: &mut R,
    output: &mut W,
) -> Result<GameEnd> {
    'turns: loop {
        if let Some(anagrams) = engine.current_anagrams()? {
            let anagrams = anagrams.to_vec();
            match offer_anagrams(engine, &anagrams, input, output)? {
                Some(end) => return Ok(end),
                None => continue 'turns,
            }
        }

        let Some(guess) = engine.current_guess()? else {
            bail!("decision tree node has neither a guess nor anagrams");
        };
        let turn = engine.replies()? + 1;
        let links = engine.active_links()?;

        writeln!(output, "{}", "─".repeat(62))?;
        writeln!(
            output,
            "Turn {turn}: my guess is {}",
            guess.to_uppercase().bright_yellow().bold()
        )?;
        writeln!(output, "  Possible replies: {}", format_links(&links))?;

        loop {
            let Some(reply) = prompt(input, output, "Letters in common (0-5, 'yes', or command)")?
            else {
                return Ok(GameEnd::Quit);
            };

            match reply.as_str() {
                "quit" | "q" | "exit" => return Ok(GameEnd::Quit),
                "new" | "n" => return Ok(GameEnd::Restart),
                "undo" | "u" => {
                    if engine.undo()? {
                        writeln!(output, "Undone! Back to turn {}\n", turn - 1)?;
                        continue 'turns;
                    }
                    writeln!(output, "Nothing to undo!\n")?;
                }
                "yes" | "y" | "win" => {
                    return Ok(GameEnd::Finished(GameRecord {
                        word: Some(guess),
                        guesses: turn,
                    }));
                }
                other => match other.parse::<u8>() {
                    Ok(matches) if links.get(usize::from(matches)) == Some(&true) => {
                        engine.submit_match(i32::from(matches))?;
                        continue 'turns;
                    }
                    Ok(matches) if usize::from(matches) < links.len() => {
                        writeln!(
                            output,
                            "No word in my dictionary shares {matches} letters with {}\n",
                            guess.to_uppercase()
                        )?;
                    }
                    _ => writeln!(output, "Invalid reply! Enter a number from 0 to 5\n")?,
                },
            }
        }
    }
}

/// Name the remaining anagrams in turn; `None` means the player undid a reply
fn offer_anagrams<R: BufRead, W: Write>(
    engine: &mut Engine,
    anagrams: &[String],
    input: &mut R,
    output: &mut W,
) -> Result<Option<GameEnd>> {
    let replies = engine.replies()?;
    if anagrams.len() > 1 {
        writeln!(output, "Your word is one of {} anagrams.", anagrams.len())?;
    }

    for (idx, word) in anagrams.iter().enumerate() {
        loop {
            let question = format!("Is it your word? {} (yes/no)", word.to_uppercase());
            let Some(answer) = prompt(input, output, &question)? else {
                return Ok(Some(GameEnd::Quit));
            };

            match answer.as_str() {
                "yes" | "y" => {
                    return Ok(Some(GameEnd::Finished(GameRecord {
                        word: Some(word.clone()),
                        guesses: replies + idx + 1,
                    })));
                }
                "no" | "n" => break,
                "quit" | "q" | "exit" => return Ok(Some(GameEnd::Quit)),
                "new" => return Ok(Some(GameEnd::Restart)),
                "undo" | "u" => {
                    if engine.undo()? {
                        writeln!(output, "Undone! Back to turn {replies}\n")?;
                        return Ok(None);
                    }
                    writeln!(output, "Nothing to undo!\n")?;
                }
                _ => writeln!(output, "Please answer yes or no")?,
            }
        }
    }

    Ok(Some(GameEnd::Finished(GameRecord {
        word: None,
        guesses: replies + anagrams.len(),
    })))
}

fn report<W: Write>(record: &GameRecord, output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    match &record.word {
        Some(word) => writeln!(
            output,
            "{}",
            format!(
                "Got it! Your word is {} ({} {})",
                word.to_uppercase(),
                record.guesses,
                if record.guesses == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        ),
        None => writeln!(
            output,
            "{}",
            "I give up! Your word is not in my dictionary, or a reply was wrong."
                .red()
                .bold()
        ),
    }
}

/// Prompt and read one trimmed, lowercased line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{text}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::solver::SolvePath;
    use std::io::Cursor;

    fn toy_engine() -> Engine {
        let dict = Dictionary::from_words(["apple", "angle", "angel", "crane", "trace"]).unwrap();
        Engine::from_dictionary(&dict).unwrap().with_seed(3)
    }

    fn play(engine: &mut Engine, script: &str) -> (Vec<GameRecord>, String) {
        let mut out = Vec::new();
        let records = run_play(engine, Cursor::new(script.to_string()), &mut out).unwrap();
        (records, String::from_utf8(out).unwrap())
    }

    /// Truthful replies for a solve path, then decline another game
    fn script_for(path: &SolvePath) -> String {
        let mut lines = Vec::new();
        if let Some(turn) = path.steps.iter().position(|step| step.guess == path.target) {
            lines.extend(path.steps[..turn].iter().map(|step| step.matches.to_string()));
            lines.push("yes".to_string());
        } else {
            lines.extend(path.steps.iter().map(|step| step.matches.to_string()));
            for word in &path.anagrams {
                let found = *word == path.target;
                lines.push(if found { "y" } else { "n" }.to_string());
                if found {
                    break;
                }
            }
        }
        lines.push("no".to_string());
        lines.join("\n")
    }

    #[test]
    fn truthful_replies_find_the_word() {
        // Singleton classes only, so a random guess is always the representative
        for target in ["apple", "crane", "trace"] {
            let mut engine = toy_engine();
            let path = engine.solve(target).unwrap();
            let (records, _) = play(&mut engine, &script_for(&path));

            assert_eq!(
                records,
                [GameRecord {
                    word: Some(target.to_string()),
                    guesses: path.guess_count(),
                }]
            );
        }
    }

    #[test]
    fn anagrams_are_offered_in_turn() {
        let dict = Dictionary::from_words(["angle", "angel"]).unwrap();
        let mut engine = Engine::from_dictionary(&dict).unwrap();
        let (records, out) = play(&mut engine, "n\ny\nno\n");

        assert!(out.contains("one of 2 anagrams"));
        assert_eq!(
            records,
            [GameRecord {
                word: Some("angel".to_string()),
                guesses: 2,
            }]
        );
    }

    #[test]
    fn exhausted_anagrams_give_up() {
        let dict = Dictionary::from_words(["angle", "angel"]).unwrap();
        let mut engine = Engine::from_dictionary(&dict).unwrap();
        let (records, out) = play(&mut engine, "no\nno\nno\n");

        assert!(out.contains("I give up"));
        assert_eq!(records, [GameRecord { word: None, guesses: 2 }]);
    }

    #[test]
    fn impossible_reply_is_refused() {
        let mut engine = toy_engine();
        let links = engine.active_links().unwrap();
        let missing = links.iter().position(|&active| !active).unwrap();

        let (records, out) = play(&mut engine, &format!("{missing}\n9\nquit\n"));
        assert!(out.contains("No word in my dictionary"));
        assert!(out.contains("Invalid reply"));
        assert!(records.is_empty());
        assert_eq!(engine.replies().unwrap(), 0);
    }

    #[test]
    fn undo_steps_back_a_turn() {
        let mut engine = toy_engine();
        let links = engine.active_links().unwrap();
        let first = links.iter().position(|&active| active).unwrap();

        let (_, out) = play(&mut engine, &format!("undo\n{first}\nundo\nquit\n"));
        assert!(out.contains("Nothing to undo"));
        assert!(out.contains("Back to turn 1"));
        assert_eq!(engine.replies().unwrap(), 0);
    }

    #[test]
    fn new_game_and_end_of_input() {
        let mut engine = toy_engine();
        let (records, out) = play(&mut engine, "new\n");

        assert!(out.contains("New game started"));
        assert!(out.contains("Thanks for playing"));
        assert!(records.is_empty());
    }

    #[test]
    fn yes_ends_the_game_on_the_current_turn() {
        let mut engine = toy_engine();
        // Win, accept another game, win again, then decline
        let (records, out) = play(&mut engine, "yes\nyes\nyes\nno\n");

        assert_eq!(records.len(), 2);
        assert_eq!(out.matches("Play again?").count(), 2);
        assert!(records.iter().all(|record| record.guesses == 1));
    }

    #[test]
    fn uninitialized_engine_fails() {
        let mut out = Vec::new();
        let result = run_play(&mut Engine::new(), Cursor::new(String::new()), &mut out);
        assert!(result.is_err());
    }
}
