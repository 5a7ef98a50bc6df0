//! Interactive loop with the same verbs as the one-shot commands.
//!
//! This is the analog of the original's long-lived page: one application
//! instance lives across commands, so the saved panel and notices carry
//! state from action to action.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use namecast::client::Gender;
use namecast::config::Config;

use super::commands::{build_app, print_entries, CliApp};

pub(crate) async fn run_repl(config: &Config) -> Result<()> {
    let mut app = build_app(config);
    let mut editor = DefaultEditor::new()?;
    let history_path = Config::dir().join("history.txt");
    let _ = editor.load_history(&history_path);

    println!("namecast interactive");
    println!("commands: lookup NAME | save NAME male|female | clear NAME | saved [NAME] | quit");

    loop {
        match editor.readline("namecast> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                if !dispatch(&mut app, line).await {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    let _ = editor.save_history(&history_path);
    Ok(())
}

/// Handle one line. Returns `false` when the loop should exit.
async fn dispatch(app: &mut CliApp, line: &str) -> bool {
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "quit" | "exit" => return false,
        "lookup" => {
            app.submit(rest).await;
        }
        "save" => match parse_save_args(rest) {
            Ok((name, gender)) => {
                app.save(name, gender);
            }
            Err(usage) => println!("{}", usage),
        },
        "clear" => {
            app.clear(rest);
        }
        "saved" => {
            if rest.is_empty() {
                print_entries(&app.saved_entries());
            } else {
                app.show_saved(rest);
            }
        }
        other => println!(
            "Unknown command '{}'. Commands: lookup, save, clear, saved, quit.",
            other
        ),
    }
    true
}

/// Split `save` arguments: the gender is the last token, the name is
/// everything before it (names may contain spaces).
fn parse_save_args(rest: &str) -> Result<(&str, Gender), String> {
    let Some((name, gender)) = rest.rsplit_once(char::is_whitespace) else {
        return Err("Usage: save NAME male|female".to_string());
    };
    let gender = gender.parse::<Gender>().map_err(|e| e.to_string())?;
    Ok((name.trim_end(), gender))
}
