use inquire::{InquireError, Text};
use miette::Diagnostic;
use std::io::{self, BufRead, IsTerminal, Write};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("unable to read the answer from standard input")]
    #[diagnostic(code(brutal::prompt::io))]
    Io(#[from] io::Error),

    #[error("Error occurred trying to prompt user")]
    #[diagnostic(code(brutal::prompt::inquire))]
    Inquire(#[source] InquireError),
}

/// Asks the user a yes/no question.
///
/// Anything other than `y` (case-insensitive) is a no.
pub trait Confirmation {
    fn confirm(&mut self, question: &str) -> Result<bool, PromptError>;
}

fn accepts(answer: &str) -> bool {
    answer
        .trim_end_matches(|c| c == '\n' || c == '\r')
        .eq_ignore_ascii_case("y")
}

/// Reads a single line from `input` after writing the question to `output`.
pub struct LineConfirmation<R, W> {
    input: R,
    output: W,
}
impl<R: BufRead, W: Write> LineConfirmation<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}
impl<R: BufRead, W: Write> Confirmation for LineConfirmation<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        write!(self.output, "{} (y/n): ", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        // EOF leaves `answer` empty
        self.input.read_line(&mut answer)?;

        log::debug!("confirmation answer: {:?}", answer);

        Ok(accepts(&answer))
    }
}

/// Interactive prompt used when standard input is a terminal.
pub struct TerminalConfirmation;
impl Confirmation for TerminalConfirmation {
    fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        let answer = Text::new(question)
            .with_help_message("y to continue, anything else aborts")
            .with_placeholder("y/n")
            .prompt();

        match answer {
            Ok(answer) => Ok(accepts(&answer)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
            Err(error) => Err(PromptError::Inquire(error)),
        }
    }
}

/// Accepts without asking.
pub struct AssumeYes;
impl Confirmation for AssumeYes {
    fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        log::debug!("assuming yes for: {}", question);

        Ok(true)
    }
}

/// Picks the provider for this process: [`AssumeYes`] when asked to, an interactive
/// prompt on a terminal, and a plain line read otherwise (piped or scripted input).
pub fn from_stdin(assume_yes: bool) -> Box<dyn Confirmation> {
    if assume_yes {
        Box::new(AssumeYes)
    } else if io::stdin().is_terminal() {
        Box::new(TerminalConfirmation)
    } else {
        Box::new(LineConfirmation::new(io::stdin().lock(), io::stdout()))
    }
}
