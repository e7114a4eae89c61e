use thiserror::Error;

/// Commands accepted in command mode (`:next`, `:step 3`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Back,
    Step(u8),
    Skip,
    Finish,
    Analytics(Option<bool>),
    Language(String),
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Invalid argument for {command}: {arg}")]
    InvalidArgument { command: String, arg: String },
}

pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let arg = parts.next().map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

    let invalid = |arg: String| CommandError::InvalidArgument {
        command: cmd.to_string(),
        arg,
    };

    match cmd {
        "next" | "n" => Ok(Command::Next),
        "back" | "b" | "prev" => Ok(Command::Back),
        "step" | "s" => {
            let arg = arg.ok_or_else(|| invalid(String::new()))?;
            arg.parse::<u8>().map(Command::Step).map_err(|_| invalid(arg))
        }
        "skip" => Ok(Command::Skip),
        "finish" | "done" => Ok(Command::Finish),
        "analytics" => match arg.as_deref() {
            None => Ok(Command::Analytics(None)),
            Some("on") | Some("true") => Ok(Command::Analytics(Some(true))),
            Some("off") | Some("false") => Ok(Command::Analytics(Some(false))),
            Some(other) => Err(invalid(other.to_string())),
        },
        "lang" | "language" => arg.map(Command::Language).ok_or_else(|| invalid(String::new())),
        "help" | "h" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "" => Err(CommandError::Unknown("empty command".to_string())),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}
