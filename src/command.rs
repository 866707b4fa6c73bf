use core::str::FromStr;
use thiserror::Error;
use crate::util::ordinal_to_index;
use crate::util::stat::StatKind;

/// One line typed into the console. Player positions are stored 0-based; the
/// user types 1-based ordinals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove(usize),
    Rename(usize, String),
    Stat(usize, String),
    SubIn(usize),
    SubOut(usize),
    BoxScore,
    Log,
    Json,
    Copy,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("'{0}' needs a player number")]
    MissingPlayer(&'static str),
    #[error("'{0}' is not a player number (players start at 1)")]
    BadPlayer(String),
    #[error("'{0}' needs {1}")]
    MissingArgument(&'static str, &'static str),
}

pub const HELP: &str = "\
add                 add a player
remove N            remove player N
rename N NAME       rename player N
stat N KIND         record KIND for player N (label like 'FG Made' or code like FGM)
in N / out N        substitute player N in or out
box                 show the box score
log                 show the event log
json                show the roster as JSON
copy                copy the box score and log to the clipboard
help                show this list
quit                end the session";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (head, rest) = s.split_once(char::is_whitespace).map_or((s, ""), |(head, rest)| (head, rest.trim()));
        match head.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "add" => Ok(Self::Add),
            "remove" | "rm" => Ok(Self::Remove(player("remove", rest)?.0)),
            "rename" => {
                let (index, name) = player("rename", rest)?;
                if name.is_empty() {
                    return Err(CommandError::MissingArgument("rename", "a name"));
                }
                Ok(Self::Rename(index, name.to_owned()))
            }
            "stat" | "s" => {
                let (index, kind) = player("stat", rest)?;
                if kind.is_empty() {
                    return Err(CommandError::MissingArgument("stat", "a stat kind"));
                }
                Ok(Self::Stat(index, stat_label(kind)))
            }
            "in" => Ok(Self::SubIn(player("in", rest)?.0)),
            "out" => Ok(Self::SubOut(player("out", rest)?.0)),
            "box" => Ok(Self::BoxScore),
            "log" => Ok(Self::Log),
            "json" => Ok(Self::Json),
            "copy" => Ok(Self::Copy),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(head.to_owned())),
        }
    }
}

/// Splits the leading player ordinal off `rest`, returning the position and what follows.
fn player<'a>(command: &'static str, rest: &'a str) -> Result<(usize, &'a str), CommandError> {
    let (ordinal, tail) = rest.split_once(char::is_whitespace).map_or((rest, ""), |(ordinal, tail)| (ordinal, tail.trim()));
    if ordinal.is_empty() {
        return Err(CommandError::MissingPlayer(command));
    }
    let index = ordinal
        .parse::<usize>()
        .ok()
        .and_then(ordinal_to_index)
        .ok_or_else(|| CommandError::BadPlayer(ordinal.to_owned()))?;
    Ok((index, tail))
}

/// Recognized kinds are normalized to their canonical label; anything else is kept as typed.
fn stat_label(kind: &str) -> String {
    StatKind::from_str(kind).map_or_else(|_| kind.to_owned(), |kind| kind.label().to_owned())
}
