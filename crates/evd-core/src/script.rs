//! Line-oriented session scripts.
//!
//! Each non-blank line is one [`Command`]:
//!
//! ```text
//! # comments and blank lines are skipped
//! login admin@example.com admin123
//! signup "Jane Doe" jane@example.com secret [admin|user]
//! logout
//! whoami
//! navigate /dashboard
//! routes
//! add {"title":"Demo","date":"2024-03-01","time":"18:00","location":{...}}
//! update 5 {"attendees":12}
//! delete 5
//! rsvp 5 attending
//! rsvp-of 5
//! show 5
//! list | upcoming | past | stats
//! category Food & Drink
//! range 2024-01-01 2024-01-31
//! ```
//!
//! Parsing stops at the first malformed line.

use chrono::NaiveDate;
use thiserror::Error;

use crate::command::Command;
use crate::features::auth::{Role, UnknownRole};
use crate::features::events::{EventPatch, NewEvent, RsvpStatus};

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("'{0}' takes no further arguments")]
    UnexpectedArgument(&'static str),
    #[error("invalid event id '{0}'")]
    InvalidId(String),
    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("invalid event JSON: {0}")]
    InvalidJson(String),
    #[error(transparent)]
    InvalidRole(#[from] UnknownRole),
    #[error("unterminated quote")]
    UnterminatedQuote,
}

/// A parse failure, tagged with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ScriptError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// Parses a whole script into `(line number, command)` pairs.
pub fn parse_script(source: &str) -> Result<Vec<(usize, Command)>, ScriptError> {
    let mut commands = Vec::new();
    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        match parse_line(text) {
            Ok(Some(command)) => commands.push((line, command)),
            Ok(None) => {}
            Err(kind) => return Err(ScriptError { line, kind }),
        }
    }
    Ok(commands)
}

/// Parses one line. Blank lines and comments yield `None`.
pub fn parse_line(text: &str) -> Result<Option<Command>, ParseErrorKind> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = split_word(text);
    let command = match word {
        "login" => {
            let [email, password] = exact_args("login", rest, ["an email", "a password"])?;
            Command::Login { email, password }
        }
        "signup" => {
            let mut args = tokenize(rest)?.into_iter();
            let name = args.next().ok_or_else(|| missing("signup", "a name"))?;
            let email = args.next().ok_or_else(|| missing("signup", "an email"))?;
            let password = args.next().ok_or_else(|| missing("signup", "a password"))?;
            let role = match args.next() {
                Some(role) => role.parse::<Role>()?,
                None => Role::default(),
            };
            if args.next().is_some() {
                return Err(ParseErrorKind::UnexpectedArgument("signup"));
            }
            Command::Signup {
                name,
                email,
                password,
                role,
            }
        }
        "logout" => no_args("logout", rest, Command::Logout)?,
        "whoami" => no_args("whoami", rest, Command::WhoAmI)?,
        "routes" => no_args("routes", rest, Command::Routes)?,
        "navigate" => {
            let [path] = exact_args("navigate", rest, ["a path"])?;
            Command::Navigate { path }
        }
        "add" => {
            if rest.is_empty() {
                return Err(missing("add", "an event JSON object"));
            }
            let input: NewEvent = serde_json::from_str(rest)
                .map_err(|e| ParseErrorKind::InvalidJson(e.to_string()))?;
            Command::AddEvent(input)
        }
        "update" => {
            let (id, json) = split_word(rest);
            let id = parse_id("update", id)?;
            if json.is_empty() {
                return Err(missing("update", "a patch JSON object"));
            }
            let patch: EventPatch = serde_json::from_str(json)
                .map_err(|e| ParseErrorKind::InvalidJson(e.to_string()))?;
            Command::UpdateEvent { id, patch }
        }
        "delete" => Command::DeleteEvent {
            id: single_id("delete", rest)?,
        },
        "rsvp" => {
            let [id, status] = exact_args("rsvp", rest, ["an event id", "a status"])?;
            Command::Rsvp {
                event_id: parse_id("rsvp", &id)?,
                status: RsvpStatus::from(status),
            }
        }
        "rsvp-of" => Command::RsvpOf {
            event_id: single_id("rsvp-of", rest)?,
        },
        "show" => Command::Show {
            id: single_id("show", rest)?,
        },
        "list" => no_args("list", rest, Command::List)?,
        "upcoming" => no_args("upcoming", rest, Command::Upcoming)?,
        "past" => no_args("past", rest, Command::Past)?,
        "stats" => no_args("stats", rest, Command::Stats)?,
        "category" => {
            // Category names contain spaces; take the rest of the line.
            let name = unquote(rest);
            if name.is_empty() {
                return Err(missing("category", "a category name"));
            }
            Command::Category {
                name: name.to_string(),
            }
        }
        "range" => {
            let [start, end] = exact_args("range", rest, ["a start date", "an end date"])?;
            Command::Range {
                start: parse_date(&start)?,
                end: parse_date(&end)?,
            }
        }
        other => return Err(ParseErrorKind::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

fn missing(command: &'static str, argument: &'static str) -> ParseErrorKind {
    ParseErrorKind::MissingArgument { command, argument }
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(at) => (&text[..at], text[at..].trim()),
        None => (text, ""),
    }
}

fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}

fn no_args(command: &'static str, rest: &str, value: Command) -> Result<Command, ParseErrorKind> {
    if rest.is_empty() {
        Ok(value)
    } else {
        Err(ParseErrorKind::UnexpectedArgument(command))
    }
}

fn exact_args<const N: usize>(
    command: &'static str,
    rest: &str,
    names: [&'static str; N],
) -> Result<[String; N], ParseErrorKind> {
    let tokens = tokenize(rest)?;
    if tokens.len() > N {
        return Err(ParseErrorKind::UnexpectedArgument(command));
    }
    if let Some(name) = names.get(tokens.len()) {
        return Err(missing(command, name));
    }
    tokens
        .try_into()
        .map_err(|_tokens| ParseErrorKind::UnexpectedArgument(command))
}

fn single_id(command: &'static str, rest: &str) -> Result<i64, ParseErrorKind> {
    let [id] = exact_args(command, rest, ["an event id"])?;
    parse_id(command, &id)
}

fn parse_id(command: &'static str, text: &str) -> Result<i64, ParseErrorKind> {
    if text.is_empty() {
        return Err(missing(command, "an event id"));
    }
    text.parse()
        .map_err(|_err| ParseErrorKind::InvalidId(text.to_string()))
}

fn parse_date(text: &str) -> Result<NaiveDate, ParseErrorKind> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_err| ParseErrorKind::InvalidDate(text.to_string()))
}

/// Splits on whitespace; double quotes group words, `\"` and `\\` escape.
fn tokenize(text: &str) -> Result<Vec<String>, ParseErrorKind> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            '\\' if quoted => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quoted {
        return Err(ParseErrorKind::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
