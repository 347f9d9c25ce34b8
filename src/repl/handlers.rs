//! Command handlers.
//!
//! Each handler is a plain function over the shared [`Context`]. It parses
//! its own arguments out of the already lower-cased line and returns the
//! reply text or a [`CommandError`]; rendering errors to text is the
//! dispatcher's job. Handlers never print.

use crate::book::AddressBook;
use crate::config::Config;
use crate::domain::{Birthday, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use crate::observability::CommandMetrics;

/// Greeting returned by `hello`.
pub const GREETING: &str = "How can I help you?";

/// Farewell returned by `good bye`, `close`, and `exit`. The loop compares
/// replies against this exact text to decide when to stop.
pub const FAREWELL: &str = "Good bye!";

/// Mutable state shared by all handlers: the book plus settings and the
/// session counters. Built once at startup and passed by reference; there
/// is no global state.
#[derive(Debug, Default)]
pub struct Context {
    pub book: AddressBook,
    pub config: Config,
    pub metrics: CommandMetrics,
}

impl Context {
    /// Create a context with an empty book.
    pub fn new(config: Config) -> Self {
        Self {
            book: AddressBook::new(),
            config,
            metrics: CommandMetrics::new(),
        }
    }
}

/// `hello`
pub fn hello(_ctx: &mut Context, _line: &str) -> CommandResult<String> {
    Ok(GREETING.to_string())
}

/// `add <name> <phone> [birthday]`
///
/// Creates a record, or replaces the whole record if the name already
/// exists (phones and birthday included). The replacement semantics are
/// inherited from the original system.
pub fn add(ctx: &mut Context, line: &str) -> CommandResult<String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let name = positional(&parts, 1, "name")?;
    let phone = PhoneNumber::new(positional(&parts, 2, "phone")?)?;

    let mut record = Record::new(name);
    record.add_phone(phone.clone());

    let reply = match parts.get(3) {
        Some(raw) => {
            let birthday = Birthday::new(raw)?;
            record.set_birthday(birthday);
            format!(
                "User {} with phone number {} and birthday {} was added",
                name, phone, birthday
            )
        }
        None => format!("User {} with phone number {} was added", name, phone),
    };

    ctx.book.add_record(record);
    Ok(reply)
}

/// `change <name> <token>...`
///
/// Tokens with a leading `+` are stripped of it, validated as phones, and
/// appended; every other token is validated as a birthday and overwrites
/// the record's birthday. A validation failure mid-line leaves the earlier
/// tokens applied.
pub fn change(ctx: &mut Context, line: &str) -> CommandResult<String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let name = positional(&parts, 1, "name")?;

    let record = ctx
        .book
        .get_mut(name)
        .ok_or_else(|| CommandError::UnknownContact(name.to_string()))?;

    for token in &parts[2..] {
        match token.strip_prefix('+') {
            Some(digits) => record.add_phone(PhoneNumber::new(digits)?),
            None => record.set_birthday(Birthday::new(token)?),
        }
    }

    Ok(format!("Contact {} updated", name))
}

/// `phone <name>` — the record's phones, one per line.
pub fn phone(ctx: &mut Context, line: &str) -> CommandResult<String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let name = positional(&parts, 1, "name")?;

    let record = ctx
        .book
        .get(name)
        .ok_or_else(|| CommandError::UnknownContact(name.to_string()))?;

    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    Ok(phones.join("\n"))
}

/// `show all` — every record, paginated internally at the configured page
/// size, flattened into one newline-joined listing.
pub fn show_all(ctx: &mut Context, _line: &str) -> CommandResult<String> {
    let mut lines = Vec::with_capacity(ctx.book.len());

    for page in ctx.book.pages(ctx.config.page_size) {
        for record in page {
            let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
            lines.push(format!("{}: {}", record.name(), phones.join(", ")));
        }
    }

    Ok(lines.join("\n"))
}

/// `good bye` / `close` / `exit`
pub fn farewell(_ctx: &mut Context, _line: &str) -> CommandResult<String> {
    Ok(FAREWELL.to_string())
}

/// Fetch the positional argument at `index`, or report it missing. The
/// reply text is the same regardless of which token is absent; `what` only
/// feeds diagnostics.
fn positional<'a>(parts: &[&'a str], index: usize, what: &'static str) -> CommandResult<&'a str> {
    parts
        .get(index)
        .copied()
        .ok_or(CommandError::MissingArgument(what))
}
