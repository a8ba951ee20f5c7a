/// One line typed by the user, parsed into an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `search <url>` — submit the URL to the scraping backend.
    Search(String),
    /// `filter <amount>` — set the minimum-salary threshold.
    Filter(u32),
    /// `email <address>` — set the report recipient.
    Email(String),
    /// `report` — email a report of the visible postings.
    Report,
    /// `list` — re-render the current view.
    List,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_line(line: &str) -> Command {
    let trimmed = line.trim();
    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (trimmed, ""),
    };

    match verb {
        "search" if !rest.is_empty() => Command::Search(rest.to_string()),
        "filter" => match rest.parse::<u32>() {
            Ok(amount) => Command::Filter(amount),
            Err(_) => Command::Unknown(trimmed.to_string()),
        },
        "email" if !rest.is_empty() => Command::Email(rest.to_string()),
        "report" => Command::Report,
        "list" => Command::List,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
