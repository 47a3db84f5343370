use std::str::FromStr;

use thiserror::Error;

use folio_core::catalog::UnknownCategory;
use folio_core::{CategoryFilter, View, ViewToggle};

/// One line typed into the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GoTo(View),
    Open(String),
    Next,
    Back,
    Category(CategoryFilter),
    Toggle(ViewToggle),
    Search(String),
    ResetFilters,
    Slide(SlideMove),
    Book { email: Option<String>, name: Option<String> },
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideMove {
    Next,
    Previous,
    Pause,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error(transparent)]
    Category(#[from] UnknownCategory),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "" => return Err(ParseCommandError::Empty),
            "home" => Command::GoTo(View::Home),
            "projects" => Command::GoTo(View::ProjectList),
            "about" => Command::GoTo(View::About),
            "contact" => Command::GoTo(View::Contact),
            "open" => Command::Open(required(rest, "open")?.to_string()),
            "next" => Command::Next,
            "back" => Command::Back,
            "category" => Command::Category(required(rest, "category")?.parse()?),
            "toggle" => {
                let toggle = required(rest, "toggle")?;
                match toggle.parse::<ViewToggle>() {
                    Ok(toggle) => Command::Toggle(toggle),
                    Err(never) => match never {},
                }
            }
            // Blank search clears the query
            "search" => Command::Search(rest.to_string()),
            "reset" => Command::ResetFilters,
            "slide" => match rest.to_ascii_lowercase().as_str() {
                "" | "next" => Command::Slide(SlideMove::Next),
                "prev" | "previous" => Command::Slide(SlideMove::Previous),
                "pause" | "play" => Command::Slide(SlideMove::Pause),
                other => return Err(ParseCommandError::Unknown(format!("slide {other}"))),
            },
            "book" => {
                let mut parts = rest.splitn(2, char::is_whitespace);
                let email = parts.next().filter(|s| !s.is_empty()).map(str::to_string);
                let name = parts
                    .next()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string);
                Command::Book { email, name }
            }
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ParseCommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, ParseCommandError> {
    if rest.is_empty() {
        Err(ParseCommandError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

pub const HELP: &str = "\
home | projects | about | contact     switch page
open <id>                             open a case study
next                                  next case study
back                                  back to projects
category <all|slug|label>             filter by category
toggle <povs|plans|elevations|grid|no-grid|tag>
search <text>                         filter by title, brand or agency
reset                                 clear all filters
slide [next|prev|pause]               move the home carousel
book [email] [name]                   print the booking link
quit";

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Category;

    #[test]
    fn test_parse_page_switches() {
        assert_eq!("projects".parse::<Command>().unwrap(), Command::GoTo(View::ProjectList));
        assert_eq!("  About ".parse::<Command>().unwrap(), Command::GoTo(View::About));
    }

    #[test]
    fn test_parse_open_requires_id() {
        assert_eq!("open 3".parse::<Command>().unwrap(), Command::Open("3".to_string()));
        assert_eq!(
            "open".parse::<Command>().unwrap_err(),
            ParseCommandError::MissingArgument("open")
        );
    }

    #[test]
    fn test_parse_category_accepts_label_with_spaces() {
        assert_eq!(
            "category Game/Entertainment IP".parse::<Command>().unwrap(),
            Command::Category(CategoryFilter::Only(Category::GameEntertainmentIp))
        );
        assert!(matches!(
            "category furniture".parse::<Command>(),
            Err(ParseCommandError::Category(_))
        ));
    }

    #[test]
    fn test_parse_toggle_and_search() {
        assert_eq!("toggle grid".parse::<Command>().unwrap(), Command::Toggle(ViewToggle::Grid));
        assert_eq!(
            "search sonic racing".parse::<Command>().unwrap(),
            Command::Search("sonic racing".to_string())
        );
        assert_eq!("search".parse::<Command>().unwrap(), Command::Search(String::new()));
    }

    #[test]
    fn test_parse_book_splits_email_and_name() {
        assert_eq!(
            "book ada@example.com Ada Lovelace".parse::<Command>().unwrap(),
            Command::Book {
                email: Some("ada@example.com".to_string()),
                name: Some("Ada Lovelace".to_string()),
            }
        );
        assert_eq!(
            "book".parse::<Command>().unwrap(),
            Command::Book { email: None, name: None }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty() {
        assert_eq!("".parse::<Command>().unwrap_err(), ParseCommandError::Empty);
        assert_eq!(
            "dance".parse::<Command>().unwrap_err(),
            ParseCommandError::Unknown("dance".to_string())
        );
    }
}
