use thiserror::Error;

use crate::view::ViewState;

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    Unknown(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Search(String),
    StockOnly(Option<bool>), // None toggles the current flag
    Reset,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let Some(control) = line.strip_prefix(':') else {
            return Ok(Self::Search(line.to_string()));
        };

        let mut words = control.split_whitespace();
        match (words.next(), words.next()) {
            (Some("stock"), None) => Ok(Self::StockOnly(None)),
            (Some("stock"), Some("on")) => Ok(Self::StockOnly(Some(true))),
            (Some("stock"), Some("off")) => Ok(Self::StockOnly(Some(false))),
            (Some("reset"), None) => Ok(Self::Reset),
            (Some("quit"), None) => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(line.to_string())),
        }
    }

    pub fn apply(self, view: ViewState) -> ViewState {
        match self {
            Self::Search(text) => view.with_search(text),
            Self::StockOnly(Some(flag)) => view.with_stock_only(flag),
            Self::StockOnly(None) => {
                let toggled = !view.only_in_stock;
                view.with_stock_only(toggled)
            }
            Self::Reset => ViewState::default(),
            Self::Quit => view,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::command::{Command, CommandError};
    use crate::view::ViewState;

    #[test]
    fn test_parse() {
        assert_eq!(
            Command::parse("ball"),
            Ok(Command::Search("ball".to_string()))
        );
        assert_eq!(Command::parse(""), Ok(Command::Search(String::new())));
        assert_eq!(Command::parse(":stock"), Ok(Command::StockOnly(None)));
        assert_eq!(Command::parse(":stock on"), Ok(Command::StockOnly(Some(true))));
        assert_eq!(
            Command::parse(":stock off"),
            Ok(Command::StockOnly(Some(false)))
        );
        assert_eq!(Command::parse(":reset"), Ok(Command::Reset));
        assert_eq!(Command::parse(":quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_unknown_control() {
        assert_eq!(
            Command::parse(":sort"),
            Err(CommandError::Unknown(":sort".to_string()))
        );
        assert_eq!(
            Command::parse(":stock maybe"),
            Err(CommandError::Unknown(":stock maybe".to_string()))
        );
    }

    #[test]
    fn test_apply() {
        let view = Command::Search("ball".to_string()).apply(ViewState::default());
        assert_eq!(view.search_text, "ball");

        let view = Command::StockOnly(None).apply(view);
        assert!(view.only_in_stock);
        assert_eq!(view.search_text, "ball");

        let view = Command::StockOnly(None).apply(view);
        assert!(!view.only_in_stock);

        let view = Command::StockOnly(Some(true)).apply(view);
        assert!(view.only_in_stock);

        let view = Command::Reset.apply(view);
        assert_eq!(view, ViewState::default());
    }
}
