// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the app
    Quit,
    // Display help
    Help,
    // Change theme
    Theme(String),
    // Toggle display of the date column
    Dates,
    // Apply a filter value directly; "all" clears the filter
    Filter(String),
    // Jump to a page number (clamped when out of range)
    Page(usize),
    // Switch to the named dataset tab
    Tab(String),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "dates" => Ok(Command::Dates),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "filter" => {
                if rest.is_empty() {
                    Err("usage: filter <value|all>".to_string())
                } else {
                    Ok(Command::Filter(rest.to_string()))
                }
            }
            "page" => match rest.parse::<usize>() {
                Ok(n) => Ok(Command::Page(n)),
                Err(_) => Err("usage: page <number>".to_string()),
            },
            "tab" => {
                if rest.is_empty() {
                    Err("usage: tab <bills|members|notices>".to_string())
                } else {
                    Ok(Command::Tab(rest.to_string()))
                }
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit() {
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("  quit  "), Ok(Command::Quit));
    }

    #[test]
    fn parse_theme() {
        assert_eq!(
            Command::parse("theme gruvbox"),
            Ok(Command::Theme("gruvbox".to_string()))
        );
        assert!(Command::parse("theme").is_err());
    }

    #[test]
    fn parse_filter() {
        assert_eq!(
            Command::parse("filter 가결"),
            Ok(Command::Filter("가결".to_string()))
        );
        assert_eq!(
            Command::parse("filter all"),
            Ok(Command::Filter("all".to_string()))
        );
        assert!(Command::parse("filter").is_err());
    }

    #[test]
    fn parse_page() {
        assert_eq!(Command::parse("page 3"), Ok(Command::Page(3)));
        // Out-of-range pages clamp at execution time, so 0 and 99 both parse.
        assert_eq!(Command::parse("page 0"), Ok(Command::Page(0)));
        assert_eq!(Command::parse("page 99"), Ok(Command::Page(99)));
        assert!(Command::parse("page abc").is_err());
        assert!(Command::parse("page").is_err());
    }

    #[test]
    fn parse_tab() {
        assert_eq!(
            Command::parse("tab members"),
            Ok(Command::Tab("members".to_string()))
        );
        assert!(Command::parse("tab").is_err());
    }

    #[test]
    fn parse_empty_returns_sentinel_err() {
        assert_eq!(Command::parse(""), Err(String::new()));
        assert_eq!(Command::parse("  "), Err(String::new()));
    }

    #[test]
    fn parse_unknown() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert!(err.contains("frobnicate"));
    }
}
