//! Parsing for the numbered prompts.

/// Options offered once a team has been picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewRoster,
    StartSeason,
    Exit,
}

impl MenuChoice {
    pub const ALL: [Self; 3] = [Self::ViewRoster, Self::StartSeason, Self::Exit];

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::ViewRoster => 1,
            Self::StartSeason => 2,
            Self::Exit => 3,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ViewRoster => "View Roster",
            Self::StartSeason => "Start Season",
            Self::Exit => "Exit",
        }
    }

    /// Parse a menu line. Anything that is not a listed number is `None`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let number: u8 = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|choice| choice.number() == number)
    }
}

/// Parse a 1-based team number. Range checks happen in the league.
#[must_use]
pub fn parse_team_choice(input: &str) -> Option<usize> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listed_numbers() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::ViewRoster));
        assert_eq!(MenuChoice::parse(" 2\n"), Some(MenuChoice::StartSeason));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Exit));
    }

    #[test]
    fn rejects_unlisted_or_garbage_input() {
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("4"), None);
        assert_eq!(MenuChoice::parse("-1"), None);
        assert_eq!(MenuChoice::parse("roster"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn team_choice_accepts_only_unsigned_integers() {
        assert_eq!(parse_team_choice("12\n"), Some(12));
        assert_eq!(parse_team_choice("0"), Some(0));
        assert_eq!(parse_team_choice("-3"), None);
        assert_eq!(parse_team_choice("Cubs"), None);
    }
}
