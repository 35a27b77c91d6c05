use std::fmt;

pub const ALL_COUNTRIES: &str = "all";

/// Country constraint for a records query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FilterSelection {
    #[default]
    All,
    Country(String),
}

impl FilterSelection {
    /// Maps selector values back to a filter; the `"all"` sentinel and blank
    /// input both mean no constraint.
    pub fn from_value(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed == ALL_COUNTRIES {
            FilterSelection::All
        } else {
            FilterSelection::Country(trimmed.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            FilterSelection::All => ALL_COUNTRIES,
            FilterSelection::Country(country) => country,
        }
    }

    /// Value of the `country` query parameter, absent for `All`.
    pub fn country(&self) -> Option<&str> {
        match self {
            FilterSelection::All => None,
            FilterSelection::Country(country) => Some(country),
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_value())
    }
}
