//! Filter criteria

use serde::{Deserialize, Serialize};
use shared::intent::{OrderFilterDto, UserFilterDto};

/// Keyword meaning "do not filter on this dimension"
pub const ALL_KEYWORD: &str = "all";

/// One filter dimension
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum Criterion {
    /// Identity: every record passes
    #[default]
    All,
    /// Case-insensitive exact match on the record attribute
    Exactly(String),
}

impl Criterion {
    /// Parse a raw select value. `"all"` (any case) and blank mean [`Criterion::All`].
    pub fn parse(raw: &str) -> Self {
        let value = raw.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_KEYWORD) {
            Self::All
        } else {
            Self::Exactly(value.to_string())
        }
    }

    pub fn matches(&self, attribute: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exactly(wanted) => wanted.eq_ignore_ascii_case(attribute),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Conjunction of all active dimensions
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub status: Criterion,
    /// Order kind on the kitchen board, profile on the user listing
    pub category: Criterion,
    /// Lower-cased free text; `None` when blank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl FilterCriteria {
    /// `{all, all}` with no search
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(status: &str, category: &str) -> Self {
        Self {
            status: Criterion::parse(status),
            category: Criterion::parse(category),
            search: None,
        }
    }

    pub fn with_search(mut self, search: Option<&str>) -> Self {
        self.search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        self
    }

    /// No dimension is active
    pub fn is_identity(&self) -> bool {
        self.status.is_all() && self.category.is_all() && self.search.is_none()
    }
}

impl From<&OrderFilterDto> for FilterCriteria {
    fn from(dto: &OrderFilterDto) -> Self {
        Self::new(&dto.status, &dto.kind)
    }
}

impl From<&UserFilterDto> for FilterCriteria {
    fn from(dto: &UserFilterDto) -> Self {
        Self::new(&dto.status, &dto.profile).with_search(dto.search.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_keyword() {
        assert_eq!(Criterion::parse("all"), Criterion::All);
        assert_eq!(Criterion::parse(" ALL "), Criterion::All);
        assert_eq!(Criterion::parse(""), Criterion::All);
        assert_eq!(
            Criterion::parse("Ready"),
            Criterion::Exactly("Ready".to_string())
        );
    }

    #[test]
    fn test_match_is_case_insensitive_and_exact() {
        let criterion = Criterion::parse("inprogress");
        assert!(criterion.matches("InProgress"));
        assert!(!criterion.matches("InProgressX"));
        assert!(!Criterion::parse("Ready").matches("Ready "));
    }

    #[test]
    fn test_blank_search_is_identity() {
        let criteria = FilterCriteria::all().with_search(Some("   "));
        assert!(criteria.is_identity());
    }

    #[test]
    fn test_from_user_dto() {
        let dto = UserFilterDto {
            status: "Active".into(),
            profile: "all".into(),
            search: Some(" Ana ".into()),
        };
        let criteria = FilterCriteria::from(&dto);
        assert_eq!(criteria.status, Criterion::Exactly("Active".into()));
        assert!(criteria.category.is_all());
        assert_eq!(criteria.search.as_deref(), Some("ana"));
    }
}
