//! Fixed field enumerations used by search and facet extraction.

use std::fmt;

/// How a filter value is compared against a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Case-insensitive substring match.
    Substring,
    /// Case-sensitive equality.
    Exact,
}

/// Search criteria keys accepted by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterField {
    Name,
    City,
    Country,
    Class,
    Title,
    Industry,
}

impl FilterField {
    pub const ALL: [FilterField; 6] = [
        FilterField::Name,
        FilterField::City,
        FilterField::Country,
        FilterField::Class,
        FilterField::Title,
        FilterField::Industry,
    ];

    /// Query parameter key (`name`, `city`, ...).
    pub fn key(self) -> &'static str {
        match self {
            FilterField::Name => "name",
            FilterField::City => "city",
            FilterField::Country => "country",
            FilterField::Class => "class",
            FilterField::Title => "title",
            FilterField::Industry => "industry",
        }
    }

    /// Record column the criterion is evaluated against.
    pub fn column(self) -> &'static str {
        match self {
            FilterField::Name => "Name",
            FilterField::City => "City",
            FilterField::Country => "Country",
            FilterField::Class => "Class",
            FilterField::Title => "Title",
            FilterField::Industry => "Industry",
        }
    }

    pub fn match_mode(self) -> MatchMode {
        match self {
            FilterField::Name | FilterField::Title => MatchMode::Substring,
            FilterField::City
            | FilterField::Country
            | FilterField::Class
            | FilterField::Industry => MatchMode::Exact,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Fields offered as selection lists on the index page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetField {
    Country,
    City,
    Class,
    Industry,
}

impl FacetField {
    pub const ALL: [FacetField; 4] = [
        FacetField::Country,
        FacetField::City,
        FacetField::Class,
        FacetField::Industry,
    ];

    pub fn column(self) -> &'static str {
        match self {
            FacetField::Country => "Country",
            FacetField::City => "City",
            FacetField::Class => "Class",
            FacetField::Industry => "Industry",
        }
    }

    /// The search criterion that selects on this facet.
    pub fn filter_field(self) -> FilterField {
        match self {
            FacetField::Country => FilterField::Country,
            FacetField::City => FilterField::City,
            FacetField::Class => FilterField::Class,
            FacetField::Industry => FilterField::Industry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for field in FilterField::ALL {
            assert_eq!(FilterField::from_key(field.key()), Some(field));
        }
        assert_eq!(FilterField::from_key("Name"), None);
    }

    #[test]
    fn name_and_title_are_substring_matches() {
        assert_eq!(FilterField::Name.match_mode(), MatchMode::Substring);
        assert_eq!(FilterField::Title.match_mode(), MatchMode::Substring);
        assert_eq!(FilterField::City.match_mode(), MatchMode::Exact);
        assert_eq!(FilterField::Class.match_mode(), MatchMode::Exact);
    }

    #[test]
    fn facets_map_to_exact_filters() {
        for facet in FacetField::ALL {
            let filter = facet.filter_field();
            assert_eq!(filter.column(), facet.column());
            assert_eq!(filter.match_mode(), MatchMode::Exact);
        }
    }
}
