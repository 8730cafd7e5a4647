// League filtering by name and sport type.
// Pure matching plus a memo that recomputes only when its inputs change.

use crate::sportsdb::League;

/// Sport type options offered by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SportFilter {
    #[default]
    All,
    Soccer,
    Motorsport,
    IceHockey,
    AmericanFootball,
}

impl SportFilter {
    pub const ALL: [SportFilter; 5] = [
        SportFilter::All,
        SportFilter::Soccer,
        SportFilter::Motorsport,
        SportFilter::IceHockey,
        SportFilter::AmericanFootball,
    ];

    /// Label as it appears in the selector and in upstream `strSport`.
    pub fn label(&self) -> &'static str {
        match self {
            SportFilter::All => "All",
            SportFilter::Soccer => "Soccer",
            SportFilter::Motorsport => "Motorsport",
            SportFilter::IceHockey => "Ice Hockey",
            SportFilter::AmericanFootball => "American Football",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SportFilter::All => SportFilter::Soccer,
            SportFilter::Soccer => SportFilter::Motorsport,
            SportFilter::Motorsport => SportFilter::IceHockey,
            SportFilter::IceHockey => SportFilter::AmericanFootball,
            SportFilter::AmericanFootball => SportFilter::All,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            SportFilter::All => SportFilter::AmericanFootball,
            SportFilter::Soccer => SportFilter::All,
            SportFilter::Motorsport => SportFilter::Soccer,
            SportFilter::IceHockey => SportFilter::Motorsport,
            SportFilter::AmericanFootball => SportFilter::IceHockey,
        }
    }

    pub fn matches(&self, sport: &str) -> bool {
        *self == SportFilter::All || sport == self.label()
    }
}

/// Current search text and sport selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub name_query: String,
    pub sport: SportFilter,
}

impl FilterCriteria {
    pub fn matches(&self, league: &League) -> bool {
        let name_match = league
            .name
            .to_lowercase()
            .contains(&self.name_query.to_lowercase());
        name_match && self.sport.matches(&league.sport)
    }
}

/// Indices of leagues matching the criteria, in original order.
pub fn filter_leagues(leagues: &[League], criteria: &FilterCriteria) -> Vec<usize> {
    leagues
        .iter()
        .enumerate()
        .filter(|(_, league)| criteria.matches(league))
        .map(|(i, _)| i)
        .collect()
}

/// Memoized filter result keyed on the league set generation and criteria.
#[derive(Debug, Default)]
pub struct LeagueFilter {
    key: Option<(u64, FilterCriteria)>,
    indices: Vec<usize>,
}

impl LeagueFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute if the league set or criteria changed. Returns true if it did.
    ///
    /// `generation` must change whenever the league set is replaced.
    pub fn refresh(&mut self, leagues: &[League], generation: u64, criteria: &FilterCriteria) -> bool {
        if let Some((gen_seen, seen)) = &self.key
            && *gen_seen == generation
            && seen == criteria
        {
            return false;
        }

        self.indices = filter_leagues(leagues, criteria);
        self.key = Some((generation, criteria.clone()));
        true
    }

    /// Indices from the last refresh. Empty before the first one.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
