//! In-memory reference database with search and identifier lookup.

use geodesy::GeoPoint;
use serde::Serialize;
use tracing::debug;

use crate::error::{NavDataError, Result};
use crate::types::{Airport, NavKind, NavPoint, Navaid, Waypoint};

/// Default result cap for single-category searches.
pub const DEFAULT_SEARCH_LIMIT: usize = 100;

/// Per-category caps for [`NavDatabase::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Cap applied when a search term is given.
    pub with_term: usize,
    /// Cap applied when browsing with an empty term.
    pub browse: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            with_term: 200,
            browse: 50,
        }
    }
}

impl SearchLimits {
    fn for_term(&self, term: &str) -> usize {
        if term.is_empty() {
            self.browse
        } else {
            self.with_term
        }
    }
}

/// One row of a combined search, flattened for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub kind: NavKind,
    pub id: String,
    pub name: String,
    pub details: String,
    pub position: GeoPoint,
}

impl From<&NavPoint> for SearchResult {
    fn from(point: &NavPoint) -> Self {
        Self {
            kind: point.kind(),
            id: point.id().to_string(),
            name: point.display_name().to_string(),
            details: point.details(),
            position: point.position(),
        }
    }
}

/// Airports, navaids and waypoints held in load order.
#[derive(Debug, Clone, Default)]
pub struct NavDatabase {
    airports: Vec<Airport>,
    navaids: Vec<Navaid>,
    waypoints: Vec<Waypoint>,
}

impl NavDatabase {
    pub fn new(airports: Vec<Airport>, navaids: Vec<Navaid>, waypoints: Vec<Waypoint>) -> Self {
        debug!(
            airports = airports.len(),
            navaids = navaids.len(),
            waypoints = waypoints.len(),
            "built reference database"
        );
        Self {
            airports,
            navaids,
            waypoints,
        }
    }

    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    pub fn navaids(&self) -> &[Navaid] {
        &self.navaids
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Total number of records across all categories.
    pub fn len(&self) -> usize {
        self.airports.len() + self.navaids.len() + self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Airports whose code, name, city or country contains `term`
    /// (case-insensitive). An empty term returns the first `limit` airports.
    pub fn search_airports(&self, term: &str, limit: usize) -> Vec<&Airport> {
        let needle = term.trim().to_lowercase();
        self.airports
            .iter()
            .filter(|a| matches_any(&needle, [&a.code, &a.name, &a.city, &a.country]))
            .take(limit)
            .collect()
    }

    /// Navaids whose ident, name or type contains `term`.
    pub fn search_navaids(&self, term: &str, limit: usize) -> Vec<&Navaid> {
        let needle = term.trim().to_lowercase();
        self.navaids
            .iter()
            .filter(|n| matches_any(&needle, [&n.ident, &n.name, &n.kind]))
            .take(limit)
            .collect()
    }

    /// Waypoints whose name or type contains `term`.
    pub fn search_waypoints(&self, term: &str, limit: usize) -> Vec<&Waypoint> {
        let needle = term.trim().to_lowercase();
        self.waypoints
            .iter()
            .filter(|w| matches_any(&needle, [&w.name, &w.kind]))
            .take(limit)
            .collect()
    }

    /// Search all categories.
    ///
    /// Each category is capped separately, results are concatenated as
    /// airports, navaids, waypoints and then stably ordered so that an exact
    /// identifier match comes first, identifier prefix matches next, and
    /// everything else keeps its place.
    pub fn search(&self, term: &str, limits: SearchLimits) -> Vec<SearchResult> {
        let term = term.trim();
        let cap = limits.for_term(term);

        let mut results: Vec<SearchResult> = self
            .search_airports(term, cap)
            .into_iter()
            .map(|a| SearchResult::from(&NavPoint::from(a.clone())))
            .chain(
                self.search_navaids(term, cap)
                    .into_iter()
                    .map(|n| SearchResult::from(&NavPoint::from(n.clone()))),
            )
            .chain(
                self.search_waypoints(term, cap)
                    .into_iter()
                    .map(|w| SearchResult::from(&NavPoint::from(w.clone()))),
            )
            .collect();

        let needle = term.to_lowercase();
        results.sort_by_key(|r| relevance(&needle, &r.id));
        debug!(term, results = results.len(), "combined search");
        results
    }

    /// Find an airport by ICAO code (case-insensitive).
    pub fn find_airport(&self, code: &str) -> Option<&Airport> {
        let code = code.trim();
        self.airports
            .iter()
            .find(|a| a.code.eq_ignore_ascii_case(code))
    }

    pub fn find_navaid(&self, ident: &str) -> Option<&Navaid> {
        let ident = ident.trim();
        self.navaids
            .iter()
            .find(|n| n.ident.eq_ignore_ascii_case(ident))
    }

    pub fn find_waypoint(&self, name: &str) -> Option<&Waypoint> {
        let name = name.trim();
        self.waypoints
            .iter()
            .find(|w| w.name.eq_ignore_ascii_case(name))
    }

    /// Resolve an identifier to a reference point, trying airports, then
    /// navaids, then waypoints.
    pub fn resolve(&self, ident: &str) -> Result<NavPoint> {
        self.find_airport(ident)
            .cloned()
            .map(NavPoint::from)
            .or_else(|| self.find_navaid(ident).cloned().map(NavPoint::from))
            .or_else(|| self.find_waypoint(ident).cloned().map(NavPoint::from))
            .ok_or_else(|| NavDataError::not_found(ident.trim()))
    }
}

fn matches_any<'a>(needle: &str, fields: impl IntoIterator<Item = &'a String>) -> bool {
    needle.is_empty()
        || fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Sort key: exact identifier match, then prefix match, then the rest.
fn relevance(needle: &str, id: &str) -> u8 {
    let id = id.to_lowercase();
    if id == needle {
        0
    } else if id.starts_with(needle) {
        1
    } else {
        2
    }
}
