// crates/regiondb-core/src/model/search.rs

use super::domain::{Country, Region, RegionDb};
use crate::common::DbStats;
use crate::traits::NameMatch;

impl RegionDb {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn stats(&self) -> DbStats {
        let mut stats = DbStats {
            countries: self.countries.len(),
            ..DbStats::default()
        };
        for c in &self.countries {
            stats.regions += c.regions.len();
            stats.unspecified += c.regions.iter().filter(|r| r.is_unspecified()).count();
        }
        stats
    }

    /// Stable sort by country id; region order inside a country is untouched.
    pub fn sort(&mut self) {
        self.countries.sort_by_key(|c| c.id);
    }

    pub fn find_country_by_id(&self, id: u32) -> Option<&Country> {
        self.countries.iter().find(|c| c.id == id)
    }

    pub fn find_country_by_iso(&self, iso: &str) -> Option<&Country> {
        // Linear scan is fine, there are fewer than 256 ids.
        self.countries
            .iter()
            .find(|c| !c.iso_code.is_empty() && c.iso_code.eq_ignore_ascii_case(iso))
    }

    /// Resolve a user-supplied reference: ISO code, numeric id, then name.
    pub fn find_country(&self, query: &str) -> Option<&Country> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        self.find_country_by_iso(query)
            .or_else(|| {
                query
                    .parse::<u32>()
                    .ok()
                    .and_then(|id| self.find_country_by_id(id))
            })
            .or_else(|| self.countries.iter().find(|c| c.is_named(query)))
    }

    /// All regions (sentinels excluded) whose name contains `query`.
    pub fn find_regions_by_substring(&self, query: &str) -> Vec<(&Region, &Country)> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let mut out = Vec::new();
        for country in &self.countries {
            for region in country.named_regions() {
                if region.name_contains(query) {
                    out.push((region, country));
                }
            }
        }
        out
    }
}
