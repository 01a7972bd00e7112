//! Destination rate book

use super::types::{RateBookStatistics, RateRange};
use crate::core::cost::RateTier;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tiered freight rates keyed by destination name
///
/// Serialized as a plain map of destination to tier list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateBook {
    destinations: HashMap<String, Vec<RateTier>>,
}

impl RateBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tiers of a destination. Exact names win over case-insensitive matches.
    pub fn tiers_for(&self, destination: &str) -> Option<&[RateTier]> {
        let destination = destination.trim();
        self.destinations
            .get(destination)
            .or_else(|| {
                self.destinations
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(destination))
                    .map(|(_, tiers)| tiers)
            })
            .map(Vec::as_slice)
    }

    pub fn contains(&self, destination: &str) -> bool {
        self.tiers_for(destination).is_some()
    }

    /// Destination names sorted alphabetically
    pub fn destinations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.destinations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Add or replace the tiers of a destination, returning the previous ones
    pub fn set_tiers(
        &mut self,
        destination: impl Into<String>,
        tiers: Vec<RateTier>,
    ) -> Option<Vec<RateTier>> {
        self.destinations.insert(destination.into(), tiers)
    }

    pub fn remove_destination(&mut self, destination: &str) -> Option<Vec<RateTier>> {
        self.destinations.remove(destination)
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn statistics(&self) -> RateBookStatistics {
        let mut rate_ranges = HashMap::new();

        for (destination, tiers) in &self.destinations {
            let range = tiers.iter().fold(None, |range: Option<RateRange>, tier| {
                Some(match range {
                    Some(r) => RateRange {
                        min: r.min.min(tier.rate),
                        max: r.max.max(tier.rate),
                    },
                    None => RateRange {
                        min: tier.rate,
                        max: tier.rate,
                    },
                })
            });
            if let Some(range) = range {
                rate_ranges.insert(destination.clone(), range);
            }
        }

        RateBookStatistics {
            total_destinations: self.destinations.len(),
            total_tiers: self.destinations.values().map(Vec::len).sum(),
            rate_ranges,
        }
    }
}

impl FromIterator<(String, Vec<RateTier>)> for RateBook {
    fn from_iter<I: IntoIterator<Item = (String, Vec<RateTier>)>>(iter: I) -> Self {
        Self {
            destinations: iter.into_iter().collect(),
        }
    }
}
