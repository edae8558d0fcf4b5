//! Synthetic series generation from era rules.
//!
//! The generator derives one record per year from a cumulative rule table:
//! every rule whose threshold year is at or before the given year is applied
//! in threshold order, so later rules override earlier ones per field.
//! Structural quantities (population baseline, territory shares, prisoner
//! era steps) are deterministic; casualties and prisoner jitter draw from
//! the injected [`SeededRng`], so those fields vary run to run unless the
//! generator is seeded.

use crate::data::record::{Pair, Series, YearRecord, MAX_YEAR, MIN_YEAR};
use crate::data::rng::SeededRng;
use crate::error::{ChronoscopeError, Result};

/// A base value plus a uniform non-negative jitter range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spread {
    /// Base value.
    pub base: f64,
    /// Exclusive upper bound of the random addition.
    pub jitter: u64,
}

impl Spread {
    /// A spread with jitter.
    pub const fn new(base: f64, jitter: u64) -> Self {
        Self { base, jitter }
    }

    /// A constant value without jitter.
    pub const fn fixed(base: f64) -> Self {
        Self { base, jitter: 0 }
    }

    fn sample(&self, rng: &mut SeededRng) -> f64 {
        self.base + rng.gen_below(self.jitter) as f64
    }
}

/// Field values that become active from a rule's threshold year onward.
///
/// `None` leaves the previously active value in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct EraUpdates {
    /// Yearly population growth for party A.
    pub growth_a: Option<f64>,
    /// Yearly population growth for party B.
    pub growth_b: Option<f64>,
    /// Territory share for party A in percent; party B is the complement.
    pub territory_a: Option<f64>,
    /// Prisoner step for party A.
    pub prisoners_a: Option<Spread>,
    /// Prisoner step for party B.
    pub prisoners_b: Option<Spread>,
}

/// A threshold year and the field updates active from it onward.
#[derive(Debug, Clone, Copy)]
pub struct EraRule {
    /// First year the updates apply to.
    pub threshold: i32,
    /// Updates taking effect at the threshold.
    pub updates: EraUpdates,
}

/// Deterministic-by-structure series generator.
#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    min_year: i32,
    max_year: i32,
    base_population: Pair,
    base_growth: Pair,
    base_territory_a: f64,
    base_prisoners: (Spread, Spread),
    baseline_casualties: (Spread, Spread),
    conflict_casualties: (Spread, Spread),
    conflict_years: Vec<i32>,
    rules: Vec<EraRule>,
}

impl SeriesGenerator {
    /// Create a generator over `min_year..=max_year` with the given rules.
    ///
    /// Fails with [`ChronoscopeError::InvalidYearBounds`] when the range is
    /// inverted.
    pub fn new(min_year: i32, max_year: i32, rules: Vec<EraRule>) -> Result<Self> {
        if min_year > max_year {
            return Err(ChronoscopeError::InvalidYearBounds {
                min: min_year,
                max: max_year,
            });
        }
        Ok(Self::assemble(min_year, max_year, rules))
    }

    /// The built-in rule table covering 1948 through 2024.
    pub fn historical() -> Self {
        Self::assemble(MIN_YEAR, MAX_YEAR, historical_rules())
    }

    fn assemble(min_year: i32, max_year: i32, mut rules: Vec<EraRule>) -> Self {
        rules.sort_by_key(|r| r.threshold);
        Self {
            min_year,
            max_year,
            base_population: Pair::new(1_500_000.0, 800_000.0),
            base_growth: Pair::new(100_000.0, 150_000.0),
            base_territory_a: 100.0,
            base_prisoners: (Spread::fixed(2_000.0), Spread::fixed(20.0)),
            baseline_casualties: (Spread::new(50.0, 100), Spread::new(10.0, 30)),
            conflict_casualties: (Spread::new(1_000.0, 2_000), Spread::new(200.0, 500)),
            conflict_years: vec![
                1948, 1956, 1967, 1973, 1982, 1987, 2000, 2006, 2008, 2014, 2021, 2023,
            ],
            rules,
        }
    }

    /// First year of the generated range.
    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    /// Last year of the generated range.
    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Produce the full series, one record per year inclusive.
    pub fn generate(&self, rng: &mut SeededRng) -> Series {
        let count = (self.max_year - self.min_year + 1) as usize;
        let mut records = Vec::with_capacity(count);

        for (index, year) in (self.min_year..=self.max_year).enumerate() {
            let mut growth = self.base_growth;
            let mut territory_a = self.base_territory_a;
            let mut prisoners = self.base_prisoners;

            // Rules are sorted by threshold; apply every rule at or before
            // this year so later thresholds override earlier ones.
            for rule in &self.rules {
                if rule.threshold > year {
                    break;
                }
                if let Some(g) = rule.updates.growth_a {
                    growth.party_a = g;
                }
                if let Some(g) = rule.updates.growth_b {
                    growth.party_b = g;
                }
                if let Some(t) = rule.updates.territory_a {
                    territory_a = t;
                }
                if let Some(p) = rule.updates.prisoners_a {
                    prisoners.0 = p;
                }
                if let Some(p) = rule.updates.prisoners_b {
                    prisoners.1 = p;
                }
            }

            let population = Pair::new(
                self.base_population.party_a + index as f64 * growth.party_a,
                self.base_population.party_b + index as f64 * growth.party_b,
            );

            let (casualty_a, casualty_b) = if self.conflict_years.contains(&year) {
                self.conflict_casualties
            } else {
                self.baseline_casualties
            };

            records.push(YearRecord {
                year,
                population,
                casualties: Pair::new(casualty_a.sample(rng), casualty_b.sample(rng)),
                prisoners: Pair::new(prisoners.0.sample(rng), prisoners.1.sample(rng)),
                // Party B is derived as the complement so the shares always
                // sum to exactly 100.
                territory: Pair::new(territory_a, 100.0 - territory_a),
            });
        }

        Series::new(records)
    }
}

fn historical_rules() -> Vec<EraRule> {
    vec![
        EraRule {
            threshold: 1948,
            updates: EraUpdates {
                territory_a: Some(45.0),
                ..EraUpdates::default()
            },
        },
        EraRule {
            threshold: 1967,
            updates: EraUpdates {
                growth_a: Some(110_000.0),
                territory_a: Some(22.0),
                prisoners_a: Some(Spread::new(4_000.0, 2_000)),
                ..EraUpdates::default()
            },
        },
        EraRule {
            threshold: 1987,
            updates: EraUpdates {
                growth_a: Some(120_000.0),
                prisoners_a: Some(Spread::new(8_000.0, 3_000)),
                ..EraUpdates::default()
            },
        },
        EraRule {
            threshold: 1990,
            updates: EraUpdates {
                growth_b: Some(180_000.0),
                ..EraUpdates::default()
            },
        },
        EraRule {
            threshold: 1994,
            updates: EraUpdates {
                territory_a: Some(25.0),
                ..EraUpdates::default()
            },
        },
        EraRule {
            threshold: 2000,
            updates: EraUpdates {
                growth_a: Some(125_000.0),
                prisoners_a: Some(Spread::new(7_000.0, 3_000)),
                ..EraUpdates::default()
            },
        },
        EraRule {
            threshold: 2005,
            updates: EraUpdates {
                growth_a: Some(130_000.0),
                growth_b: Some(160_000.0),
                ..EraUpdates::default()
            },
        },
        EraRule {
            threshold: 2006,
            updates: EraUpdates {
                prisoners_b: Some(Spread::new(10.0, 15)),
                ..EraUpdates::default()
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_bounds() {
        let err = SeriesGenerator::new(2024, 1948, Vec::new()).unwrap_err();
        assert!(matches!(err, ChronoscopeError::InvalidYearBounds { .. }));
    }

    #[test]
    fn later_rules_override_earlier_ones() {
        let rules = vec![
            EraRule {
                threshold: 1950,
                updates: EraUpdates {
                    territory_a: Some(40.0),
                    ..EraUpdates::default()
                },
            },
            EraRule {
                threshold: 1960,
                updates: EraUpdates {
                    territory_a: Some(30.0),
                    ..EraUpdates::default()
                },
            },
        ];
        let generator = SeriesGenerator::new(1948, 1970, rules).unwrap();
        let series = generator.generate(&mut SeededRng::new(1));
        assert_eq!(series.get(1949).unwrap().territory.party_a, 100.0);
        assert_eq!(series.get(1955).unwrap().territory.party_a, 40.0);
        assert_eq!(series.get(1965).unwrap().territory.party_a, 30.0);
    }

    #[test]
    fn conflict_years_elevate_casualties() {
        let generator = SeriesGenerator::historical();
        let series = generator.generate(&mut SeededRng::new(99));
        let quiet = series.get(1950).unwrap();
        assert!(quiet.casualties.party_a < 150.0);
        let conflict = series.get(1967).unwrap();
        assert!(conflict.casualties.party_a >= 1_000.0);
        assert!(conflict.casualties.party_b >= 200.0);
    }

    #[test]
    fn population_follows_era_growth() {
        let generator = SeriesGenerator::historical();
        let series = generator.generate(&mut SeededRng::new(3));
        // index 0: base values
        let first = series.get(1948).unwrap();
        assert_eq!(first.population.party_a, 1_500_000.0);
        assert_eq!(first.population.party_b, 800_000.0);
        // 1990 rule raises party B growth to 180k; index 42
        let later = series.get(1990).unwrap();
        assert_eq!(later.population.party_b, 800_000.0 + 42.0 * 180_000.0);
    }
}
