//! A single simulated bacterium.

use amr_core::Point;

// ── MechanismSet ──────────────────────────────────────────────────────────────

/// Insertion-ordered set of resistance mechanism names.
///
/// Order only matters for stable display.  Sets hold at most a handful of
/// names, so membership is a linear scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MechanismSet(Vec<String>);

impl MechanismSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add `name` if absent.  Returns `true` if it was inserted.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.0.push(name.to_owned());
        true
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|m| m == name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a MechanismSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One bacterium.
///
/// Agents are never removed from the population; death only clears
/// [`alive`][Self::alive].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub position: Point,

    /// Antibiotic resistance in `[0, 1]`.
    pub resistance: f64,

    /// Base reproduction rate copied from the species at creation.  The
    /// environment scales it each tick; it is never re-derived.
    pub growth_rate: f64,

    /// Mechanisms acquired by mutation.  Display only.
    pub mechanisms: MechanismSet,

    pub alive: bool,

    /// Ticks survived.  Only advanced while alive.
    pub age: u32,
}

impl Agent {
    /// A member of the initial population.
    pub fn founder(position: Point, resistance: f64, growth_rate: f64) -> Self {
        Self {
            position,
            resistance,
            growth_rate,
            mechanisms: MechanismSet::new(),
            alive: true,
            age: 0,
        }
    }

    /// A newborn copy of `self`, displaced by `(dx, dy)`.
    ///
    /// Resistance, growth rate and mechanisms are inherited by value; age
    /// starts at zero.
    pub fn offspring(&self, dx: f64, dy: f64) -> Self {
        Self {
            position:    self.position.offset(dx, dy),
            resistance:  self.resistance,
            growth_rate: self.growth_rate,
            mechanisms:  self.mechanisms.clone(),
            alive:       true,
            age:         0,
        }
    }
}
