use alloc::vec::Vec;

use crate::CarouselError;

/// A single responsive rule: at `min_width` and above, show `slides_per_view` slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    pub min_width: u32,
    pub slides_per_view: usize,
}

/// A set of breakpoint rules keyed by minimum viewport width.
///
/// Rules are kept sorted ascending by `min_width` regardless of the order they were added in,
/// so resolution never depends on declaration order. Each `min_width` appears at most once.
///
/// With `feature = "serde"`, this type (de)serializes as a list of [`Breakpoint`]s and
/// re-validates on deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Breakpoint>", into = "Vec<Breakpoint>")
)]
pub struct Breakpoints {
    rules: Vec<Breakpoint>, // sorted by min_width, unique
}

impl Breakpoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a rule set from `(min_width, slides_per_view)` pairs in any order.
    ///
    /// Later pairs win when the same `min_width` appears twice.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (u32, usize)>,
    ) -> Result<Self, CarouselError> {
        let mut out = Self::new();
        for (min_width, slides_per_view) in pairs {
            out.insert(min_width, slides_per_view)?;
        }
        Ok(out)
    }

    /// Adds or replaces the rule for `min_width`.
    pub fn insert(&mut self, min_width: u32, slides_per_view: usize) -> Result<(), CarouselError> {
        if slides_per_view == 0 {
            return Err(CarouselError::InvalidBreakpoint {
                min_width,
                slides_per_view,
            });
        }
        let rule = Breakpoint {
            min_width,
            slides_per_view,
        };
        match self
            .rules
            .binary_search_by_key(&min_width, |r| r.min_width)
        {
            Ok(i) => self.rules[i] = rule,
            Err(i) => self.rules.insert(i, rule),
        }
        Ok(())
    }

    pub fn with(mut self, min_width: u32, slides_per_view: usize) -> Result<Self, CarouselError> {
        self.insert(min_width, slides_per_view)?;
        Ok(self)
    }

    pub fn remove(&mut self, min_width: u32) -> Option<usize> {
        let i = self
            .rules
            .binary_search_by_key(&min_width, |r| r.min_width)
            .ok()?;
        Some(self.rules.remove(i).slides_per_view)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in ascending `min_width` order.
    pub fn iter(&self) -> impl Iterator<Item = Breakpoint> + '_ {
        self.rules.iter().copied()
    }

    /// Returns the slides-per-view of the greatest rule whose `min_width <= width`.
    ///
    /// Returns `None` when every rule starts above `width`; callers then keep their current
    /// value.
    pub fn resolve(&self, width: u32) -> Option<usize> {
        let qualifying = self.rules.partition_point(|r| r.min_width <= width);
        let rule = self.rules.get(qualifying.checked_sub(1)?)?;
        ctrace!(
            width,
            min_width = rule.min_width,
            slides_per_view = rule.slides_per_view,
            "Breakpoints::resolve"
        );
        Some(rule.slides_per_view)
    }

    pub fn resolve_or(&self, width: u32, fallback: usize) -> usize {
        self.resolve(width).unwrap_or(fallback)
    }
}

impl TryFrom<Vec<Breakpoint>> for Breakpoints {
    type Error = CarouselError;

    fn try_from(rules: Vec<Breakpoint>) -> Result<Self, Self::Error> {
        Self::from_pairs(rules.into_iter().map(|r| (r.min_width, r.slides_per_view)))
    }
}

impl From<Breakpoints> for Vec<Breakpoint> {
    fn from(b: Breakpoints) -> Self {
        b.rules
    }
}
