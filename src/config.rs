//! Search configuration.

/// When the search recognises the goal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GoalCheck {
    /// The goal terminates the search when it is popped from the frontier. Optimal under an
    /// admissible, consistent heuristic.
    #[default]
    OnExpansion,
    /// The goal terminates the search as soon as it is first relaxed. Cheaper, but the recorded
    /// goal cost is only guaranteed optimal for uniform step costs with weight 0.
    OnDiscovery,
}

/// Knobs of a [SearchEngine](crate::SearchEngine).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Heuristic weight: 0 is Dijkstra, 1 is A*, above 1 is weighted A*.
    pub weight: f64,
    pub goal_check: GoalCheck,
    /// Reject start/goal pairs on different connected components before searching.
    pub prune_unreachable: bool,
    /// Maximum number of expansions before the search gives up.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            weight: 1.0,
            goal_check: GoalCheck::OnExpansion,
            prune_unreachable: true,
            max_expansions: None,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn goal_check(mut self, goal_check: GoalCheck) -> Self {
        self.goal_check = goal_check;
        self
    }

    pub fn prune_unreachable(mut self, prune: bool) -> Self {
        self.prune_unreachable = prune;
        self
    }

    pub fn max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub(crate) fn weight_is_valid(&self) -> bool {
        self.weight.is_finite() && self.weight >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = SearchConfig::new()
            .weight(1.5)
            .goal_check(GoalCheck::OnDiscovery)
            .prune_unreachable(false)
            .max_expansions(10);
        assert_eq!(config.weight, 1.5);
        assert_eq!(config.goal_check, GoalCheck::OnDiscovery);
        assert!(!config.prune_unreachable);
        assert_eq!(config.max_expansions, Some(10));
    }

    #[test]
    fn weight_validation() {
        assert!(SearchConfig::new().weight(0.0).weight_is_valid());
        assert!(!SearchConfig::new().weight(-0.5).weight_is_valid());
        assert!(!SearchConfig::new().weight(f64::NAN).weight_is_valid());
        assert!(!SearchConfig::new().weight(f64::INFINITY).weight_is_valid());
    }
}
