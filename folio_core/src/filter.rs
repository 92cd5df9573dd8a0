//! Project category filter.

/// Filter value that matches every card.
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Category(String),
}

impl ProjectFilter {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            ProjectFilter::All
        } else {
            ProjectFilter::Category(value.to_string())
        }
    }

    /// Cards without a category only show under [`ProjectFilter::All`].
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(wanted) => category == Some(wanted.as_str()),
        }
    }
}

/// Result of selecting a filter control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPlan {
    /// Index of the one active control.
    pub active: usize,
    /// Per card: true to show, false to fade out and remove.
    pub visible: Vec<bool>,
}

impl FilterPlan {
    pub fn shown(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible.iter().enumerate().filter(|(_, v)| **v).map(|(i, _)| i)
    }

    pub fn hidden(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible.iter().enumerate().filter(|(_, v)| !**v).map(|(i, _)| i)
    }
}

/// The set of filter controls and which one is active.
#[derive(Debug, Clone)]
pub struct FilterBar {
    values: Vec<String>,
    active: usize,
}

impl FilterBar {
    /// `values` are the controls' filter values in document order. The first
    /// `all` control (or the first control) starts active.
    pub fn new(values: Vec<String>) -> Self {
        let active = values.iter().position(|v| v == ALL).unwrap_or(0);
        Self { values, active }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_filter(&self) -> Option<ProjectFilter> {
        self.values.get(self.active).map(|v| ProjectFilter::parse(v))
    }

    /// Activate control `index` and plan card visibility. Out-of-range
    /// indices leave everything unchanged.
    pub fn select(&mut self, index: usize, categories: &[Option<&str>]) -> Option<FilterPlan> {
        let filter = ProjectFilter::parse(self.values.get(index)?);
        self.active = index;
        Some(FilterPlan {
            active: index,
            visible: categories.iter().map(|c| filter.matches(*c)).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bar() -> FilterBar {
        FilterBar::new(vec!["all".into(), "web".into(), "data".into()])
    }

    const CARDS: [Option<&str>; 4] = [Some("web"), Some("data"), Some("web"), None];

    #[test]
    fn test_all_shows_every_card() {
        let mut bar = bar();
        let plan = bar.select(0, &CARDS).expect("valid index");
        assert_eq!(plan.visible, vec![true; 4]);
        assert_eq!(plan.hidden().count(), 0);
    }

    #[test]
    fn test_category_shows_only_matches() {
        let mut bar = bar();
        let plan = bar.select(1, &CARDS).expect("valid index");
        assert_eq!(plan.active, 1);
        assert_eq!(plan.shown().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(plan.hidden().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(bar.active(), 1);
        assert_eq!(
            bar.active_filter(),
            Some(ProjectFilter::Category("web".into()))
        );
    }

    #[test]
    fn test_exactly_one_active() {
        let mut bar = bar();
        assert_eq!(bar.active(), 0);
        bar.select(2, &CARDS);
        assert_eq!(bar.active(), 2);
        assert!(bar.select(9, &CARDS).is_none());
        assert_eq!(bar.active(), 2);
    }

    #[test]
    fn test_initial_active_prefers_all() {
        let bar = FilterBar::new(vec!["web".into(), "all".into()]);
        assert_eq!(bar.active(), 1);
        assert_eq!(FilterBar::new(vec![]).active_filter(), None);
    }
}
