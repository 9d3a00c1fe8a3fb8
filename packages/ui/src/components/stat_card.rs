use dioxus::prelude::*;

use super::Skeleton;

/// What a counter shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatValue {
    Loading,
    Failed,
    Count(usize),
}

impl StatValue {
    /// A failed section never reports its last count as current.
    pub fn new(count: usize, loading: bool, failed: bool) -> Self {
        if loading {
            StatValue::Loading
        } else if failed {
            StatValue::Failed
        } else {
            StatValue::Count(count)
        }
    }
}

/// A titled counter. Shows a skeleton while loading and a dash after a failure.
#[component]
pub fn StatCard(title: String, value: StatValue) -> Element {
    rsx! {
        div {
            class: "stat-card",
            h3 { class: "stat-card-title", "{title}" }
            match value {
                StatValue::Loading => rsx! { Skeleton { class: "h-8 mt-1" } },
                StatValue::Failed => rsx! {
                    p { class: "stat-card-value section-error", title: "Failed to load", "–" }
                },
                StatValue::Count(count) => rsx! {
                    p { class: "stat-card-value", "{count}" }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_hides_count() {
        assert_eq!(StatValue::new(4, false, true), StatValue::Failed);
        assert_eq!(StatValue::new(0, false, true), StatValue::Failed);
    }

    #[test]
    fn test_loading_wins() {
        assert_eq!(StatValue::new(4, true, false), StatValue::Loading);
    }

    #[test]
    fn test_settled_count() {
        assert_eq!(StatValue::new(0, false, false), StatValue::Count(0));
        assert_eq!(StatValue::new(7, false, false), StatValue::Count(7));
    }
}
