//! Pure query operations over a component list.
//!
//! Both operations are total functions of their inputs: no caching, no
//! locking, no hidden state. Derived views are recomputed from scratch on
//! every input change rather than patched incrementally, which is cheap at
//! catalog scale and keeps the contract trivial to reason about.

use indexmap::IndexMap;

use crate::{Category, ComponentDescriptor};

/// Select the components whose name contains `query`, case-insensitively.
///
/// An empty query returns the input unchanged. Matching is by substring on
/// the display name only; descriptions and categories never participate.
/// Relative order always follows the input.
#[must_use]
pub fn filter_by_name<'a>(
    components: &'a [ComponentDescriptor],
    query: &str,
) -> Vec<&'a ComponentDescriptor> {
    if query.is_empty() {
        return components.iter().collect();
    }
    let needle = query.to_lowercase();
    components
        .iter()
        .filter(|component| component.name.to_lowercase().contains(&needle))
        .collect()
}

/// Partition components into per-category buckets.
///
/// The partition is stable and exact: every input element lands in exactly
/// one bucket, bucket-internal order follows the input, and categories with
/// no members are absent rather than present-but-empty. Key order in the
/// returned map is first-encounter order and carries no display contract;
/// presenters wanting the declared section order iterate [`Category::ALL`]
/// and skip absent keys.
#[must_use]
pub fn group_by_category<'a, I>(components: I) -> IndexMap<Category, Vec<&'a ComponentDescriptor>>
where
    I: IntoIterator<Item = &'a ComponentDescriptor>,
{
    let mut groups: IndexMap<Category, Vec<&ComponentDescriptor>> = IndexMap::new();
    for component in components {
        groups.entry(component.category).or_default().push(component);
    }
    groups
}

/// The composed query the presentation layer runs on every input change.
#[must_use]
pub fn grouped_catalog<'a>(
    components: &'a [ComponentDescriptor],
    query: &str,
) -> IndexMap<Category, Vec<&'a ComponentDescriptor>> {
    group_by_category(filter_by_name(components, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ComponentId;

    fn fixture() -> Vec<ComponentDescriptor> {
        vec![
            ComponentDescriptor::new(
                ComponentId::Text,
                "Text",
                "A view that displays one or more lines of read-only text.",
                Category::TextInputs,
                "text.alignleft",
            ),
            ComponentDescriptor::new(
                ComponentId::Toggle,
                "Toggle",
                "A control that toggles between on and off states.",
                Category::Buttons,
                "switch.2",
            ),
            ComponentDescriptor::new(
                ComponentId::TextField,
                "TextField",
                "A control that displays an editable text interface.",
                Category::TextInputs,
                "character.cursor.ibeam",
            ),
        ]
    }

    fn names(components: &[&ComponentDescriptor]) -> Vec<String> {
        components.iter().map(|component| component.name.clone()).collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let components = fixture();
        let filtered = filter_by_name(&components, "");
        assert_eq!(names(&filtered), vec!["Text", "Toggle", "TextField"]);
    }

    #[test]
    fn filter_keeps_substring_matches_in_order() {
        let components = fixture();
        let filtered = filter_by_name(&components, "tex");
        assert_eq!(names(&filtered), vec!["Text", "TextField"]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let components = fixture();
        let lower = filter_by_name(&components, "tex");
        let upper = filter_by_name(&components, "TEXT");
        assert_eq!(names(&lower), names(&upper));
    }

    #[test]
    fn filter_never_matches_descriptions() {
        let components = fixture();
        // "control" appears in two descriptions but in no name.
        let filtered = filter_by_name(&components, "control");
        assert!(filtered.is_empty());
    }

    #[test]
    fn filter_without_matches_is_empty() {
        let components = fixture();
        assert!(filter_by_name(&components, "zzz").is_empty());
        assert!(grouped_catalog(&components, "zzz").is_empty());
    }

    #[test]
    fn grouping_partitions_exactly() {
        let components = fixture();
        let groups = group_by_category(&components);

        let mut regathered: Vec<&ComponentDescriptor> = Vec::new();
        for bucket in groups.values() {
            assert!(!bucket.is_empty(), "empty buckets must be omitted");
            regathered.extend(bucket);
        }
        assert_eq!(regathered.len(), components.len());
        for component in &components {
            assert!(regathered.iter().any(|member| member.id == component.id));
        }
    }

    #[test]
    fn grouping_preserves_relative_order_within_buckets() {
        let components = fixture();
        let groups = group_by_category(&components);
        assert_eq!(names(&groups[&Category::TextInputs]), vec!["Text", "TextField"]);
        assert_eq!(names(&groups[&Category::Buttons]), vec!["Toggle"]);
    }

    #[test]
    fn filtered_grouping_drops_absent_categories() {
        let components = fixture();
        let groups = grouped_catalog(&components, "tex");
        assert_eq!(groups.len(), 1);
        assert_eq!(names(&groups[&Category::TextInputs]), vec!["Text", "TextField"]);
        assert!(!groups.contains_key(&Category::Buttons));
    }

    #[test]
    fn composed_query_is_idempotent() {
        let components = fixture();
        let first = grouped_catalog(&components, "tex");
        let second = grouped_catalog(&components, "tex");
        assert_eq!(first, second);
    }
}
