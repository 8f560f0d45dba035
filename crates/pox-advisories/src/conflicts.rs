//! Grouping advisories into components and computing their conflict rules

use indexmap::IndexMap;

use crate::advisory::Advisory;
use crate::component::Component;
use crate::error::Result;

/// Group advisories by component name, keeping the order in which names first appear
pub fn build_components(advisories: Vec<Advisory>) -> IndexMap<String, Component> {
    let mut indexed: IndexMap<String, Vec<Advisory>> = IndexMap::new();

    for advisory in advisories {
        indexed
            .entry(advisory.component_name().to_string())
            .or_default()
            .push(advisory);
    }

    indexed
        .into_iter()
        .map(|(name, advisories)| {
            let component = Component::new(name.clone(), advisories);
            (name, component)
        })
        .collect()
}

/// Compute the conflict rule of every component.
///
/// Components whose rule is empty are left out.
pub fn build_conflicts(components: &IndexMap<String, Component>) -> Result<IndexMap<String, String>> {
    let mut conflicts = IndexMap::new();

    for component in components.values() {
        let constraint = component.conflict_constraint()?;
        if constraint.is_empty() {
            log::debug!("No conflict rule for {}", component.name());
            continue;
        }

        log::trace!("{}: {}", component.name(), constraint);
        conflicts.insert(component.name().to_string(), constraint);
    }

    Ok(conflicts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::VersionConstraint;

    fn advisory(name: &str, constraints: &[&str]) -> Advisory {
        Advisory::new(
            name,
            constraints.iter().map(|c| VersionConstraint::parse(c)).collect(),
        )
    }

    #[test]
    fn test_build_components_groups_by_name() {
        let components = build_components(vec![
            advisory("b/b", &["<1"]),
            advisory("a/a", &["<2"]),
            advisory("b/b", &[">=3,<4"]),
        ]);

        let names: Vec<&String> = components.keys().collect();
        assert_eq!(names, vec!["b/b", "a/a"]);
        assert_eq!(components["b/b"].advisories().len(), 2);
        assert_eq!(components["a/a"].advisories().len(), 1);
    }

    #[test]
    fn test_build_conflicts() {
        let components = build_components(vec![
            advisory("b/b", &["<1"]),
            advisory("a/a", &["<2"]),
            advisory("b/b", &["<0.5", ">=3,<4"]),
        ]);

        let conflicts = build_conflicts(&components).unwrap();
        assert_eq!(conflicts.len(), 2);
        assert_eq!(conflicts["b/b"], "<1|>=3,<4");
        assert_eq!(conflicts["a/a"], "<2");
    }

    #[test]
    fn test_build_conflicts_omits_empty_rules() {
        let components = build_components(vec![
            advisory("a/a", &["<3", ">2"]),
            advisory("b/b", &[]),
            advisory("c/c", &[">1"]),
        ]);

        let conflicts = build_conflicts(&components).unwrap();
        let names: Vec<&String> = conflicts.keys().collect();
        assert_eq!(names, vec!["c/c"]);
    }
}
