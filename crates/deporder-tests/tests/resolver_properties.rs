//! Property tests over generated project graphs

use deporder_lib::project::Project;
use deporder_lib::resolver::{DependencyGraph, ResolveError, order_projects, reverse_lookup_projects};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

/// Acyclic projects: `P{i}` may only reference lower indices or `X{j}` names
/// that never get a project
fn acyclic_projects() -> impl Strategy<Value = Vec<Project>> {
    (1usize..24)
        .prop_flat_map(|count| {
            let references = (0..count)
                .map(|i| proptest::collection::vec(0..(i + 3), 0..4))
                .collect::<Vec<_>>();
            (Just(count), references)
        })
        .prop_map(|(count, references)| {
            (0..count)
                .map(|i| {
                    let names: Vec<String> = references[i]
                        .iter()
                        .map(|&r| if r < i { format!("P{r}") } else { format!("X{r}") })
                        .collect();
                    Project::new(format!("P{i}")).with_references(names)
                })
                .collect()
        })
        .prop_shuffle()
}

proptest! {
    #[test]
    fn prop_dependencies_precede_dependents(projects in acyclic_projects()) {
        let order = order_projects(&projects).unwrap();
        let position: HashMap<&str, usize> = order
            .valid
            .iter()
            .enumerate()
            .map(|(i, key)| (key.as_str(), i))
            .collect();

        for project in &projects {
            for reference in &project.project_references {
                if let Some(&dependency) = position.get(reference.as_str()) {
                    prop_assert!(dependency < position[project.name.as_str()]);
                }
            }
        }
    }

    #[test]
    fn prop_valid_and_invalid_partition_references(projects in acyclic_projects()) {
        let order = order_projects(&projects).unwrap();
        let names: HashSet<&str> = projects.iter().map(|p| p.name.as_str()).collect();

        prop_assert_eq!(order.valid.len(), projects.len());
        prop_assert!(order.invalid.iter().all(|key| !names.contains(key.as_str())));

        let unique: HashSet<&String> = order.invalid.iter().collect();
        prop_assert_eq!(unique.len(), order.invalid.len());
    }

    #[test]
    fn prop_reverse_index_inverts_references(projects in acyclic_projects()) {
        let index = reverse_lookup_projects(&projects);
        for project in &projects {
            for reference in &project.project_references {
                let dependents = index.get(reference).unwrap_or_default();
                prop_assert!(dependents.contains(&project.name));
            }
        }
    }

    #[test]
    fn prop_cycle_detection_agrees_with_graph(
        edges in proptest::collection::vec((0usize..8, 0usize..8), 0..16)
    ) {
        let projects: Vec<Project> = (0..8)
            .map(|i| {
                let references: Vec<String> = edges
                    .iter()
                    .filter(|(from, _)| *from == i)
                    .map(|(_, to)| format!("P{to}"))
                    .collect();
                Project::new(format!("P{i}")).with_references(references)
            })
            .collect();

        let graph = DependencyGraph::from_items(&projects, Project::key, Project::dependencies).unwrap();
        let ordered = order_projects(&projects);
        prop_assert_eq!(
            graph.has_cycles(),
            matches!(ordered, Err(ResolveError::CircularDependency { .. }))
        );
    }
}
