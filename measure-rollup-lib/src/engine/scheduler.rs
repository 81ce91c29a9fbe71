use super::{ComponentTree, MeasureStore};
use crate::formulas::{FormulaContext, FormulaData};
use crate::metrics::MetricCatalogue;
use std::time::Instant;

const LOG_TARGET: &str = " scheduler";

/// What one [`aggregate`] pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationSummary {
    /// Metrics whose formula ran.
    pub metrics_evaluated: usize,

    /// Nodes visited per metric.
    pub nodes_visited: usize,

    /// Measures written to the store.
    pub measures_computed: usize,
}

/// Derive every computed metric of the catalogue for every node of the tree.
///
/// Metrics are evaluated in the catalogue's evaluation order and nodes in post-order,
/// so a formula always sees its dependencies and the results of its children.
pub fn aggregate(catalogue: &MetricCatalogue, tree: &dyn ComponentTree, store: &mut dyn MeasureStore) -> AggregationSummary {
    let start = Instant::now();
    let nodes = tree.post_order();
    let mut summary = AggregationSummary {
        nodes_visited: nodes.len(),
        ..AggregationSummary::default()
    };

    for metric in catalogue.evaluation_order() {
        let Some(formula) = metric.formula() else {
            continue;
        };

        let ctx = FormulaContext::new(metric);
        let mut computed = 0;

        for &node in &nodes {
            let result = formula.calculate(&FormulaData::new(tree, &*store, node), &ctx);
            if let Some(measure) = result {
                store.set(node, measure);
                computed += 1;
            }
        }

        log::debug!(target: LOG_TARGET, "Computed {computed} '{}' measure(s)", metric.key());
        summary.metrics_evaluated += 1;
        summary.measures_computed += computed;
    }

    log::info!(
        target: LOG_TARGET,
        "Aggregated {} metric(s) over {} node(s) in {:.3}s, {} measure(s) computed",
        summary.metrics_evaluated,
        summary.nodes_visited,
        start.elapsed().as_secs_f64(),
        summary.measures_computed
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{InMemoryMeasureStore, NodeId, ProjectTree, Scope};
    use crate::formulas::Formula;
    use crate::measures::{Measure, PersistenceMode};
    use crate::metrics::{Metric, ValueType, keys};

    struct Fixture {
        tree: ProjectTree,
        store: InMemoryMeasureStore,
        src: NodeId,
        lib: NodeId,
        main: NodeId,
        tests: NodeId,
    }

    fn fixture() -> Fixture {
        let mut tree = ProjectTree::new("project", Scope::Project);
        let root = tree.root();
        let src = tree.add_child(root, "src", Scope::Directory).unwrap();
        let lib = tree.add_child(src, "src/lib.rs", Scope::File).unwrap();
        let main = tree.add_child(src, "src/main.rs", Scope::File).unwrap();
        let tests_dir = tree.add_child(root, "tests", Scope::Directory).unwrap();
        let tests = tree.add_child(tests_dir, "tests/it.rs", Scope::File).unwrap();

        let mut store = InMemoryMeasureStore::new();
        for (node, ncloc, complexity, files, functions) in [(lib, 100, 12, 1, 4), (main, 20, 3, 1, 1), (tests, 30, 5, 1, 0)] {
            store.set(node, Measure::with_count(keys::NCLOC, ncloc));
            store.set(node, Measure::with_count(keys::COMPLEXITY, complexity));
            store.set(node, Measure::with_count(keys::FILES, files));
            store.set(node, Measure::with_count(keys::FUNCTIONS, functions));
        }
        store.set(lib, Measure::with_data(keys::FUNCTION_COMPLEXITY_DISTRIBUTION, "1=3;2=1;4=0"));
        store.set(main, Measure::with_data(keys::FUNCTION_COMPLEXITY_DISTRIBUTION, "1=0;2=0;4=1"));

        Fixture {
            tree,
            store,
            src,
            lib,
            main,
            tests,
        }
    }

    fn value(store: &InMemoryMeasureStore, node: NodeId, key: &str) -> Option<f64> {
        store.get(node, key).and_then(Measure::value)
    }

    #[test]
    fn test_full_aggregation() {
        let Fixture { tree, mut store, src, lib, .. } = fixture();
        let root = tree.root();

        let summary = aggregate(&MetricCatalogue::default(), &tree, &mut store);
        assert_eq!(summary.nodes_visited, 6);
        assert!(summary.measures_computed > 0);

        assert_eq!(value(&store, src, keys::NCLOC), Some(120.0));
        assert_eq!(value(&store, root, keys::NCLOC), Some(150.0));
        assert_eq!(value(&store, root, keys::COMPLEXITY), Some(20.0));
        assert_eq!(value(&store, root, keys::FILES), Some(3.0));

        // leaf averages come from the file itself
        assert_eq!(value(&store, lib, keys::FILE_COMPLEXITY), Some(12.0));
        assert_eq!(value(&store, lib, keys::FUNCTION_COMPLEXITY), Some(3.0));

        // aggregate averages are ratios of sums over children
        assert_eq!(value(&store, src, keys::FILE_COMPLEXITY), Some(7.5));
        assert_eq!(value(&store, root, keys::FILE_COMPLEXITY), Some(6.7));
        assert_eq!(value(&store, src, keys::FUNCTION_COMPLEXITY), Some(3.0));
        assert_eq!(value(&store, root, keys::FUNCTION_COMPLEXITY), Some(3.0));

        let distribution = store.get(root, keys::FUNCTION_COMPLEXITY_DISTRIBUTION).unwrap();
        assert_eq!(distribution.data(), Some("1=3;2=1;4=1"));
        assert_eq!(distribution.persistence_mode(), PersistenceMode::Durable);
    }

    #[test]
    fn test_leaf_measures_are_never_overwritten() {
        let Fixture { tree, mut store, src, lib, .. } = fixture();
        store.set(src, Measure::with_count(keys::NCLOC, 999));

        let _ = aggregate(&MetricCatalogue::default(), &tree, &mut store);

        assert_eq!(value(&store, src, keys::NCLOC), Some(999.0));
        assert_eq!(value(&store, tree.root(), keys::NCLOC), Some(1029.0));
        assert_eq!(value(&store, lib, keys::NCLOC), Some(100.0));
    }

    #[test]
    fn test_missing_inputs_yield_no_measure() {
        let Fixture { tree, mut store, main, tests, .. } = fixture();
        let _ = aggregate(&MetricCatalogue::default(), &tree, &mut store);

        // no functions in the test file means no per-function average there
        assert!(store.get(tests, keys::FUNCTION_COMPLEXITY).is_none());
        assert!(store.get(main, keys::LINES).is_none());
        assert!(store.get(tree.root(), keys::LINES).is_none());
        assert!(store.get(tree.root(), keys::CLASS_COMPLEXITY_DISTRIBUTION).is_none());
    }

    #[test]
    fn test_running_twice_computes_nothing_new() {
        let Fixture { tree, mut store, .. } = fixture();
        let catalogue = MetricCatalogue::default();

        let first = aggregate(&catalogue, &tree, &mut store);
        let snapshot = store.clone();
        let second = aggregate(&catalogue, &tree, &mut store);

        assert!(first.measures_computed > 0);
        assert_eq!(second.measures_computed, 0);
        assert_eq!(store.len(), snapshot.len());
    }

    #[test]
    fn test_dependency_chain_through_user_metrics() {
        let unsafe_blocks = Metric::builder("unsafe_blocks", "Unsafe blocks", ValueType::Int)
            .formula(Formula::sum_child_values(true))
            .build()
            .unwrap();
        let unsafe_density = Metric::builder("unsafe_per_kloc", "Unsafe blocks per line", ValueType::Float)
            .formula(Formula::average("unsafe_blocks", keys::NCLOC))
            .build()
            .unwrap();

        // registered in the wrong order on purpose
        let catalogue = MetricCatalogue::with_metrics([unsafe_density, unsafe_blocks]).unwrap();
        let Fixture { tree, mut store, lib, main, .. } = fixture();
        store.set(lib, Measure::with_count("unsafe_blocks", 10));
        store.set(main, Measure::with_count("unsafe_blocks", 2));

        let _ = aggregate(&catalogue, &tree, &mut store);

        assert_eq!(value(&store, tree.root(), "unsafe_blocks"), Some(12.0));
        assert_eq!(value(&store, tree.root(), "unsafe_per_kloc"), Some(0.1));
    }

    #[test]
    fn test_memory_only_below_minimum_scope() {
        let metric = Metric::builder("rfc_distribution", "RFC distribution", ValueType::Distrib)
            .formula(Formula::sum_child_distribution(Scope::Project))
            .build()
            .unwrap();
        let catalogue = MetricCatalogue::new(vec![metric]).unwrap();

        let Fixture { tree, mut store, src, lib, .. } = fixture();
        store.set(lib, Measure::with_data("rfc_distribution", "0=1;10=2"));

        let _ = aggregate(&catalogue, &tree, &mut store);

        let directory = store.get(src, "rfc_distribution").unwrap();
        assert_eq!(directory.data(), Some("0=1;10=2"));
        assert_eq!(directory.persistence_mode(), PersistenceMode::MemoryOnly);

        let project = store.get(tree.root(), "rfc_distribution").unwrap();
        assert_eq!(project.persistence_mode(), PersistenceMode::Durable);
    }
}
