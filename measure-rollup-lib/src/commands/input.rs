//! The JSON component tree consumed by the `aggregate` command.

use crate::Result;
use crate::coverage::{CoverageMeasuresBuilder, CoverageType};
use crate::engine::{ComponentTree, InMemoryMeasureStore, MeasureStore, NodeId, ProjectTree, Scope};
use crate::measures::Measure;
use crate::metrics::MetricCatalogue;
use camino::Utf8Path;
use ohno::{IntoAppError, bail};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;

const LOG_TARGET: &str = "     input";

/// One component of the tree, with the measures recorded on it.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentInput {
    pub key: String,
    pub scope: Scope,

    #[serde(default)]
    pub measures: BTreeMap<String, MeasureInput>,

    #[serde(default)]
    pub coverage: Vec<CoverageInput>,

    #[serde(default)]
    pub children: Vec<Self>,
}

/// A recorded measure: either a bare number or a value and/or payload.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum MeasureInput {
    Number(f64),
    Detailed(DetailedMeasureInput),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetailedMeasureInput {
    #[serde(default)]
    pub value: Option<f64>,

    #[serde(default)]
    pub data: Option<String>,
}

/// Raw per-line coverage of one family of tests.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoverageInput {
    #[serde(rename = "type")]
    pub coverage_type: CoverageType,

    /// Hit count per line number.
    #[serde(default)]
    pub hits: BTreeMap<u32, u64>,

    /// Branch conditions per line number.
    #[serde(default)]
    pub conditions: BTreeMap<u32, ConditionsInput>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConditionsInput {
    pub total: u32,
    pub covered: u32,
}

/// A tree ready to be aggregated, with its leaf measures already recorded.
#[derive(Debug)]
pub struct LoadedProject {
    pub tree: ProjectTree,
    pub store: InMemoryMeasureStore,
}

/// Read a component tree from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid component tree.
pub fn load(path: &Utf8Path) -> Result<ComponentInput> {
    let text = fs::read_to_string(path).into_app_err_with(|| format!("reading input tree '{path}'"))?;
    parse(&text).into_app_err_with(|| format!("parsing input tree '{path}'"))
}

/// Parse a component tree from JSON text.
///
/// # Errors
///
/// Returns an error if the text is not a valid component tree.
pub fn parse(text: &str) -> serde_json::Result<ComponentInput> {
    serde_json::from_str(text)
}

impl ComponentInput {
    /// Build the component tree and record every input measure on it.
    ///
    /// Coverage data is turned into coverage measures first, so a measure given explicitly
    /// for the same metric takes precedence.
    ///
    /// # Errors
    ///
    /// Returns an error if two components share a key, if a child is coarser than its parent,
    /// or if a measure refers to a metric the catalogue does not know or carries neither a value
    /// nor a payload.
    pub fn into_project(self, catalogue: &MetricCatalogue) -> Result<LoadedProject> {
        let mut tree = ProjectTree::new(self.key.as_str(), self.scope);
        let mut store = InMemoryMeasureStore::new();
        let mut seen = FxHashSet::default();

        let root = tree.root();
        record(catalogue, &mut store, root, &self, &mut seen)?;
        add_children(catalogue, &mut tree, &mut store, root, self.children, &mut seen)?;

        log::info!(
            target: LOG_TARGET,
            "Loaded {} component(s) holding {} measure(s)",
            tree.node_count(),
            store.len()
        );

        Ok(LoadedProject { tree, store })
    }
}

fn add_children(
    catalogue: &MetricCatalogue,
    tree: &mut ProjectTree,
    store: &mut InMemoryMeasureStore,
    parent: NodeId,
    children: Vec<ComponentInput>,
    seen: &mut FxHashSet<String>,
) -> Result<()> {
    for mut child in children {
        let node = tree.add_child(parent, child.key.as_str(), child.scope)?;
        record(catalogue, store, node, &child, seen)?;
        let grandchildren = core::mem::take(&mut child.children);
        add_children(catalogue, tree, store, node, grandchildren, seen)?;
    }

    Ok(())
}

fn record(
    catalogue: &MetricCatalogue,
    store: &mut InMemoryMeasureStore,
    node: NodeId,
    component: &ComponentInput,
    seen: &mut FxHashSet<String>,
) -> Result<()> {
    if !seen.insert(component.key.clone()) {
        bail!("component '{}' appears more than once in the input tree", component.key);
    }

    for coverage in &component.coverage {
        let mut builder = CoverageMeasuresBuilder::new();
        for (&line, &hits) in &coverage.hits {
            let _ = builder.set_hits(line, hits);
        }
        for (&line, conditions) in &coverage.conditions {
            let _ = builder.set_conditions(line, conditions.total, conditions.covered);
        }

        for measure in builder.create_measures(coverage.coverage_type) {
            store.set(node, measure);
        }
    }

    for (metric_key, input) in &component.measures {
        let Some(metric) = catalogue.get(metric_key) else {
            bail!("component '{}' records a measure for unknown metric '{metric_key}'", component.key);
        };

        let (value, data) = match input {
            MeasureInput::Number(value) => (Some(*value), None),
            MeasureInput::Detailed(DetailedMeasureInput { value: None, data: None }) => {
                bail!("measure '{metric_key}' of component '{}' has neither a value nor data", component.key);
            }
            MeasureInput::Detailed(detailed) => (detailed.value, detailed.data.clone()),
        };

        let value_type = metric.value_type();
        if value.is_some() && !value_type.is_numeric() {
            bail!(
                "measure '{metric_key}' of component '{}' has a numeric value but the metric holds {value_type} data",
                component.key
            );
        }
        if data.is_some() && !value_type.is_data() {
            bail!(
                "measure '{metric_key}' of component '{}' has data but the metric holds {value_type} values",
                component.key
            );
        }

        let mut measure = Measure::new(metric.key());
        measure.set_value(value)?;
        measure.set_data(data);

        store.set(node, measure);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::keys;

    const SMALL_TREE: &str = r#"
    {
      "key": "demo",
      "scope": "project",
      "children": [
        {
          "key": "src",
          "scope": "directory",
          "children": [
            {
              "key": "src/lib.rs",
              "scope": "file",
              "measures": {
                "ncloc": 100,
                "function_complexity_distribution": { "data": "1=3;2=1;4=0" }
              },
              "coverage": [
                { "type": "unit", "hits": { "1": 3, "2": 0, "3": 1 }, "conditions": { "1": { "total": 2, "covered": 1 } } }
              ]
            }
          ]
        }
      ]
    }"#;

    fn catalogue() -> MetricCatalogue {
        MetricCatalogue::default()
    }

    #[test]
    fn test_builds_tree_and_records_measures() {
        let project = parse(SMALL_TREE).unwrap().into_project(&catalogue()).unwrap();

        assert_eq!(project.tree.node_count(), 3);
        let lib = project.tree.find("src/lib.rs").unwrap();
        assert_eq!(project.tree.scope(lib), Scope::File);
        assert_eq!(project.tree.depth(lib), 2);

        assert_eq!(project.store.get(lib, keys::NCLOC).and_then(Measure::value), Some(100.0));
        assert_eq!(
            project.store.get(lib, keys::FUNCTION_COMPLEXITY_DISTRIBUTION).and_then(Measure::data),
            Some("1=3;2=1;4=0")
        );
    }

    #[test]
    fn test_coverage_becomes_measures() {
        let project = parse(SMALL_TREE).unwrap().into_project(&catalogue()).unwrap();
        let lib = project.tree.find("src/lib.rs").unwrap();

        assert_eq!(project.store.get(lib, keys::LINES_TO_COVER).and_then(Measure::value), Some(3.0));
        assert_eq!(project.store.get(lib, keys::UNCOVERED_LINES).and_then(Measure::value), Some(1.0));
        assert_eq!(project.store.get(lib, keys::CONDITIONS_TO_COVER).and_then(Measure::value), Some(2.0));
        assert_eq!(project.store.get(lib, keys::COVERAGE_LINE_HITS_DATA).and_then(Measure::data), Some("1=3;2=0;3=1"));
    }

    #[test]
    fn test_explicit_measure_wins_over_coverage() {
        let text = r#"{ "key": "f", "scope": "file",
            "measures": { "lines_to_cover": 10 },
            "coverage": [ { "type": "unit", "hits": { "1": 1 } } ] }"#;
        let project = parse(text).unwrap().into_project(&catalogue()).unwrap();
        let root = project.tree.root();

        assert_eq!(project.store.get(root, keys::LINES_TO_COVER).and_then(Measure::value), Some(10.0));
    }

    #[test]
    fn test_unknown_metric_is_rejected() {
        let text = r#"{ "key": "f", "scope": "file", "measures": { "nonsense": 1 } }"#;
        let message = parse(text).unwrap().into_project(&catalogue()).unwrap_err().to_string();
        assert!(message.contains("nonsense"), "{message}");
    }

    #[test]
    fn test_empty_measure_is_rejected() {
        let text = r#"{ "key": "f", "scope": "file", "measures": { "ncloc": {} } }"#;
        assert!(parse(text).unwrap().into_project(&catalogue()).is_err());
    }

    #[test]
    fn test_measure_kind_must_match_value_type() {
        let number_for_distribution = r#"{ "key": "f", "scope": "file", "measures": { "function_complexity_distribution": 3 } }"#;
        let message = parse(number_for_distribution).unwrap().into_project(&catalogue()).unwrap_err().to_string();
        assert!(message.contains("function_complexity_distribution"), "{message}");

        let data_for_count = r#"{ "key": "f", "scope": "file", "measures": { "ncloc": { "data": "12" } } }"#;
        assert!(parse(data_for_count).unwrap().into_project(&catalogue()).is_err());

        let value_for_count = r#"{ "key": "f", "scope": "file", "measures": { "ncloc": { "value": 12 } } }"#;
        assert!(parse(value_for_count).unwrap().into_project(&catalogue()).is_ok());
    }

    #[test]
    fn test_duplicate_component_is_rejected() {
        let text = r#"{ "key": "p", "scope": "project", "children": [
            { "key": "a.rs", "scope": "file" }, { "key": "a.rs", "scope": "file" } ] }"#;
        assert!(parse(text).unwrap().into_project(&catalogue()).is_err());
    }

    #[test]
    fn test_coarser_child_is_rejected() {
        let text = r#"{ "key": "p", "scope": "directory", "children": [ { "key": "q", "scope": "project" } ] }"#;
        assert!(parse(text).unwrap().into_project(&catalogue()).is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(parse(r#"{ "key": "p" }"#).is_err());
        assert!(parse(r#"{ "key": "p", "scope": "galaxy" }"#).is_err());
        assert!(parse(r#"{ "key": "p", "scope": "file", "colour": "red" }"#).is_err());
    }
}
