use crate::engine::{ComponentTree, InMemoryMeasureStore, MeasureStore, NodeId, ProjectTree, Scope};
use crate::formulas::{Formula, FormulaContext, FormulaData};
use crate::measures::Measure;
use crate::metrics::{Metric, ValueType};

/// A project holding one directory of files, for exercising formulas on a single node.
pub struct Harness {
    tree: ProjectTree,
    store: InMemoryMeasureStore,
    directory: NodeId,
    files: Vec<NodeId>,
}

impl Harness {
    pub fn directory_with_files(count: usize) -> Self {
        let mut tree = ProjectTree::new("project", Scope::Project);
        let directory = tree.add_child(tree.root(), "src", Scope::Directory).unwrap();
        let files = (0..count)
            .map(|i| tree.add_child(directory, format!("src/file{i}.rs"), Scope::File).unwrap())
            .collect();

        Self {
            tree,
            store: InMemoryMeasureStore::new(),
            directory,
            files,
        }
    }

    pub fn set_file_value(&mut self, file: usize, key: &str, value: f64) {
        self.store.set(self.files[file], Measure::with_value(key, value).unwrap());
    }

    pub fn set_file_data(&mut self, file: usize, key: &str, data: &str) {
        self.store.set(self.files[file], Measure::with_data(key, data));
    }

    pub fn set_directory_value(&mut self, key: &str, value: f64) {
        self.store.set(self.directory, Measure::with_value(key, value).unwrap());
    }

    pub fn calculate_on_directory(&self, formula: &Formula, metric: &Metric) -> Option<Measure> {
        self.calculate(self.directory, formula, metric)
    }

    pub fn calculate_on_file(&self, file: usize, formula: &Formula, metric: &Metric) -> Option<Measure> {
        self.calculate(self.files[file], formula, metric)
    }

    fn calculate(&self, node: NodeId, formula: &Formula, metric: &Metric) -> Option<Measure> {
        let data = FormulaData::new(&self.tree, &self.store, node);
        formula.calculate(&data, &FormulaContext::new(metric))
    }
}

pub fn metric(key: &str) -> Metric {
    Metric::builder(key, key, ValueType::Float).build().unwrap()
}

pub fn distribution_metric(key: &str) -> Metric {
    Metric::builder(key, key, ValueType::Distrib).build().unwrap()
}
