use super::{Direction, Metric, ValueType};
use crate::Result;
use crate::engine::Scope;
use crate::formulas::Formula;

/// Stable metric keys.
///
/// These strings are referenced by stored data and by external callers, so they must never change.
pub mod keys {
    pub const LINES: &str = "lines";
    pub const GENERATED_LINES: &str = "generated_lines";
    pub const NCLOC: &str = "ncloc";
    pub const GENERATED_NCLOC: &str = "generated_ncloc";
    pub const CLASSES: &str = "classes";
    pub const FILES: &str = "files";
    pub const DIRECTORIES: &str = "directories";
    pub const FUNCTIONS: &str = "functions";
    pub const ACCESSORS: &str = "accessors";
    pub const STATEMENTS: &str = "statements";
    pub const PUBLIC_API: &str = "public_api";
    pub const COMMENT_LINES: &str = "comment_lines";
    pub const COMMENT_LINES_DENSITY: &str = "comment_lines_density";
    pub const COMMENT_BLANK_LINES: &str = "comment_blank_lines";
    pub const PUBLIC_UNDOCUMENTED_API: &str = "public_undocumented_api";
    pub const COMMENTED_OUT_CODE_LINES: &str = "commented_out_code_lines";

    pub const COMPLEXITY: &str = "complexity";
    pub const COMPLEXITY_IN_CLASSES: &str = "complexity_in_classes";
    pub const COMPLEXITY_IN_FUNCTIONS: &str = "complexity_in_functions";
    pub const CLASS_COMPLEXITY: &str = "class_complexity";
    pub const FUNCTION_COMPLEXITY: &str = "function_complexity";
    pub const FILE_COMPLEXITY: &str = "file_complexity";
    pub const CLASS_COMPLEXITY_DISTRIBUTION: &str = "class_complexity_distribution";
    pub const FUNCTION_COMPLEXITY_DISTRIBUTION: &str = "function_complexity_distribution";
    pub const FILE_COMPLEXITY_DISTRIBUTION: &str = "file_complexity_distribution";

    pub const TESTS: &str = "tests";
    pub const TEST_EXECUTION_TIME: &str = "test_execution_time";
    pub const TEST_ERRORS: &str = "test_errors";
    pub const SKIPPED_TESTS: &str = "skipped_tests";
    pub const TEST_FAILURES: &str = "test_failures";
    pub const TEST_SUCCESS_DENSITY: &str = "test_success_density";
    pub const TEST_DATA: &str = "test_data";

    pub const COVERAGE: &str = "coverage";
    pub const LINES_TO_COVER: &str = "lines_to_cover";
    pub const UNCOVERED_LINES: &str = "uncovered_lines";
    pub const LINE_COVERAGE: &str = "line_coverage";
    pub const COVERAGE_LINE_HITS_DATA: &str = "coverage_line_hits_data";
    pub const CONDITIONS_TO_COVER: &str = "conditions_to_cover";
    pub const UNCOVERED_CONDITIONS: &str = "uncovered_conditions";
    pub const BRANCH_COVERAGE: &str = "branch_coverage";
    pub const CONDITIONS_BY_LINE: &str = "conditions_by_line";
    pub const COVERED_CONDITIONS_BY_LINE: &str = "covered_conditions_by_line";

    pub const IT_COVERAGE: &str = "it_coverage";
    pub const IT_LINES_TO_COVER: &str = "it_lines_to_cover";
    pub const IT_UNCOVERED_LINES: &str = "it_uncovered_lines";
    pub const IT_LINE_COVERAGE: &str = "it_line_coverage";
    pub const IT_COVERAGE_LINE_HITS_DATA: &str = "it_coverage_line_hits_data";
    pub const IT_CONDITIONS_TO_COVER: &str = "it_conditions_to_cover";
    pub const IT_UNCOVERED_CONDITIONS: &str = "it_uncovered_conditions";
    pub const IT_BRANCH_COVERAGE: &str = "it_branch_coverage";
    pub const IT_CONDITIONS_BY_LINE: &str = "it_conditions_by_line";
    pub const IT_COVERED_CONDITIONS_BY_LINE: &str = "it_covered_conditions_by_line";

    pub const OVERALL_COVERAGE: &str = "overall_coverage";
    pub const OVERALL_LINES_TO_COVER: &str = "overall_lines_to_cover";
    pub const OVERALL_UNCOVERED_LINES: &str = "overall_uncovered_lines";
    pub const OVERALL_LINE_COVERAGE: &str = "overall_line_coverage";
    pub const OVERALL_COVERAGE_LINE_HITS_DATA: &str = "overall_coverage_line_hits_data";
    pub const OVERALL_CONDITIONS_TO_COVER: &str = "overall_conditions_to_cover";
    pub const OVERALL_UNCOVERED_CONDITIONS: &str = "overall_uncovered_conditions";
    pub const OVERALL_BRANCH_COVERAGE: &str = "overall_branch_coverage";
    pub const OVERALL_CONDITIONS_BY_LINE: &str = "overall_conditions_by_line";
    pub const OVERALL_COVERED_CONDITIONS_BY_LINE: &str = "overall_covered_conditions_by_line";

    pub const DUPLICATED_LINES: &str = "duplicated_lines";
    pub const DUPLICATED_BLOCKS: &str = "duplicated_blocks";
    pub const DUPLICATED_FILES: &str = "duplicated_files";
    pub const DUPLICATED_LINES_DENSITY: &str = "duplicated_lines_density";

    pub const WEIGHTED_VIOLATIONS: &str = "weighted_violations";
    pub const VIOLATIONS_DENSITY: &str = "violations_density";
    pub const VIOLATIONS: &str = "violations";
    pub const BLOCKER_VIOLATIONS: &str = "blocker_violations";
    pub const CRITICAL_VIOLATIONS: &str = "critical_violations";
    pub const MAJOR_VIOLATIONS: &str = "major_violations";
    pub const MINOR_VIOLATIONS: &str = "minor_violations";
    pub const INFO_VIOLATIONS: &str = "info_violations";

    pub const RFC: &str = "rfc";
    pub const RFC_DISTRIBUTION: &str = "rfc_distribution";
    pub const LCOM4: &str = "lcom4";
    pub const LCOM4_DISTRIBUTION: &str = "lcom4_distribution";

    pub const ALERT_STATUS: &str = "alert_status";
    pub const PROFILE: &str = "profile";
}

pub const DOMAIN_SIZE: &str = "Size";
pub const DOMAIN_TESTS: &str = "Tests";
pub const DOMAIN_INTEGRATION_TESTS: &str = "Tests (Integration)";
pub const DOMAIN_OVERALL_TESTS: &str = "Tests (Overall)";
pub const DOMAIN_COMPLEXITY: &str = "Complexity";
pub const DOMAIN_DOCUMENTATION: &str = "Documentation";
pub const DOMAIN_RULES: &str = "Rules";
pub const DOMAIN_GENERAL: &str = "General";
pub const DOMAIN_DUPLICATION: &str = "Duplication";
pub const DOMAIN_DESIGN: &str = "Design";

/// Static description of a built-in metric.
#[derive(Debug)]
pub struct MetricDef {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub value_type: ValueType,
    pub direction: Direction,
    pub domain: &'static str,
    pub qualitative: bool,
    pub best_value: Option<f64>,
    pub worst_value: Option<f64>,
    pub optimized_best_value: bool,
    pub hidden: bool,
    pub formula: Option<fn() -> Formula>,
}

impl MetricDef {
    const fn new(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        value_type: ValueType,
        direction: Direction,
        domain: &'static str,
    ) -> Self {
        Self {
            key,
            name,
            description,
            value_type,
            direction,
            domain,
            qualitative: false,
            best_value: None,
            worst_value: None,
            optimized_best_value: false,
            hidden: false,
            formula: None,
        }
    }

    const fn qualitative(mut self) -> Self {
        self.qualitative = true;
        self
    }

    const fn best(mut self, value: f64) -> Self {
        self.best_value = Some(value);
        self
    }

    const fn worst(mut self, value: f64) -> Self {
        self.worst_value = Some(value);
        self
    }

    const fn optimized(mut self) -> Self {
        self.optimized_best_value = true;
        self
    }

    const fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    const fn formula(mut self, formula: fn() -> Formula) -> Self {
        self.formula = Some(formula);
        self
    }

    /// Turn the static description into a [`Metric`].
    ///
    /// # Errors
    ///
    /// Returns an error if the definition has a blank key or name.
    pub fn to_metric(&self) -> Result<Metric> {
        let mut builder = Metric::builder(self.key, self.name, self.value_type)
            .description(self.description)
            .direction(self.direction)
            .domain(self.domain)
            .qualitative(self.qualitative)
            .optimized_best_value(self.optimized_best_value)
            .hidden(self.hidden);

        if let Some(best) = self.best_value {
            builder = builder.best_value(best);
        }

        if let Some(worst) = self.worst_value {
            builder = builder.worst_value(worst);
        }

        if let Some(formula) = self.formula {
            builder = builder.formula(formula());
        }

        builder.build()
    }
}

const fn sum(key: &'static str, name: &'static str, description: &'static str, domain: &'static str) -> MetricDef {
    MetricDef::new(key, name, description, ValueType::Int, Direction::Worst, domain).formula(|| Formula::sum_child_values(false))
}

const fn complexity_distribution(key: &'static str, name: &'static str) -> MetricDef {
    MetricDef::new(key, name, name, ValueType::Distrib, Direction::None, DOMAIN_COMPLEXITY)
        .qualitative()
        .formula(|| Formula::sum_child_distribution(Scope::Directory))
}

pub const METRIC_DEFINITIONS: &[MetricDef] = &[
    // size
    sum(keys::LINES, "Lines", "Lines", DOMAIN_SIZE),
    sum(keys::GENERATED_LINES, "Generated Lines", "Number of generated lines", DOMAIN_SIZE)
        .best(0.0)
        .optimized(),
    sum(keys::NCLOC, "Lines of code", "Non commenting lines of code", DOMAIN_SIZE),
    sum(keys::GENERATED_NCLOC, "Generated lines of code", "Generated non commenting lines of code", DOMAIN_SIZE)
        .best(0.0)
        .optimized(),
    sum(keys::CLASSES, "Classes", "Classes", DOMAIN_SIZE),
    sum(keys::FILES, "Files", "Number of files", DOMAIN_SIZE),
    sum(keys::DIRECTORIES, "Directories", "Directories", DOMAIN_SIZE),
    sum(keys::FUNCTIONS, "Methods", "Methods", DOMAIN_SIZE),
    sum(keys::ACCESSORS, "Accessors", "Accessors", DOMAIN_SIZE),
    sum(keys::STATEMENTS, "Statements", "Number of statements", DOMAIN_SIZE),
    sum(keys::PUBLIC_API, "Public API", "Public API", DOMAIN_SIZE),
    MetricDef::new(keys::COMMENT_LINES, "Comment lines", "Number of comment lines", ValueType::Int, Direction::Better, DOMAIN_DOCUMENTATION)
        .formula(|| Formula::sum_child_values(false)),
    MetricDef::new(keys::COMMENT_LINES_DENSITY, "Comments (%)", "Comments balanced by ncloc + comment lines", ValueType::Percent, Direction::Better, DOMAIN_DOCUMENTATION)
        .qualitative(),
    sum(keys::COMMENT_BLANK_LINES, "Blank comments", "Comments that do not contain comments", DOMAIN_DOCUMENTATION)
        .qualitative()
        .best(0.0)
        .optimized(),
    sum(keys::PUBLIC_UNDOCUMENTED_API, "Public undocumented API", "Public undocumented classes, functions and variables", DOMAIN_DOCUMENTATION)
        .qualitative()
        .best(0.0)
        .optimized(),
    sum(keys::COMMENTED_OUT_CODE_LINES, "Commented-out LOC", "Commented lines of code", DOMAIN_DOCUMENTATION)
        .qualitative()
        .best(0.0)
        .optimized(),
    // complexity
    sum(keys::COMPLEXITY, "Complexity", "Cyclomatic complexity", DOMAIN_COMPLEXITY),
    sum(keys::COMPLEXITY_IN_CLASSES, "Complexity in classes", "Cyclomatic complexity in classes", DOMAIN_COMPLEXITY).hidden(),
    sum(keys::COMPLEXITY_IN_FUNCTIONS, "Complexity in functions", "Cyclomatic complexity in methods", DOMAIN_COMPLEXITY).hidden(),
    MetricDef::new(keys::CLASS_COMPLEXITY, "Complexity /class", "Complexity average by class", ValueType::Float, Direction::Worst, DOMAIN_COMPLEXITY)
        .qualitative()
        .formula(|| Formula::average_with_fallback(keys::COMPLEXITY_IN_CLASSES, keys::CLASSES, keys::COMPLEXITY)),
    MetricDef::new(keys::FUNCTION_COMPLEXITY, "Complexity /method", "Complexity average by method", ValueType::Float, Direction::Worst, DOMAIN_COMPLEXITY)
        .qualitative()
        .formula(|| Formula::average_with_fallback(keys::COMPLEXITY_IN_FUNCTIONS, keys::FUNCTIONS, keys::COMPLEXITY)),
    MetricDef::new(keys::FILE_COMPLEXITY, "Complexity /file", "Complexity average by file", ValueType::Float, Direction::Worst, DOMAIN_COMPLEXITY)
        .qualitative()
        .formula(|| Formula::average(keys::COMPLEXITY, keys::FILES)),
    complexity_distribution(keys::CLASS_COMPLEXITY_DISTRIBUTION, "Classes distribution /complexity"),
    complexity_distribution(keys::FUNCTION_COMPLEXITY_DISTRIBUTION, "Functions distribution /complexity"),
    complexity_distribution(keys::FILE_COMPLEXITY_DISTRIBUTION, "Files distribution /complexity"),
    // tests
    sum(keys::TESTS, "Unit tests", "Number of unit tests", DOMAIN_TESTS),
    MetricDef::new(keys::TEST_EXECUTION_TIME, "Unit tests duration", "Execution duration of unit tests", ValueType::Millisec, Direction::Worst, DOMAIN_TESTS)
        .formula(|| Formula::sum_child_values(false)),
    sum(keys::TEST_ERRORS, "Unit test errors", "Number of unit test errors", DOMAIN_TESTS)
        .qualitative()
        .best(0.0)
        .optimized(),
    sum(keys::SKIPPED_TESTS, "Skipped unit tests", "Number of skipped unit tests", DOMAIN_TESTS)
        .qualitative()
        .best(0.0)
        .optimized(),
    sum(keys::TEST_FAILURES, "Unit test failures", "Number of unit test failures", DOMAIN_TESTS)
        .qualitative()
        .best(0.0)
        .optimized(),
    MetricDef::new(keys::TEST_SUCCESS_DENSITY, "Unit test success (%)", "Density of successful unit tests", ValueType::Percent, Direction::Better, DOMAIN_TESTS)
        .qualitative()
        .optimized(),
    MetricDef::new(keys::TEST_DATA, "Unit tests details", "Unit tests details", ValueType::Data, Direction::Worst, DOMAIN_TESTS),
    // unit test coverage
    MetricDef::new(keys::COVERAGE, "Coverage", "Coverage by unit tests", ValueType::Percent, Direction::Better, DOMAIN_TESTS).qualitative(),
    MetricDef::new(keys::LINES_TO_COVER, "Lines to cover", "Lines to cover", ValueType::Int, Direction::Better, DOMAIN_TESTS)
        .formula(|| Formula::sum_child_values(false)),
    sum(keys::UNCOVERED_LINES, "Uncovered lines", "Uncovered lines", DOMAIN_TESTS).best(0.0),
    MetricDef::new(keys::LINE_COVERAGE, "Line coverage", "Line coverage", ValueType::Percent, Direction::Better, DOMAIN_TESTS).qualitative(),
    MetricDef::new(keys::COVERAGE_LINE_HITS_DATA, "Coverage hits by line", "Coverage hits by line", ValueType::Data, Direction::None, DOMAIN_TESTS),
    MetricDef::new(keys::CONDITIONS_TO_COVER, "Branches to cover", "Branches to cover", ValueType::Int, Direction::Worst, DOMAIN_TESTS)
        .formula(|| Formula::sum_child_values(false)),
    sum(keys::UNCOVERED_CONDITIONS, "Uncovered branches", "Uncovered branches", DOMAIN_TESTS).best(0.0),
    MetricDef::new(keys::BRANCH_COVERAGE, "Branch coverage", "Branch coverage", ValueType::Percent, Direction::Better, DOMAIN_TESTS).qualitative(),
    MetricDef::new(keys::CONDITIONS_BY_LINE, "Conditions by line", "Conditions by line", ValueType::Data, Direction::None, DOMAIN_TESTS),
    MetricDef::new(keys::COVERED_CONDITIONS_BY_LINE, "Covered conditions by line", "Covered conditions by line", ValueType::Data, Direction::None, DOMAIN_TESTS),
    // integration test coverage
    MetricDef::new(keys::IT_COVERAGE, "IT coverage", "Coverage by integration tests", ValueType::Percent, Direction::Better, DOMAIN_INTEGRATION_TESTS).qualitative(),
    MetricDef::new(keys::IT_LINES_TO_COVER, "IT lines to cover", "Lines to cover by integration tests", ValueType::Int, Direction::Better, DOMAIN_INTEGRATION_TESTS)
        .formula(|| Formula::sum_child_values(false)),
    sum(keys::IT_UNCOVERED_LINES, "IT uncovered lines", "Uncovered lines by integration tests", DOMAIN_INTEGRATION_TESTS).best(0.0),
    MetricDef::new(keys::IT_LINE_COVERAGE, "IT line coverage", "Line coverage by integration tests", ValueType::Percent, Direction::Better, DOMAIN_INTEGRATION_TESTS)
        .qualitative(),
    MetricDef::new(keys::IT_COVERAGE_LINE_HITS_DATA, "IT coverage hits by line", "Coverage hits by line by integration tests", ValueType::Data, Direction::None, DOMAIN_INTEGRATION_TESTS),
    MetricDef::new(keys::IT_CONDITIONS_TO_COVER, "IT branches to cover", "Integration Tests conditions to cover", ValueType::Int, Direction::Worst, DOMAIN_INTEGRATION_TESTS)
        .formula(|| Formula::sum_child_values(false)),
    sum(keys::IT_UNCOVERED_CONDITIONS, "IT uncovered branches", "Uncovered conditions by integration tests", DOMAIN_INTEGRATION_TESTS).best(0.0),
    MetricDef::new(keys::IT_BRANCH_COVERAGE, "IT branch coverage", "Branch coverage by integration tests", ValueType::Percent, Direction::Better, DOMAIN_INTEGRATION_TESTS)
        .qualitative(),
    MetricDef::new(keys::IT_CONDITIONS_BY_LINE, "IT conditions by line", "IT conditions by line", ValueType::Data, Direction::None, DOMAIN_INTEGRATION_TESTS),
    MetricDef::new(keys::IT_COVERED_CONDITIONS_BY_LINE, "IT covered conditions by line", "IT covered conditions by line", ValueType::Data, Direction::None, DOMAIN_INTEGRATION_TESTS),
    // overall coverage
    MetricDef::new(keys::OVERALL_COVERAGE, "Overall coverage", "Overall test coverage", ValueType::Percent, Direction::Better, DOMAIN_OVERALL_TESTS).qualitative(),
    MetricDef::new(keys::OVERALL_LINES_TO_COVER, "Overall lines to cover", "Overall lines to cover by all tests", ValueType::Int, Direction::Better, DOMAIN_OVERALL_TESTS)
        .formula(|| Formula::sum_child_values(false)),
    sum(keys::OVERALL_UNCOVERED_LINES, "Overall uncovered lines", "Uncovered lines by all tests", DOMAIN_OVERALL_TESTS).best(0.0),
    MetricDef::new(keys::OVERALL_LINE_COVERAGE, "Overall line coverage", "Line coverage by all tests", ValueType::Percent, Direction::Better, DOMAIN_OVERALL_TESTS)
        .qualitative(),
    MetricDef::new(keys::OVERALL_COVERAGE_LINE_HITS_DATA, "Overall coverage hits by line", "Coverage hits by all tests and by line", ValueType::Data, Direction::None, DOMAIN_OVERALL_TESTS),
    MetricDef::new(keys::OVERALL_CONDITIONS_TO_COVER, "Overall branches to cover", "Branches to cover by all tests", ValueType::Int, Direction::Worst, DOMAIN_OVERALL_TESTS)
        .formula(|| Formula::sum_child_values(false)),
    sum(keys::OVERALL_UNCOVERED_CONDITIONS, "Overall uncovered branches", "Uncovered branches by all tests", DOMAIN_OVERALL_TESTS).best(0.0),
    MetricDef::new(keys::OVERALL_BRANCH_COVERAGE, "Overall branch coverage", "Branch coverage by all tests", ValueType::Percent, Direction::Better, DOMAIN_OVERALL_TESTS)
        .qualitative(),
    MetricDef::new(keys::OVERALL_CONDITIONS_BY_LINE, "Overall conditions by line", "Overall conditions by all tests and by line", ValueType::Data, Direction::None, DOMAIN_OVERALL_TESTS),
    MetricDef::new(keys::OVERALL_COVERED_CONDITIONS_BY_LINE, "Overall covered conditions by line", "Overall covered conditions by all tests and by line", ValueType::Data, Direction::None, DOMAIN_OVERALL_TESTS),
    // duplication
    sum(keys::DUPLICATED_LINES, "Duplicated lines", "Duplicated lines", DOMAIN_DUPLICATION)
        .qualitative()
        .best(0.0)
        .optimized(),
    sum(keys::DUPLICATED_BLOCKS, "Duplicated blocks", "Duplicated blocks", DOMAIN_DUPLICATION)
        .qualitative()
        .best(0.0)
        .optimized(),
    sum(keys::DUPLICATED_FILES, "Duplicated files", "Duplicated files", DOMAIN_DUPLICATION)
        .qualitative()
        .best(0.0)
        .optimized(),
    MetricDef::new(keys::DUPLICATED_LINES_DENSITY, "Duplicated lines (%)", "Duplicated lines balanced by statements", ValueType::Percent, Direction::Worst, DOMAIN_DUPLICATION)
        .qualitative()
        .worst(50.0)
        .optimized(),
    // rules
    sum(keys::WEIGHTED_VIOLATIONS, "Weighted violations", "Weighted Violations", DOMAIN_RULES)
        .qualitative()
        .best(0.0)
        .optimized(),
    MetricDef::new(keys::VIOLATIONS_DENSITY, "Rules compliance", "Rules compliance", ValueType::Percent, Direction::Better, DOMAIN_RULES).qualitative(),
    sum(keys::VIOLATIONS, "Violations", "Violations", DOMAIN_RULES).qualitative().best(0.0).optimized(),
    sum(keys::BLOCKER_VIOLATIONS, "Blocker violations", "Blocker violations", DOMAIN_RULES)
        .qualitative()
        .best(0.0)
        .optimized(),
    sum(keys::CRITICAL_VIOLATIONS, "Critical violations", "Critical violations", DOMAIN_RULES)
        .qualitative()
        .best(0.0)
        .optimized(),
    sum(keys::MAJOR_VIOLATIONS, "Major violations", "Major violations", DOMAIN_RULES)
        .qualitative()
        .best(0.0)
        .optimized(),
    sum(keys::MINOR_VIOLATIONS, "Minor violations", "Minor violations", DOMAIN_RULES)
        .qualitative()
        .best(0.0)
        .optimized(),
    sum(keys::INFO_VIOLATIONS, "Info violations", "Info violations", DOMAIN_RULES)
        .qualitative()
        .best(0.0)
        .optimized(),
    // design
    MetricDef::new(keys::RFC, "RFC", "Response for Class", ValueType::Int, Direction::Worst, DOMAIN_DESIGN)
        .formula(|| Formula::weighted_mean(keys::FILES, false)),
    MetricDef::new(keys::RFC_DISTRIBUTION, "Class distribution /RFC", "Class distribution /RFC", ValueType::Distrib, Direction::None, DOMAIN_DESIGN)
        .qualitative()
        .formula(|| Formula::sum_child_distribution(Scope::Directory)),
    MetricDef::new(keys::LCOM4, "LCOM4", "Lack of Cohesion of Methods", ValueType::Float, Direction::Worst, DOMAIN_DESIGN)
        .qualitative()
        .best(1.0)
        .formula(|| Formula::weighted_mean(keys::FILES, false)),
    MetricDef::new(keys::LCOM4_DISTRIBUTION, "Class distribution /LCOM4", "Class distribution /LCOM4", ValueType::Distrib, Direction::None, DOMAIN_DESIGN)
        .qualitative()
        .formula(|| Formula::sum_child_distribution(Scope::Directory)),
    // general
    MetricDef::new(keys::ALERT_STATUS, "Alert", "Alert", ValueType::Level, Direction::Better, DOMAIN_GENERAL).qualitative(),
    MetricDef::new(keys::PROFILE, "Profile", "Selected quality profile", ValueType::Data, Direction::None, DOMAIN_GENERAL),
];
