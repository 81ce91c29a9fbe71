use super::{ReportableNode, ReportedMeasure, common};
use crate::Result;
use crate::metrics::ValueType;
use core::fmt::Write;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

const MEMORY_ONLY_MARKER: &str = "(memory only)";

pub fn generate<W: Write>(nodes: &[ReportableNode], use_colors: bool, precision: u8, writer: &mut W) -> Result<()> {
    generate_with_width(nodes, use_colors, precision, get_terminal_width(), writer)
}

fn generate_with_width<W: Write>(nodes: &[ReportableNode], use_colors: bool, precision: u8, term_width: usize, writer: &mut W) -> Result<()> {
    for (index, node) in nodes.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }

        let indent = "  ".repeat(node.depth);
        let heading = format!("{} ({})", node.key, node.scope);
        if use_colors {
            writeln!(writer, "{indent}{}", heading.bold())?;
        } else {
            writeln!(writer, "{indent}{heading}")?;
        }

        if node.measures.is_empty() {
            writeln!(writer, "{indent}  no measures")?;
            continue;
        }

        // Compute max metric key length for alignment
        let max_key_len = node.measures.iter().map(|m| m.metric_key.len()).max().unwrap_or(0);

        // Indent for value lines: node indent + "  " (2) + metric_key + " : " (3)
        let value_indent = indent.len() + 2 + max_key_len + 3;

        for measure in &node.measures {
            let formatted_value = display_value(measure, precision);
            let wrapped_lines = wrap_text(&formatted_value, term_width, value_indent);

            let Some((first_line, continuation)) = wrapped_lines.split_first() else {
                continue;
            };

            let key = if use_colors {
                format!("{:<width$}", measure.metric_key.as_str().cyan(), width = max_key_len)
            } else {
                format!("{:<width$}", measure.metric_key.as_str(), width = max_key_len)
            };

            let last_line = continuation.is_empty();
            write!(writer, "{indent}  {key} : {first_line}")?;
            if last_line {
                write_marker(writer, measure, use_colors)?;
            }
            writeln!(writer)?;

            for (position, line) in continuation.iter().enumerate() {
                write!(writer, "{line}")?;
                if position + 1 == continuation.len() {
                    write_marker(writer, measure, use_colors)?;
                }
                writeln!(writer)?;
            }
        }
    }

    Ok(())
}

fn write_marker<W: Write>(writer: &mut W, measure: &ReportedMeasure, use_colors: bool) -> Result<()> {
    if measure.memory_only {
        if use_colors {
            write!(writer, " {}", MEMORY_ONLY_MARKER.dimmed())?;
        } else {
            write!(writer, " {MEMORY_ONLY_MARKER}")?;
        }
    }

    Ok(())
}

/// Distributions are spread over several words so they can wrap between buckets.
fn display_value(measure: &ReportedMeasure, precision: u8) -> String {
    let formatted = common::format_measure(measure, precision);
    if measure.value.is_none() && matches!(measure.value_type, ValueType::Distrib | ValueType::Data) {
        formatted.split(';').collect::<Vec<_>>().join("; ")
    } else {
        formatted
    }
}

/// Get the terminal width, defaulting to 80 if not detectable
fn get_terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| usize::from(w))
}

/// Word-wrap text so that, once placed after `indent` columns, no line exceeds `width`.
///
/// Continuation lines are prefixed with `indent` spaces.
fn wrap_text(text: &str, width: usize, indent: usize) -> Vec<String> {
    if width <= indent {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        let separator_len = usize::from(!current_line.is_empty());

        if !current_line.is_empty() && indent + current_line.len() + separator_len + word.len() > width {
            lines.push(current_line);
            current_line = word.to_string();
        } else {
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
    }

    if !current_line.is_empty() || lines.is_empty() {
        lines.push(current_line);
    }

    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| if index == 0 { line } else { format!("{:indent$}{line}", "") })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Scope;

    fn measure(key: &str, value_type: ValueType, value: Option<f64>, data: Option<&str>, memory_only: bool) -> ReportedMeasure {
        ReportedMeasure {
            metric_key: key.into(),
            metric_name: key.into(),
            value_type,
            value,
            data: data.map(str::to_string),
            memory_only,
        }
    }

    fn sample_nodes() -> Vec<ReportableNode> {
        vec![
            ReportableNode {
                key: "demo".into(),
                scope: Scope::Project,
                depth: 0,
                measures: vec![
                    measure("file_complexity", ValueType::Float, Some(6.666), None, false),
                    measure("function_complexity_distribution", ValueType::Distrib, None, Some("1=3;2=1;4=1"), false),
                    measure("ncloc", ValueType::Int, Some(150.0), None, false),
                ],
            },
            ReportableNode {
                key: "src".into(),
                scope: Scope::Directory,
                depth: 1,
                measures: vec![
                    measure("function_complexity_distribution", ValueType::Distrib, None, Some("1=3"), true),
                    measure("ncloc", ValueType::Int, Some(120.0), None, false),
                ],
            },
            ReportableNode {
                key: "src/empty.rs".into(),
                scope: Scope::File,
                depth: 2,
                measures: Vec::new(),
            },
        ]
    }

    #[test]
    fn test_generate_no_colors() {
        let mut output = String::new();
        generate_with_width(&sample_nodes(), false, 1, 80, &mut output).unwrap();

        insta::assert_snapshot!(output, @"
        demo (project)
          file_complexity                  : 6.7
          function_complexity_distribution : 1=3; 2=1; 4=1
          ncloc                            : 150

          src (directory)
            function_complexity_distribution : 1=3 (memory only)
            ncloc                            : 120

            src/empty.rs (file)
              no measures
        ");
    }

    #[test]
    fn test_generate_empty() {
        let mut output = String::new();
        generate_with_width(&[], false, 1, 80, &mut output).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_generate_with_colors() {
        let mut output = String::new();
        generate_with_width(&sample_nodes(), true, 1, 80, &mut output).unwrap();

        assert!(output.contains("\u{1b}["), "colored output should contain ANSI escapes");
        assert!(output.contains("150"));
    }

    #[test]
    fn test_long_distribution_wraps_between_buckets() {
        let nodes = vec![ReportableNode {
            key: "demo".into(),
            scope: Scope::Project,
            depth: 0,
            measures: vec![measure(
                "d",
                ValueType::Distrib,
                None,
                Some("0=1;10=2;20=3;30=4;40=5;50=6"),
                true,
            )],
        }];

        let mut output = String::new();
        generate_with_width(&nodes, false, 1, 30, &mut output).unwrap();

        insta::assert_snapshot!(output, @"
        demo (project)
          d : 0=1; 10=2; 20=3; 30=4;
              40=5; 50=6 (memory only)
        ");
    }

    #[test]
    fn test_wrap_text_short() {
        assert_eq!(wrap_text("short text", 80, 10), vec!["short text"]);
    }

    #[test]
    fn test_wrap_text_long() {
        let lines = wrap_text("one two three four five", 16, 6);
        assert_eq!(lines, vec!["one two", "      three four", "      five"]);
        for line in &lines[1..] {
            assert!(line.len() <= 16);
        }
    }

    #[test]
    fn test_wrap_text_no_room() {
        assert_eq!(wrap_text("a b c", 4, 4), vec!["a b c"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 80, 4), vec![String::new()]);
    }
}
