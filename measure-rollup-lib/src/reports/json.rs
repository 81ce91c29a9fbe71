use super::{ReportableNode, ReportedMeasure, common};
use crate::Result;
use crate::measures::round_half_up;
use core::fmt::Write;
use serde_json::json;

#[expect(unused_results, reason = "Map::insert intentionally overwrites values")]
pub fn generate<W: Write>(nodes: &[ReportableNode], precision: u8, writer: &mut W) -> Result<()> {
    let mut components = Vec::with_capacity(nodes.len());

    for node in nodes {
        let mut node_obj = serde_json::Map::new();
        node_obj.insert("key".to_string(), json!(node.key.as_str()));
        node_obj.insert("scope".to_string(), json!(node.scope));
        node_obj.insert("depth".to_string(), json!(node.depth));

        let mut measures_obj = serde_json::Map::new();
        let mut memory_only = Vec::new();
        for measure in &node.measures {
            measures_obj.insert(measure.metric_key.to_string(), measure_to_json(measure, precision));
            if measure.memory_only {
                memory_only.push(measure.metric_key.as_str());
            }
        }

        node_obj.insert("measures".to_string(), json!(measures_obj));
        if !memory_only.is_empty() {
            node_obj.insert("memory_only".to_string(), json!(memory_only));
        }

        components.push(json!(node_obj));
    }

    let output = json!({
        "components": components
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

#[expect(clippy::cast_possible_truncation, reason = "whole-unit values are integral counts well within i64")]
fn measure_to_json(measure: &ReportedMeasure, precision: u8) -> serde_json::Value {
    match (measure.value, measure.data.as_deref()) {
        (Some(value), _) if common::is_whole(measure.value_type) => json!(round_half_up(value, 0) as i64),
        (Some(value), _) => json!(round_half_up(value, precision)),
        (None, Some(data)) => json!(data),
        (None, None) => serde_json::Value::Null,
    }
}
