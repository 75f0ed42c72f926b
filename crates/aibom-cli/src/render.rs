//! Report rendering
//!
//! Every renderer returns the full report as a `String`; printing is left
//! to the caller.

use crate::config::OutputFormat;
use aibom_model::{Aibom, ValidationResult};
use aibom_policy::PolicyResult;

/// Render a validation verdict
///
/// # Errors
/// Returns error if JSON serialization fails
pub fn render_validation(
    result: &ValidationResult,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(result),
        OutputFormat::Text => {
            let mut lines = Vec::new();
            if result.valid {
                lines.push("✓ AIBOM is valid".to_string());
            } else {
                lines.push("✗ AIBOM has errors:".to_string());
                lines.extend(result.errors.iter().map(|e| format!("  - {e}")));
            }
            if !result.warnings.is_empty() {
                lines.push("⚠ Warnings:".to_string());
                lines.extend(result.warnings.iter().map(|w| format!("  - {w}")));
            }
            Ok(lines.join("\n"))
        }
    }
}

/// Render policy results
///
/// # Errors
/// Returns error if JSON serialization fails
pub fn render_policy_results(
    results: &[PolicyResult],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(results),
        OutputFormat::Text => {
            let mut lines = Vec::new();
            for result in results {
                lines.push(format!("Policy: {}", result.policy_name));
                if result.violations.is_empty() {
                    lines.push("  ✓ All checks passed".to_string());
                    continue;
                }
                for v in &result.violations {
                    lines.push(format!(
                        "  ✗ [{}] {}: {}",
                        v.severity.as_str().to_uppercase(),
                        v.rule_id,
                        v.message
                    ));
                }
                lines.push(format!(
                    "  Summary: {} critical, {} high, {} medium, {} low",
                    result.critical_count, result.high_count, result.medium_count, result.low_count
                ));
            }
            Ok(lines.join("\n"))
        }
    }
}

/// Render a component table with derived counts
#[must_use]
pub fn render_inventory(doc: &Aibom) -> String {
    let mut lines = vec![format!("AIBOM: {} ({})", doc.name, doc.id)];
    if let Some(org) = doc.organization.as_deref().filter(|o| !o.is_empty()) {
        lines.push(format!("Organization: {org}"));
    }
    lines.push(format!("Created: {}", doc.created_at.to_rfc3339()));
    lines.push(String::new());

    let rows: Vec<[String; 5]> = doc
        .components
        .iter()
        .map(|c| {
            [
                c.id.clone(),
                c.component_type.to_string(),
                c.name.clone(),
                c.provider().unwrap_or("-").to_string(),
                c.risk.to_string(),
            ]
        })
        .collect();
    lines.extend(table(["ID", "TYPE", "NAME", "PROVIDER", "RISK"], &rows));

    lines.push(String::new());
    lines.push(format!(
        "Models: {}  Tools: {}  Dependencies: {}",
        doc.model_count(),
        doc.tool_count(),
        doc.dependencies.len()
    ));

    let high_risk = doc.high_risk_components();
    if high_risk.is_empty() {
        lines.push("High-risk components: none".to_string());
    } else {
        lines.push("High-risk components:".to_string());
        lines.extend(
            high_risk
                .iter()
                .map(|c| format!("  - {} ({})", c.name, c.risk)),
        );
    }
    lines.join("\n")
}

/// Left-aligned columns padded to the widest cell
fn table<const N: usize>(headers: [&str; N], rows: &[[String; N]]) -> Vec<String> {
    let mut widths = headers.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: Vec<&str>| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(headers.to_vec())];
    lines.extend(
        rows.iter()
            .map(|row| format_row(row.iter().map(String::as_str).collect())),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use aibom_model::{Component, ComponentType, RiskClassification};
    use aibom_policy::{Severity, Violation};
    use pretty_assertions::assert_eq;

    #[test]
    fn validation_text_valid_with_warning() {
        let result = ValidationResult::from_findings(
            Vec::new(),
            vec!["Model 'x' missing provider".to_string()],
        );
        assert_eq!(
            render_validation(&result, OutputFormat::Text).unwrap(),
            "✓ AIBOM is valid\n⚠ Warnings:\n  - Model 'x' missing provider"
        );
    }

    #[test]
    fn validation_text_invalid() {
        let result = ValidationResult::from_findings(
            vec!["Duplicate component IDs found".to_string()],
            vec![],
        );
        assert_eq!(
            render_validation(&result, OutputFormat::Text).unwrap(),
            "✗ AIBOM has errors:\n  - Duplicate component IDs found"
        );
    }

    #[test]
    fn validation_json_fields() {
        let result = ValidationResult::from_findings(vec!["e".to_string()], vec![]);
        let json = render_validation(&result, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["errors"][0], "e");
    }

    #[test]
    fn policy_text() {
        let passed = PolicyResult::new("clean".to_string(), Vec::new());
        let failed = PolicyResult::new(
            "prod".to_string(),
            vec![Violation {
                rule_id: "AIBOM-004".to_string(),
                rule_name: "deny-tool".to_string(),
                severity: Severity::Critical,
                message: "tool 'exec_sql' is denied: unsafe".to_string(),
                component: Some("exec_sql".to_string()),
            }],
        );

        let text = render_policy_results(&[passed, failed], OutputFormat::Text).unwrap();

        assert_eq!(
            text,
            "Policy: clean\n  ✓ All checks passed\nPolicy: prod\n  ✗ [CRITICAL] AIBOM-004: tool 'exec_sql' is denied: unsafe\n  Summary: 1 critical, 0 high, 0 medium, 0 low"
        );
    }

    #[test]
    fn table_pads_columns() {
        let rows = [
            ["a".to_string(), "long-value".to_string()],
            ["bbbb".to_string(), "x".to_string()],
        ];
        assert_eq!(
            table(["K", "V"], &rows),
            vec!["K     V", "a     long-value", "bbbb  x"]
        );
    }

    #[test]
    fn inventory_lists_components_and_high_risk() {
        let mut doc = Aibom::new("aibom-render", "Render");
        doc.components = vec![
            Component::new("m1", "GPT-4", ComponentType::Model)
                .with_provider("OpenAI")
                .with_risk(RiskClassification::High),
            Component::new("t1", "search", ComponentType::Tool),
        ];

        let text = render_inventory(&doc);

        assert!(text.starts_with("AIBOM: Render (aibom-render)"));
        assert!(text.contains("ID  TYPE   NAME    PROVIDER  RISK"));
        assert!(text.contains("m1  model  GPT-4   OpenAI    high"));
        assert!(text.contains("t1  tool   search  -         minimal"));
        assert!(text.contains("Models: 1  Tools: 1  Dependencies: 0"));
        assert!(text.contains("  - GPT-4 (high)"));
    }
}
