//! Text rendering for the broker report.
//!
//! Plans appear in API order and only when they have at least one instance.
//! Instances keep API order within their plan.

use std::fmt::Write;

/// One instance line under a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceLine {
    pub guid: String,
    pub name: String,
    pub org: String,
    pub space: String,
}

/// A plan with the instances to list under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSection {
    pub name: String,
    pub instances: Vec<InstanceLine>,
}

/// Buffered report for one broker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerReport {
    pub broker: String,
    pub username: String,
    pub show_guids: bool,
    pub plans: Vec<PlanSection>,
}

impl BrokerReport {
    pub fn new(broker: &str, username: &str, show_guids: bool) -> Self {
        Self {
            broker: broker.to_string(),
            username: username.to_string(),
            show_guids,
            plans: Vec::new(),
        }
    }

    /// The full report: header, blank line, then the plan sections.
    pub fn render(&self) -> String {
        format!(
            "Describing broker {} as visible by {}\n\n{}",
            self.broker,
            self.username,
            self.render_body()
        )
    }

    /// Plan sections only.
    pub fn render_body(&self) -> String {
        let mut out = String::new();
        for plan in &self.plans {
            let _ = writeln!(out, "Plan {}:", plan.name);
            for instance in &plan.instances {
                out.push_str("  ");
                if self.show_guids {
                    let _ = write!(out, "Guid: {} - ", instance.guid);
                }
                let _ = writeln!(
                    out,
                    "Name: {} - Org: {} - Space: {}",
                    instance.name, instance.org, instance.space
                );
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gold_report(show_guids: bool) -> BrokerReport {
        let mut report = BrokerReport::new("p-mysql", "admin", show_guids);
        report.plans.push(PlanSection {
            name: "gold".to_string(),
            instances: vec![InstanceLine {
                guid: "i1".to_string(),
                name: "db1".to_string(),
                org: "acme".to_string(),
                space: "dev".to_string(),
            }],
        });
        report
    }

    #[test]
    fn test_body_without_guids() {
        assert_eq!(
            gold_report(false).render_body(),
            "Plan gold:\n  Name: db1 - Org: acme - Space: dev\n"
        );
    }

    #[test]
    fn test_body_with_guids() {
        assert_eq!(
            gold_report(true).render_body(),
            "Plan gold:\n  Guid: i1 - Name: db1 - Org: acme - Space: dev\n"
        );
    }

    #[test]
    fn test_render_includes_header() {
        assert_eq!(
            gold_report(false).render(),
            "Describing broker p-mysql as visible by admin\n\nPlan gold:\n  Name: db1 - Org: acme - Space: dev\n"
        );
    }

    #[test]
    fn test_empty_report() {
        let report = BrokerReport::new("b", "u", false);
        assert_eq!(report.render_body(), "");
        assert_eq!(report.render(), "Describing broker b as visible by u\n\n");
    }

    #[test]
    fn test_unknown_space_renders_empty_names() {
        let mut report = BrokerReport::new("b", "u", false);
        report.plans.push(PlanSection {
            name: "p".to_string(),
            instances: vec![InstanceLine {
                guid: "i".to_string(),
                name: "orphan".to_string(),
                org: String::new(),
                space: String::new(),
            }],
        });
        assert_eq!(report.render_body(), "Plan p:\n  Name: orphan - Org:  - Space: \n");
    }
}
