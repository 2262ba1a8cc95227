//! Expected-findings manifest.
//!
//! # Data Flow
//! ```text
//! expected_findings() → scanner test suite (diff against scan output)
//!                     → fixtures-cli findings (pretty JSON for humans)
//! ```
//!
//! # Design Decisions
//! - One entry per deliberate defect, keyed by the rule id annotated at
//!   the defect site
//! - Scanner suites treat the manifest as a floor: extra findings are
//!   noise to triage, missing ones are regressions

use serde::Serialize;

/// Severity of an expected finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A deliberate defect the scanner is expected to flag.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Scanner rule id, matching the annotation at the defect site.
    pub rule_id: &'static str,
    pub severity: Severity,
    /// Fixture service the defect belongs to.
    pub service: &'static str,
    /// Source file containing the defect.
    pub file: &'static str,
    pub description: &'static str,
}

/// Per-severity counts for a set of findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindingSummary {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Every deliberate defect in the corpus.
pub fn expected_findings() -> Vec<Finding> {
    vec![
        Finding {
            rule_id: "rust.lang.security.audit.exposed-debug-endpoint",
            severity: Severity::Low,
            service: "api-gateway",
            file: "src/gateway/handlers.rs",
            description: "Internal configuration disclosed on an unauthenticated debug endpoint",
        },
        Finding {
            rule_id: "rust.lang.security.sqli.string-concat",
            severity: Severity::High,
            service: "payment-api",
            file: "src/payments/handlers.rs",
            description: "Request input concatenated into SQL query text",
        },
        Finding {
            rule_id: "generic.secrets.gitleaks.hardcoded-secret",
            severity: Severity::High,
            service: "payment-api",
            file: "src/payments/mod.rs",
            description: "API key committed as a source literal and written to the log",
        },
        Finding {
            rule_id: "rust.lang.security.shell-injection.command-injection",
            severity: Severity::High,
            service: "internal-worker",
            file: "src/worker/mod.rs",
            description: "Task input passed to `sh -c` unmodified",
        },
        Finding {
            rule_id: "generic.secrets.gitleaks.hardcoded-secret",
            severity: Severity::Medium,
            service: "internal-worker",
            file: "src/worker/mod.rs",
            description: "Database password committed as a source literal",
        },
    ]
}

/// Summarize findings by severity.
pub fn summarize(findings: &[Finding]) -> FindingSummary {
    FindingSummary {
        total: findings.len(),
        high: findings.iter().filter(|f| f.severity == Severity::High).count(),
        medium: findings.iter().filter(|f| f.severity == Severity::Medium).count(),
        low: findings.iter().filter(|f| f.severity == Severity::Low).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let findings = expected_findings();
        let summary = summarize(&findings);

        assert_eq!(
            summary,
            FindingSummary {
                total: 5,
                high: 3,
                medium: 1,
                low: 1,
            }
        );
    }

    #[test]
    fn test_every_finding_names_an_existing_file() {
        for finding in expected_findings() {
            let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(finding.file);
            assert!(path.exists(), "{} does not exist", finding.file);
        }
    }

    #[test]
    fn test_rule_ids_are_annotated_at_the_defect_site() {
        for finding in expected_findings() {
            let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(finding.file);
            let source = std::fs::read_to_string(&path).unwrap();
            assert!(
                source.contains(finding.rule_id),
                "{} missing annotation {}",
                finding.file,
                finding.rule_id
            );
        }
    }

    #[test]
    fn test_severity_serializes_uppercase() {
        let json = serde_json::to_string(&Severity::High).unwrap();
        assert_eq!(json, r#""HIGH""#);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }
}
