//! Graph schema script: parsing, classification and validation.
//!
//! The initializer only ever runs a validated script. Validation admits
//! idempotent constraint and index declarations and nothing else, which keeps
//! the destructive reset off the automatic startup path.

use crate::domain::NodeLabel;
use crate::errors::{AppError, AppResult};

/// Schema script bundled with the binary
pub const BUNDLED_SCHEMA: &str = include_str!("../../../db/graph/schema.cypher");

/// Wipes every node and relationship. Only reachable through `graph reset`.
pub const RESET_STATEMENT: &str = "MATCH (n) DETACH DELETE n";

const IDEMPOTENCE_GUARD: &str = "IF NOT EXISTS";
const DESTRUCTIVE_KEYWORDS: &[&str] = &["DELETE", "DROP", "REMOVE"];

/// What a Cypher statement does to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    Constraint,
    Index,
    Destructive,
    Other,
}

/// A single statement of a schema script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CypherStatement {
    pub text: String,
    pub kind: StatementKind,
}

impl CypherStatement {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = classify(&text);
        Self { text, kind }
    }

    pub fn is_idempotent(&self) -> bool {
        self.text.to_ascii_uppercase().contains(IDEMPOTENCE_GUARD)
    }

    /// First `max` characters, for log lines.
    pub fn preview(&self, max: usize) -> String {
        let flat = self.text.split_whitespace().collect::<Vec<_>>().join(" ");
        if flat.chars().count() <= max {
            flat
        } else {
            format!("{}...", flat.chars().take(max).collect::<String>())
        }
    }
}

fn classify(text: &str) -> StatementKind {
    let upper = text.to_ascii_uppercase();
    let tokens: Vec<&str> = upper
        .split(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.iter().any(|token| DESTRUCTIVE_KEYWORDS.contains(token)) {
        return StatementKind::Destructive;
    }

    if tokens.first() != Some(&"CREATE") {
        return StatementKind::Other;
    }
    if tokens.get(1) == Some(&"CONSTRAINT") {
        StatementKind::Constraint
    } else if tokens.contains(&"INDEX") {
        StatementKind::Index
    } else {
        StatementKind::Other
    }
}

/// An ordered list of schema statements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSchema {
    statements: Vec<CypherStatement>,
}

impl GraphSchema {
    /// Split a script on `;`, dropping blank statements and `//` comment lines.
    pub fn parse(script: &str) -> Self {
        let without_comments = script
            .lines()
            .filter(|line| !line.trim_start().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");

        let statements = without_comments
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(CypherStatement::new)
            .collect();

        Self { statements }
    }

    pub fn statements(&self) -> &[CypherStatement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Reject anything other than guarded constraint/index declarations.
    pub fn validate(&self) -> AppResult<()> {
        for (idx, stmt) in self.statements.iter().enumerate() {
            let position = idx + 1;
            match stmt.kind {
                StatementKind::Destructive => {
                    return Err(AppError::config(format!(
                        "Schema statement {} is destructive and cannot run during initialization \
                         (use `graph reset`): {}",
                        position,
                        stmt.preview(80)
                    )));
                }
                StatementKind::Other => {
                    return Err(AppError::config(format!(
                        "Schema statement {} is not a constraint or index declaration: {}",
                        position,
                        stmt.preview(80)
                    )));
                }
                StatementKind::Constraint | StatementKind::Index if !stmt.is_idempotent() => {
                    return Err(AppError::config(format!(
                        "Schema statement {} must use IF NOT EXISTS: {}",
                        position,
                        stmt.preview(80)
                    )));
                }
                StatementKind::Constraint | StatementKind::Index => {}
            }
        }
        Ok(())
    }

    /// Whether some constraint targets `label`.
    pub fn constrains(&self, label: NodeLabel) -> bool {
        self.mentions(StatementKind::Constraint, label)
    }

    /// Whether some index targets `label`.
    pub fn indexes(&self, label: NodeLabel) -> bool {
        self.mentions(StatementKind::Index, label)
    }

    fn mentions(&self, kind: StatementKind, label: NodeLabel) -> bool {
        let pattern = format!(":{})", label.as_str());
        self.statements
            .iter()
            .filter(|s| s.kind == kind)
            .any(|s| s.text.replace(' ', "").contains(&pattern))
    }
}

impl Default for GraphSchema {
    fn default() -> Self {
        Self::parse(BUNDLED_SCHEMA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_schema_is_valid() {
        let schema = GraphSchema::default();
        assert_eq!(schema.len(), 6);
        schema.validate().unwrap();
    }

    #[test]
    fn test_bundled_schema_covers_every_label() {
        let schema = GraphSchema::default();
        for label in NodeLabel::ALL {
            assert!(schema.constrains(label), "missing id constraint for {}", label);
            assert_eq!(
                schema.indexes(label),
                label.has_name_index(),
                "unexpected index coverage for {}",
                label
            );
        }
    }

    #[test]
    fn test_bundled_schema_never_resets() {
        let schema = GraphSchema::default();
        assert!(schema
            .statements()
            .iter()
            .all(|s| s.kind != StatementKind::Destructive));
        assert!(!BUNDLED_SCHEMA.to_ascii_uppercase().contains("DETACH DELETE"));
    }

    #[test]
    fn test_parse_splits_and_skips_comments() {
        let schema = GraphSchema::parse(
            "// header; with a semicolon\n\
             CREATE CONSTRAINT a IF NOT EXISTS FOR (n:Customer) REQUIRE n.id IS UNIQUE;\n\
             \n;\n\
             CREATE INDEX b IF NOT EXISTS FOR (n:Product) ON (n.name)",
        );

        let kinds: Vec<_> = schema.statements().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![StatementKind::Constraint, StatementKind::Index]);
    }

    #[test]
    fn test_classify_statements() {
        assert_eq!(classify(RESET_STATEMENT), StatementKind::Destructive);
        assert_eq!(
            classify("DROP CONSTRAINT customer_id IF EXISTS"),
            StatementKind::Destructive
        );
        assert_eq!(
            classify("CREATE TEXT INDEX t IF NOT EXISTS FOR (n:Product) ON (n.name)"),
            StatementKind::Index
        );
        assert_eq!(classify("CREATE (n:Product {id: 1})"), StatementKind::Other);
        assert_eq!(classify("RETURN 1"), StatementKind::Other);
        // Identifier containing a keyword is not destructive
        assert_eq!(
            classify("CREATE INDEX drop_rate IF NOT EXISTS FOR (n:Order) ON (n.ts)"),
            StatementKind::Index
        );
    }

    #[test]
    fn test_validate_rejects_reset_in_schema() {
        let schema = GraphSchema::parse(&format!(
            "{};\nCREATE CONSTRAINT a IF NOT EXISTS FOR (n:Order) REQUIRE n.id IS UNIQUE",
            RESET_STATEMENT
        ));

        let err = schema.validate().unwrap_err();
        assert!(err.to_string().contains("destructive"));
    }

    #[test]
    fn test_validate_requires_if_not_exists() {
        let schema =
            GraphSchema::parse("CREATE CONSTRAINT a FOR (n:Order) REQUIRE n.id IS UNIQUE");
        let err = schema.validate().unwrap_err();
        assert!(err.to_string().contains("IF NOT EXISTS"));
    }

    #[test]
    fn test_preview_truncates_long_statements() {
        let stmt = CypherStatement::new("CREATE INDEX x IF NOT EXISTS FOR (n:Product) ON (n.name)");
        assert_eq!(stmt.preview(12), "CREATE INDEX...");
        assert_eq!(stmt.preview(200), stmt.text);
    }
}
