//! Shared regex library for scanners and metrics.
//!
//! Compiles every pattern once and reuses it across analyses. Patterns are
//! ASCII-oriented on purpose: identifiers are `[A-Za-z0-9_]`, digits are `[0-9]`.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum PatternId {
    /// Trimmed `let|const|var|return` statement not ending in `;`, `{`, `}` or whitespace
    UnterminatedStatement,
    /// Standalone integer literal of two or more digits
    MagicNumber,
    /// `function name`
    NamedFunction,
    /// `name = function`
    FunctionExpression,
    /// `name =>`
    ArrowFunction,
    /// `let|const|var name`
    Declaration,
    IfBranch,
    ElseBranch,
    ForLoop,
    WhileLoop,
    SwitchStatement,
    CaseClause,
    CatchClause,
    /// `&&` or `||`, each occurrence counted
    LogicalOperator,
    /// Lowercase-leading identifier-like run (not word-boundary anchored)
    LowercaseIdentifier,
    /// Any identifier-like token
    Identifier,
}

impl PatternId {
    const ALL: [PatternId; 16] = [
        PatternId::UnterminatedStatement,
        PatternId::MagicNumber,
        PatternId::NamedFunction,
        PatternId::FunctionExpression,
        PatternId::ArrowFunction,
        PatternId::Declaration,
        PatternId::IfBranch,
        PatternId::ElseBranch,
        PatternId::ForLoop,
        PatternId::WhileLoop,
        PatternId::SwitchStatement,
        PatternId::CaseClause,
        PatternId::CatchClause,
        PatternId::LogicalOperator,
        PatternId::LowercaseIdentifier,
        PatternId::Identifier,
    ];

    fn source(&self) -> &'static str {
        match self {
            PatternId::UnterminatedStatement => r"^(let|const|var|return)\s+.*[^;{}\s]$",
            PatternId::MagicNumber => r"(?-u:\b)[0-9]{2,}(?-u:\b)",
            PatternId::NamedFunction => r"function\s+[A-Za-z0-9_]+",
            PatternId::FunctionExpression => r"[A-Za-z0-9_]+\s*=\s*function",
            PatternId::ArrowFunction => r"[A-Za-z0-9_]+\s*=>\s*",
            PatternId::Declaration => r"(let|const|var)\s+[A-Za-z0-9_]+",
            PatternId::IfBranch => r"if\s*\(",
            PatternId::ElseBranch => r"else",
            PatternId::ForLoop => r"for\s*\(",
            PatternId::WhileLoop => r"while\s*\(",
            PatternId::SwitchStatement => r"switch\s*\(",
            PatternId::CaseClause => r"case\s+",
            PatternId::CatchClause => r"catch\s*\(",
            PatternId::LogicalOperator => r"&&|\|\|",
            PatternId::LowercaseIdentifier => r"[a-z][a-zA-Z0-9]*",
            PatternId::Identifier => r"(?-u:\b)[a-zA-Z_$][a-zA-Z0-9_$]*(?-u:\b)",
        }
    }
}

/// Compiled pattern table
pub struct PatternTable {
    compiled: HashMap<PatternId, Regex>,
}

impl PatternTable {
    pub fn new() -> Self {
        let compiled = PatternId::ALL
            .iter()
            .map(|id| {
                let re = Regex::new(id.source()).expect("built-in pattern compiles");
                (*id, re)
            })
            .collect();
        Self { compiled }
    }

    pub fn get(&self, id: PatternId) -> &Regex {
        &self.compiled[&id]
    }

    pub fn is_match(&self, id: PatternId, text: &str) -> bool {
        self.get(id).is_match(text)
    }

    /// Number of non-overlapping matches in `text`
    pub fn count(&self, id: PatternId, text: &str) -> usize {
        self.get(id).find_iter(text).count()
    }

    /// Byte offset of the first match
    pub fn first_match(&self, id: PatternId, text: &str) -> Option<usize> {
        self.get(id).find(text).map(|m| m.start())
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Global pattern table (compile once per process).
pub fn global_patterns() -> &'static PatternTable {
    static TABLE: OnceLock<PatternTable> = OnceLock::new();
    TABLE.get_or_init(PatternTable::new)
}
