//! Scope classification and the scope ledger.
//!
//! Every emitted `INDENT` records one [`ScopeInfo`] entry. The ledger is the
//! raw material for lateral navigation between sibling scopes: the queries
//! here only read it, the preprocessor never builds cross-links.

use std::fmt;

/// Coarse category of an opened scope, derived from a prefix match on the
/// line that opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeType {
    Function,
    Render,
    Asm,
    Struct,
    Conditional,
    Loop,
    Filter,
    Block,
}

impl ScopeType {
    /// Classify a line by its first matching prefix, leading whitespace
    /// ignored. Unrecognized lines open plain blocks.
    pub fn classify(line: &str) -> Self {
        let trimmed = line.trim_start_matches([' ', '\t']);
        if trimmed.starts_with("fn ") || trimmed.starts_with("Main") {
            ScopeType::Function
        } else if trimmed.starts_with("render") {
            ScopeType::Render
        } else if trimmed.starts_with("asm") {
            ScopeType::Asm
        } else if trimmed.starts_with("struct") {
            ScopeType::Struct
        } else if trimmed.starts_with("if ") {
            ScopeType::Conditional
        } else if trimmed.starts_with("for ") {
            ScopeType::Loop
        } else if trimmed.starts_with("filter") {
            ScopeType::Filter
        } else {
            ScopeType::Block
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScopeType::Function => "function",
            ScopeType::Render => "render",
            ScopeType::Asm => "asm",
            ScopeType::Struct => "struct",
            ScopeType::Conditional => "conditional",
            ScopeType::Loop => "loop",
            ScopeType::Filter => "filter",
            ScopeType::Block => "block",
        }
    }
}

impl fmt::Display for ScopeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scope opening: the width it opens at, the line the `INDENT` fired on,
/// and the construct that opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeInfo {
    /// Indentation width (space-equivalent columns) the scope opens at
    pub indent_level: usize,
    /// 1-based source line the `INDENT` fired on
    pub line: usize,
    pub scope_type: ScopeType,
}

/// Ordered record of every scope opening, one entry per emitted `INDENT`.
///
/// Append-only while the preprocessor runs; callers only ever see it behind
/// a shared reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeLedger {
    entries: Vec<ScopeInfo>,
}

impl ScopeLedger {
    pub(crate) fn push(&mut self, info: ScopeInfo) {
        self.entries.push(info);
    }

    pub fn entries(&self) -> &[ScopeInfo] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ScopeInfo> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScopeInfo> {
        self.entries.iter()
    }

    /// The next scope at the same indentation width, unless a shallower
    /// scope opens in between.
    pub fn next_sibling(&self, index: usize) -> Option<usize> {
        let level = self.entries.get(index)?.indent_level;
        for (i, entry) in self.entries.iter().enumerate().skip(index + 1) {
            if entry.indent_level < level {
                return None;
            }
            if entry.indent_level == level {
                return Some(i);
            }
        }
        None
    }

    /// The previous scope at the same indentation width, unless a shallower
    /// scope opens in between.
    pub fn prev_sibling(&self, index: usize) -> Option<usize> {
        let level = self.entries.get(index)?.indent_level;
        for i in (0..index).rev() {
            let entry = &self.entries[i];
            if entry.indent_level < level {
                return None;
            }
            if entry.indent_level == level {
                return Some(i);
            }
        }
        None
    }

    /// The nearest earlier scope opened at a shallower width.
    pub fn enclosing(&self, index: usize) -> Option<usize> {
        let level = self.entries.get(index)?.indent_level;
        (0..index).rev().find(|&i| self.entries[i].indent_level < level)
    }
}

impl<'a> IntoIterator for &'a ScopeLedger {
    type Item = &'a ScopeInfo;
    type IntoIter = std::slice::Iter<'a, ScopeInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
