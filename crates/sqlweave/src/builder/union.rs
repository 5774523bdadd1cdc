use super::select::SelectBuilder;
use super::traits::SqlBuilder;
use crate::error::StatementError;
use crate::log::{self, StatementKind};

/// Set operator placed between two UNION members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnionKind {
    /// `UNION` (deduplicating)
    Union,
    /// `UNION ALL`
    UnionAll,
}

impl UnionKind {
    pub fn as_sql(self) -> &'static str {
        match self {
            UnionKind::Union => "UNION",
            UnionKind::UnionAll => "UNION ALL",
        }
    }
}

/// Chains SELECT statements with UNION / UNION ALL.
///
/// Only the last member is rendered with a trailing `;`.
#[derive(Debug, Clone)]
#[must_use]
pub struct UnionBuilder {
    first: SelectBuilder,
    rest: Vec<(UnionKind, SelectBuilder)>,
}

impl UnionBuilder {
    pub fn new(initial: SelectBuilder) -> Self {
        Self {
            first: initial,
            rest: Vec::new(),
        }
    }

    /// Append a member joined with `UNION`.
    pub fn union(self, query: SelectBuilder) -> Self {
        self.push(UnionKind::Union, query)
    }

    /// Append a member joined with `UNION ALL`.
    pub fn union_all(self, query: SelectBuilder) -> Self {
        self.push(UnionKind::UnionAll, query)
    }

    fn push(mut self, kind: UnionKind, query: SelectBuilder) -> Self {
        self.rest.push((kind, query));
        self
    }

    /// Check every member can be rendered.
    pub fn validate(&self) -> Result<(), StatementError> {
        self.first.validate()?;
        for (_, query) in &self.rest {
            query.validate()?;
        }
        Ok(())
    }

    /// Render the chain. Fails if any member fails.
    pub fn build(&self) -> Result<String, StatementError> {
        log::logged(&self.first.context(), StatementKind::Union, self.build_internal())
    }

    fn build_internal(&self) -> Result<String, StatementError> {
        let mut sql = self.first.build_fragment(self.rest.is_empty())?;
        let last = self.rest.len().saturating_sub(1);
        for (i, (kind, query)) in self.rest.iter().enumerate() {
            sql.push(' ');
            sql.push_str(kind.as_sql());
            sql.push(' ');
            sql.push_str(&query.build_fragment(i == last)?);
        }
        Ok(sql)
    }
}

impl SqlBuilder for UnionBuilder {
    type Error = StatementError;

    fn validate(&self) -> Result<(), StatementError> {
        UnionBuilder::validate(self)
    }

    fn to_sql(&self) -> Result<String, StatementError> {
        self.build()
    }
}
