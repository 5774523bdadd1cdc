use super::{FilterValue, Operator, aliased_column, render_predicate};
use crate::error::GroupError;

/// How the predicates of a [`FilterGroup`] combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupPolicy {
    /// All predicates must hold (joined with AND)
    #[default]
    All,
    /// Any predicate may hold (joined with OR)
    Any,
}

impl GroupPolicy {
    fn separator(self) -> &'static str {
        match self {
            GroupPolicy::All => " AND ",
            GroupPolicy::Any => " OR ",
        }
    }
}

/// A set of predicates rendered as one parenthesized sub-expression.
///
/// Attach it to a statement with
/// [`SelectBuilder::filter_group`](crate::SelectBuilder::filter_group).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct FilterGroup {
    predicates: Vec<String>,
    policy: GroupPolicy,
}

impl FilterGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `column op value` predicate.
    pub fn filter(
        mut self,
        column: &str,
        op: Operator,
        value: impl Into<FilterValue>,
        quoted: bool,
    ) -> Self {
        self.predicates.push(render_predicate(column, op, &value.into(), quoted));
        self
    }

    /// Add a predicate on `alias.column`.
    pub fn filter_with_alias(
        self,
        column: &str,
        alias: &str,
        op: Operator,
        value: impl Into<FilterValue>,
        quoted: bool,
    ) -> Self {
        self.filter(&aliased_column(column, alias), op, value, quoted)
    }

    /// Require every predicate to hold (the default).
    pub fn all_of(mut self) -> Self {
        self.policy = GroupPolicy::All;
        self
    }

    /// Require at least one predicate to hold.
    pub fn any_of(mut self) -> Self {
        self.policy = GroupPolicy::Any;
        self
    }

    pub fn policy(&self) -> GroupPolicy {
        self.policy
    }

    pub fn predicates(&self) -> &[String] {
        &self.predicates
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Render `(p1 AND p2 ...)` or `(p1 OR p2 ...)`.
    pub fn render(&self) -> Result<String, GroupError> {
        if self.predicates.is_empty() {
            return Err(GroupError::Empty);
        }
        Ok(format!("({})", self.predicates.join(self.policy.separator())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FilterGroup {
        FilterGroup::new()
            .filter("col2", Operator::Eq, 20, false)
            .filter("col3", Operator::Lt, 30, false)
            .filter("col4", Operator::Like, "text%", true)
    }

    #[test]
    fn default_policy_is_all() {
        assert_eq!(sample().policy(), GroupPolicy::All);
        assert_eq!(
            sample().render().unwrap(),
            "(col2 = 20 AND col3 < 30 AND col4 LIKE 'text%')"
        );
    }

    #[test]
    fn any_of_joins_with_or() {
        assert_eq!(
            sample().any_of().render().unwrap(),
            "(col2 = 20 OR col3 < 30 OR col4 LIKE 'text%')"
        );
        assert_eq!(
            sample().any_of().all_of().render().unwrap(),
            "(col2 = 20 AND col3 < 30 AND col4 LIKE 'text%')"
        );
    }

    #[test]
    fn single_predicate_still_parenthesized() {
        let group = FilterGroup::new().filter("a", Operator::Gt, 1, false);
        assert_eq!(group.render().unwrap(), "(a > 1)");
    }

    #[test]
    fn aliased_predicates() {
        let group = FilterGroup::new()
            .filter_with_alias("id", "u", Operator::In, vec![1, 2], false)
            .any_of();
        assert_eq!(group.render().unwrap(), "(u.id IN (1,2))");
    }

    #[test]
    fn empty_group_is_an_error() {
        assert_eq!(FilterGroup::new().render(), Err(GroupError::Empty));
    }
}
