use std::fmt;

/// Logical connector placed after a predicate, linking it to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Conjunction {
    /// Not linked (yet). The last predicate of a chain keeps this.
    #[default]
    None,
    And,
    Or,
}

impl Conjunction {
    pub fn as_sql(self) -> Option<&'static str> {
        match self {
            Conjunction::None => None,
            Conjunction::And => Some("AND"),
            Conjunction::Or => Some("OR"),
        }
    }
}

/// A rendered predicate plus the conjunction linking it to the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpression {
    predicate: String,
    conjunction: Conjunction,
}

impl FilterExpression {
    pub fn new(predicate: impl Into<String>) -> Self {
        Self {
            predicate: predicate.into(),
            conjunction: Conjunction::None,
        }
    }

    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    pub fn conjunction(&self) -> Conjunction {
        self.conjunction
    }

    pub(crate) fn set_conjunction(&mut self, conjunction: Conjunction) {
        self.conjunction = conjunction;
    }
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.predicate)?;
        if let Some(keyword) = self.conjunction.as_sql() {
            write!(f, " {keyword} ")?;
        }
        Ok(())
    }
}

/// Ordered predicates of one WHERE clause.
///
/// Consecutive predicates are joined with AND unless [`or`](Self::or) (or
/// [`and`](Self::and)) was called in between.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChain {
    filters: Vec<FilterExpression>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any predicates have been added.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Number of predicates in the chain.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Predicates in insertion order.
    pub fn filters(&self) -> &[FilterExpression] {
        &self.filters
    }

    /// Append a predicate, defaulting an unlinked previous predicate to AND.
    pub fn push(&mut self, predicate: impl Into<String>) {
        if let Some(last) = self.filters.last_mut() {
            if last.conjunction == Conjunction::None {
                last.conjunction = Conjunction::And;
            }
        }
        self.filters.push(FilterExpression::new(predicate));
    }

    /// Link the last predicate to the next one with AND. No-op when empty.
    pub fn and(&mut self) {
        self.set_last(Conjunction::And);
    }

    /// Link the last predicate to the next one with OR. No-op when empty.
    pub fn or(&mut self) {
        self.set_last(Conjunction::Or);
    }

    fn set_last(&mut self, conjunction: Conjunction) {
        if let Some(last) = self.filters.last_mut() {
            last.set_conjunction(conjunction);
        }
    }

    /// Build the clause body (without the `WHERE` keyword).
    pub fn build_clause(&self) -> String {
        let mut out = String::new();
        self.write_clause(&mut out);
        out
    }

    /// A conjunction set on the last predicate has no right operand and is
    /// not rendered.
    pub(crate) fn write_clause(&self, out: &mut String) {
        let Some((last, rest)) = self.filters.split_last() else {
            return;
        };
        for filter in rest {
            out.push_str(filter.predicate());
            if let Some(keyword) = filter.conjunction().as_sql() {
                out.push(' ');
                out.push_str(keyword);
                out.push(' ');
            }
        }
        out.push_str(last.predicate());
    }
}
