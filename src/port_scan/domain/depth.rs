use crate::shared::error::PortFinderError;
use std::fmt;
use std::str::FromStr;

/// Depth filter applied when no expression is configured
pub const DEFAULT_DEPTH: &str = "<=2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Equal,
    NotEqual,
}

impl Comparator {
    fn symbol(self) -> &'static str {
        match self {
            Comparator::Less => "<",
            Comparator::LessOrEqual => "<=",
            Comparator::Greater => ">",
            Comparator::GreaterOrEqual => ">=",
            Comparator::Equal => "==",
            Comparator::NotEqual => "!=",
        }
    }
}

/// A comparator-prefixed depth bound such as `<=2`, `<3` or `2`.
///
/// Depth 0 is a file directly inside the scanned directory, depth 1 a file
/// one directory below it, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthExpression {
    comparator: Comparator,
    target: usize,
}

impl DepthExpression {
    pub fn new(comparator: Comparator, target: usize) -> Self {
        Self { comparator, target }
    }

    pub fn matches(&self, depth: usize) -> bool {
        match self.comparator {
            Comparator::Less => depth < self.target,
            Comparator::LessOrEqual => depth <= self.target,
            Comparator::Greater => depth > self.target,
            Comparator::GreaterOrEqual => depth >= self.target,
            Comparator::Equal => depth == self.target,
            Comparator::NotEqual => depth != self.target,
        }
    }

    /// Deepest depth that can still match, `None` when unbounded
    pub fn max_depth(&self) -> Option<usize> {
        match self.comparator {
            Comparator::Less => Some(self.target.saturating_sub(1)),
            Comparator::LessOrEqual | Comparator::Equal => Some(self.target),
            Comparator::Greater | Comparator::GreaterOrEqual | Comparator::NotEqual => None,
        }
    }

    /// True when no depth at all can match (`<0`)
    pub fn is_empty(&self) -> bool {
        self.comparator == Comparator::Less && self.target == 0
    }
}

impl Default for DepthExpression {
    fn default() -> Self {
        Self::new(Comparator::LessOrEqual, 2)
    }
}

impl FromStr for DepthExpression {
    type Err = PortFinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| PortFinderError::InvalidDepthExpression {
            expression: s.to_string(),
            reason: reason.to_string(),
        };

        let expression = s.trim();
        if expression.is_empty() {
            return Err(invalid("expression is empty"));
        }

        // Two-character operators must be tried before their one-character prefixes
        let (comparator, rest) = [
            ("<=", Comparator::LessOrEqual),
            (">=", Comparator::GreaterOrEqual),
            ("==", Comparator::Equal),
            ("!=", Comparator::NotEqual),
            ("<", Comparator::Less),
            (">", Comparator::Greater),
        ]
        .iter()
        .find_map(|(symbol, comparator)| {
            expression
                .strip_prefix(symbol)
                .map(|rest| (*comparator, rest))
        })
        .unwrap_or((Comparator::Equal, expression));

        let target = rest
            .trim()
            .parse::<usize>()
            .map_err(|_| invalid("depth must be a non-negative integer"))?;

        Ok(Self::new(comparator, target))
    }
}

impl fmt::Display for DepthExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.comparator.symbol(), self.target)
    }
}
