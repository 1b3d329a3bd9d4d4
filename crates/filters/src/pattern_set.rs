/// Ignore and un-ignore patterns gathered from every source.
///
/// `positive` patterns mark paths as ignored; `negative` patterns re-include
/// paths that a positive pattern matched. Each list keeps the first
/// occurrence of a pattern and drops later duplicates. Order carries no
/// meaning: negative patterns always override positive ones.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PatternSet {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl PatternSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positive: Vec::new(),
            negative: Vec::new(),
        }
    }

    /// Builds a set from explicit positive and negative lists, removing
    /// duplicates from each.
    ///
    /// # Examples
    ///
    /// ```
    /// use filters::PatternSet;
    ///
    /// let set = PatternSet::from_parts(["dist", "dist", "tmp"], ["dist/keep.js"]);
    /// assert_eq!(set.positive(), ["dist", "tmp"]);
    /// assert_eq!(set.negative(), ["dist/keep.js"]);
    /// ```
    pub fn from_parts<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let mut set = Self::new();
        set.extend_positive(positive);
        set.extend_negative(negative);
        set
    }

    /// Adds an ignore pattern unless it is already present.
    pub fn push_positive(&mut self, pattern: impl Into<String>) {
        push_unique(&mut self.positive, pattern.into());
    }

    /// Adds an un-ignore pattern unless it is already present.
    pub fn push_negative(&mut self, pattern: impl Into<String>) {
        push_unique(&mut self.negative, pattern.into());
    }

    /// Adds every ignore pattern from `patterns`.
    pub fn extend_positive<I>(&mut self, patterns: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for pattern in patterns {
            self.push_positive(pattern);
        }
    }

    /// Adds every un-ignore pattern from `patterns`.
    pub fn extend_negative<I>(&mut self, patterns: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for pattern in patterns {
            self.push_negative(pattern);
        }
    }

    /// Returns the ignore patterns.
    #[must_use]
    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    /// Returns the un-ignore patterns.
    #[must_use]
    pub fn negative(&self) -> &[String] {
        &self.negative
    }

    /// Returns `true` when neither list holds a pattern.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

fn push_unique(list: &mut Vec<String>, pattern: String) {
    if !list.contains(&pattern) {
        list.push(pattern);
    }
}
