/// Runtime options of a traversal.
///
/// # Examples
///
/// ```
/// use sc_class::walk::WalkOptions;
///
/// assert_eq!(WalkOptions::new().max_depth(), None);
/// assert_eq!(WalkOptions::new().with_max_depth(8).max_depth(), Some(8));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    max_depth: Option<usize>,
}

impl WalkOptions {
    /// Options with no depth limit.
    #[inline]
    pub const fn new() -> Self {
        Self { max_depth: None }
    }

    /// Bounds the nesting of instances, sequences and records.
    ///
    /// Exceeding it fails the call with
    /// [`ClassError::DepthLimitExceeded`](crate::ClassError::DepthLimitExceeded).
    #[inline]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[inline]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}
