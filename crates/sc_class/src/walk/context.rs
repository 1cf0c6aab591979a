use crate::ClassError;

use super::WalkOptions;

#[cfg(all(debug_assertions, feature = "debug"))]
use super::stack::WalkStack;

/// A step of the traversal.
///
/// Instances, sequences and records count towards the depth limit. Fields
/// and indices only label the path.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Segment<'a> {
    Instance(&'a str),
    Sequence,
    Record,
    Field(&'a str),
    Index(usize),
}

impl Segment<'_> {
    #[inline]
    const fn is_nesting(&self) -> bool {
        matches!(self, Self::Instance(_) | Self::Sequence | Self::Record)
    }
}

/// Per-call traversal state: the nesting depth and, with the `debug`
/// feature, the path walked so far.
pub(crate) struct WalkContext {
    options: WalkOptions,
    depth: usize,
    #[cfg(all(debug_assertions, feature = "debug"))]
    stack: WalkStack,
}

impl WalkContext {
    pub fn new(options: WalkOptions) -> Self {
        Self {
            options,
            depth: 0,
            #[cfg(all(debug_assertions, feature = "debug"))]
            stack: WalkStack::new(),
        }
    }

    /// Runs `f` one step further down.
    ///
    /// On failure the path is left as is, so the caller of
    /// [`finish`](Self::finish) sees where the error happened.
    pub fn enter<R>(
        &mut self,
        segment: Segment<'_>,
        f: impl FnOnce(&mut Self) -> Result<R, ClassError>,
    ) -> Result<R, ClassError> {
        let nesting = segment.is_nesting();
        if nesting {
            if let Some(limit) = self.options.max_depth()
                && self.depth >= limit
            {
                return Err(ClassError::DepthLimitExceeded { limit });
            }
            self.depth += 1;
        }

        #[cfg(all(debug_assertions, feature = "debug"))]
        let pushed = self.stack.push(&segment);

        let result = f(self)?;

        #[cfg(all(debug_assertions, feature = "debug"))]
        if pushed {
            self.stack.pop();
        }

        if nesting {
            self.depth -= 1;
        }
        Ok(result)
    }

    /// Ends a top-level call, logging the path of a failure.
    pub fn finish<R>(mut self, result: Result<R, ClassError>) -> Result<R, ClassError> {
        #[cfg(all(debug_assertions, feature = "debug"))]
        if let Err(err) = &result {
            log::debug!("{err} (path: {:?})", self.stack);
            self.stack.clear();
        }
        self.depth = 0;
        result
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Segment, WalkContext};
    use crate::ClassError;
    use crate::walk::WalkOptions;

    fn nest(cx: &mut WalkContext, levels: usize) -> Result<usize, ClassError> {
        if levels == 0 {
            return Ok(0);
        }
        cx.enter(Segment::Field("next"), |cx| {
            cx.enter(Segment::Instance("Node"), |cx| Ok(nest(cx, levels - 1)? + 1))
        })
    }

    #[test]
    fn unbounded_by_default() {
        let mut cx = WalkContext::new(WalkOptions::new());
        assert_eq!(nest(&mut cx, 64).unwrap(), 64);
    }

    #[test]
    fn limit_is_inclusive() {
        let mut cx = WalkContext::new(WalkOptions::new().with_max_depth(3));
        assert_eq!(nest(&mut cx, 3).unwrap(), 3);

        let result = nest(&mut cx, 4);
        assert!(matches!(
            cx.finish(result),
            Err(ClassError::DepthLimitExceeded { limit: 3 })
        ));
    }

    #[test]
    fn fields_do_not_count() {
        let mut cx = WalkContext::new(WalkOptions::new().with_max_depth(1));
        let result = cx.enter(Segment::Instance("Root"), |cx| {
            cx.enter(Segment::Field("a"), |cx| cx.enter(Segment::Index(0), |_| Ok(())))
        });
        assert!(result.is_ok());
    }
}
