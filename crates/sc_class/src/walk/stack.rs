use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use super::Segment;

/// One step of the path from the root to the value being walked.
#[derive(Clone)]
enum Frame {
    Instance(String),
    Field(String),
    Index(usize),
}

/// The path of the current traversal, logged when a call fails.
#[derive(Default, Clone)]
pub(super) struct WalkStack {
    stack: Vec<Frame>,
}

impl WalkStack {
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Returns `false` if the segment is not recorded.
    pub fn push(&mut self, segment: &Segment<'_>) -> bool {
        let frame = match *segment {
            Segment::Instance(class) => Frame::Instance(String::from(class)),
            Segment::Field(name) => Frame::Field(String::from(name)),
            Segment::Index(index) => Frame::Index(index),
            Segment::Sequence | Segment::Record => return false,
        };
        self.stack.push(frame);
        true
    }

    pub fn pop(&mut self) {
        self.stack.pop();
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

impl Debug for WalkStack {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for (i, frame) in self.stack.iter().enumerate() {
            match frame {
                Frame::Instance(class) if i == 0 => write!(f, "`{class}`")?,
                Frame::Instance(class) => write!(f, " -> `{class}`")?,
                Frame::Field(name) => write!(f, ".{name}")?,
                Frame::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::WalkStack;
    use crate::walk::Segment;

    #[test]
    fn path_format() {
        let mut stack = WalkStack::new();
        stack.push(&Segment::Instance("Outer"));
        stack.push(&Segment::Field("items"));
        assert!(!stack.push(&Segment::Sequence));
        stack.push(&Segment::Index(2));
        stack.push(&Segment::Instance("Inner"));
        assert_eq!(format!("{stack:?}"), "`Outer`.items[2] -> `Inner`");

        stack.pop();
        stack.pop();
        assert_eq!(format!("{stack:?}"), "`Outer`.items");

        stack.clear();
        assert_eq!(format!("{stack:?}"), "");
    }
}
