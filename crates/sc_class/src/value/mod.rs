//! The value model on both sides of the boundary.
//!
//! - [`PlainValue`] / [`PlainRecord`]: the JSON-compatible shape handed to and
//!   received from collaborators. A record carrying [`CLASS_TAG`] is tagged.
//! - [`Value`]: the live dynamic value the walker produces while deserializing,
//!   which may hold instances and functions.
//! - [`Record`]: the insertion-ordered map both sides use.

// -----------------------------------------------------------------------------
// Modules

mod codec;
mod kind;
mod live;
mod number;
mod plain;
mod record;

// -----------------------------------------------------------------------------
// Exports

pub use kind::ValueKind;
pub use live::{Function, Value};
pub use number::Number;
pub use plain::{CLASS_TAG, PlainRecord, PlainValue};
pub use record::Record;
