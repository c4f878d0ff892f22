//! Output descriptors.
//!
//! Descriptors are plain value records built once by the derivation engine and
//! handed to the emitter unchanged. They carry no output text.

mod class;
mod decoration;
mod field;
mod imports;

pub use class::{ClassDescriptor, Projection, AGGREGATE_ROOT};
pub use decoration::{Decoration, DecoratorArg, DecoratorOption};
pub use field::FieldDescriptor;
pub use imports::{ImportEntry, ImportRecord};
