//! Tensor views
//!
//! The summarizer never owns tensor data. Callers hand it a [`TensorView`],
//! a borrowed contiguous buffer tagged with the logical shape it came from.

mod view;

pub use view::{Shape, TensorView};
