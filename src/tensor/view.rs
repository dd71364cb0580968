//! TensorView: a read-only borrowed view over a contiguous element buffer

use smallvec::SmallVec;
use std::fmt;

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};

/// Stack allocation threshold for dimensions
const STACK_DIMS: usize = 4;

/// Shape type: dimensions of a tensor
pub type Shape = SmallVec<[usize; STACK_DIMS]>;

/// Immutable view over `numel` contiguous elements
///
/// The view borrows its data, so a summarizer can neither mutate nor retain
/// the buffer beyond the call that received it. The shape is carried for
/// reporting only: reductions treat the data as one flat run of elements.
///
/// # Example
/// ```
/// use tensorsum::tensor::TensorView;
/// let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let view = TensorView::new(&data, &[2, 3]).unwrap();
/// assert_eq!(view.numel(), 6);
/// assert_eq!(view.ndim(), 2);
/// ```
#[derive(Clone, Copy)]
pub struct TensorView<'a, T: Element> {
    data: &'a [T],
    // None for views built with `from_slice`
    shape: Option<&'a [usize]>,
}

impl<'a, T: Element> TensorView<'a, T> {
    /// Create a view of `data` with the given logical shape
    ///
    /// A rank-0 shape (`&[]`) describes a scalar and must be paired with
    /// exactly one element.
    ///
    /// # Errors
    ///
    /// Returns `Error::ShapeMismatch` if the product of `shape` differs from
    /// `data.len()` or overflows `usize`.
    pub fn new(data: &'a [T], shape: &'a [usize]) -> Result<Self> {
        let numel = shape
            .iter()
            .try_fold(1usize, |acc, &dim| acc.checked_mul(dim));
        if numel != Some(data.len()) {
            return Err(Error::shape_mismatch(shape, data.len()));
        }
        Ok(Self {
            data,
            shape: Some(shape),
        })
    }

    /// Create a rank-1 view over the whole slice
    pub fn from_slice(data: &'a [T]) -> Self {
        Self { data, shape: None }
    }

    /// The underlying elements in memory order
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Logical shape; a view made with [`from_slice`](Self::from_slice) reports `[numel]`
    pub fn shape(&self) -> Shape {
        match self.shape {
            Some(shape) => shape.iter().copied().collect(),
            None => smallvec::smallvec![self.data.len()],
        }
    }

    /// Number of dimensions
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.map_or(1, <[usize]>::len)
    }

    /// Total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// True when the view holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Runtime element type
    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }
}

impl<'a, T: Element> From<&'a [T]> for TensorView<'a, T> {
    fn from(data: &'a [T]) -> Self {
        Self::from_slice(data)
    }
}

impl<T: Element> fmt::Debug for TensorView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TensorView")
            .field("shape", &self.shape())
            .field("dtype", &self.dtype())
            .finish()
    }
}
