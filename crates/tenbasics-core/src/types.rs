//! Shared type aliases

use smallvec::SmallVec;

/// Owned tensor shape, the analogue of `torch.Size`.
///
/// Most tensors have at most six dimensions, so shapes stay inline.
///
/// # Examples
///
/// ```
/// use tenbasics_core::{Shape, Tensor};
///
/// let tensor = Tensor::<f32>::zeros(&[3, 4]);
/// let size: Shape = tensor.size();
/// assert_eq!(size.len(), 2);
/// assert_eq!(size[1], 4);
/// ```
pub type Shape = SmallVec<[usize; 6]>;

/// Number of dimensions of a tensor
pub type Rank = usize;
