//! A comparator-ordered set backed by a skip list.
//!
//! `SkipSet` keeps opaque item values in the order defined by a caller
//! supplied three-way comparator. Expected cost of insertion, removal and
//! membership tests is O(log n). The whole structure sits behind one mutex:
//! every operation is atomic with respect to every other, which makes the
//! set usable as a building block for ordered indexes shared across threads.
//!
//! ```
//! use skipset::SkipSet;
//!
//! let set = SkipSet::new(i32::cmp);
//! assert!(set.insert(2));
//! assert!(set.insert(1));
//! assert!(!set.insert(2)); // duplicate
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 2]);
//! ```

mod height_generator;
mod iter;
mod list;
mod node;

pub use crate::height_generator::GenHeight;
pub use crate::height_generator::HeightGenerator;
pub use crate::iter::{SkipSetIter, SkipSetIterRev};
pub use crate::list::{SkipSet, MAX_HEIGHT};
