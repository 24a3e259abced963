//! A binary search tree over the keys `[1, 99]` with lazy deletion, plus the
//! line-oriented command protocol used to drive it.
//!
//! ```
//! use lazytree::prelude::*;
//!
//! let mut tree = LazyTree::new();
//! for key in [50, 30, 70, 20] {
//!     tree.insert(key)?;
//! }
//! tree.delete(50)?;
//!
//! assert_eq!(tree.serialize(), "*50 30 20 70 ");
//! assert_eq!(tree.find_min().map(|key| key.get()), Some(20));
//! assert_eq!(tree.len(), 4);
//! # Ok::<(), lazytree::prelude::Error>(())
//! ```

mod error;

pub mod collections;
pub mod command;
pub mod prelude;
pub mod testing;
pub mod values;

#[macro_export]
macro_rules! prop_assert_changes {
    ($action: expr, $value: expr) => {
        let old_value = $value.clone();

        prop_assert_eq!($value, old_value);

        $action;

        prop_assert_ne!($value, old_value);
    };
}

#[macro_export]
macro_rules! prop_assert_does_not_change {
    ($action: expr, $value: expr) => {
        let old_value = $value.clone();

        $action;

        prop_assert_eq!($value, old_value);
    };
}
