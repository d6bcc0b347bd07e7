//! Generic transformation operations over ordered sequences.
//!
//! Every operation takes a slice, leaves it untouched (the single
//! exception, [`reverse_in_place`], says so in its name) and returns newly
//! allocated output. The functions are grouped into one module per family
//! but re-exported flat; there is no layering between them.

mod random;
mod search;
mod set;
mod slicing;
mod sort;
mod structural;
mod transform;

pub use random::{shuffle, shuffle_with};
pub use search::{every, find, includes, index_of, last_index_of, some};
pub use set::{difference, intersection, union, uniq};
pub use slicing::{
    chunk, drop, drop_last, drop_while, fill, partition, take, take_last, take_while,
};
pub use sort::{sorted_by, sorted_by_key};
pub use structural::{concat, equals, group_by, reverse, reverse_in_place, zip};
pub use transform::{filter, flat_map, for_each, for_each_indexed, map, reduce};
