//! Built-in resolver nodes.
//!
//! ```text
//! PropRoot ── property_a (instance slot) ── PropA ── property_c (instance slot) ── PropC
//!          └─ property_b (instance slot) ── PropB ── property_d (type slot)     ── PropD
//! ```

mod leaf;
mod property_a;
mod property_b;
mod root;

pub use leaf::{Fails, PropC, PropD, Succeeds};
pub use property_a::PropA;
pub use property_b::PropB;
pub use root::PropRoot;
