#[cfg(feature = "hashbrown")]
pub use hashbrown::{HashMap, HashSet};

#[cfg(not(feature = "hashbrown"))]
pub use std::collections::{HashMap, HashSet};
