//! Graph algorithms
mod traversal;
pub use self::traversal::*;
mod paths;
pub use self::paths::*;
mod connected_components;
pub use self::connected_components::*;
mod cycle;
pub use self::cycle::*;
mod two_color;
pub use self::two_color::*;
mod toposort;
pub use self::toposort::*;
mod scc;
pub use self::scc::*;
mod degrees_of_separation;
pub use self::degrees_of_separation::*;
mod min_cut;
pub use self::min_cut::*;
