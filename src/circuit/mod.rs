pub mod component;
pub mod sequence;

pub use component::{Component, ComponentKind, BRANCH_DEPTH, MAIN_DEPTH};
pub use sequence::Sequence;
