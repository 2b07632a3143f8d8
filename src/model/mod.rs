mod node;
mod param;

pub use node::{Decl, TopLevelNode};
pub use param::{DESTRUCTURED_PARAM, ParameterDescriptor, UNKNOWN_TYPE};
