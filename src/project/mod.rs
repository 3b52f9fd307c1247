pub mod descriptor;
pub mod need;

pub use descriptor::{ProjectDescriptor, ProjectType};
pub use need::NeedTag;
