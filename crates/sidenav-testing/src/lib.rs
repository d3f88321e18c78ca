//! Testing utilities and harness for the SideNav shell

pub mod headless;
pub mod robot;
pub mod robot_assertions;

pub use headless::HeadlessRenderer;
pub use robot::*;

pub mod prelude {
    pub use crate::headless::HeadlessRenderer;
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
