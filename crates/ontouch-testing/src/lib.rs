//! Testing utilities and harness for ontouch

pub mod recorder;
pub mod robot;

pub use recorder::{Delivery, DeliveryRecorder};
pub use robot::TouchRobot;

pub mod prelude {
    pub use crate::recorder::{Delivery, DeliveryRecorder};
    pub use crate::robot::TouchRobot;
}
