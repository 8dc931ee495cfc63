pub mod builder;
pub mod constant;
pub mod fake;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use fake::{ApiCall, Endpoint, FakeAttendanceApi};
pub use setup::{TestController, TestSetup};

pub mod prelude {
    pub use crate::{
        constant::{TEST_CLASS_ID, TEST_CLASS_NAME, TEST_OTHER_CLASS_ID, TEST_OTHER_CLASS_NAME},
        fixtures::factory,
        ApiCall, Endpoint, FakeAttendanceApi, TestBuilder, TestSetup,
    };
}
