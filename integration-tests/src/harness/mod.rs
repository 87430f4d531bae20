mod fixtures;
pub mod tracing;

pub use fixtures::{LogDir, ps_output};
pub use self::tracing::{CapturedEvent, captured_events, init_test_tracing};
