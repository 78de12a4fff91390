pub mod harness;

pub use harness::TestContext;
