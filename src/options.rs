//! Build options.

use ooj_core::StubPolicy;

/// Options passed explicitly to the `*_with` entry points.
///
/// The plain entry points ([`crate::define`], [`crate::class`], ...) use
/// `DefineOptions::default()`.
///
/// ```
/// use ooj::{DefineOptions, StubPolicy};
///
/// let options = DefineOptions::new().with_stub_policy(StubPolicy::Fail);
/// assert_eq!(options.stub_policy, StubPolicy::Fail);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefineOptions {
    /// Behaviour of stubs installed for unimplemented interface capabilities.
    pub stub_policy: StubPolicy,
}

impl DefineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options under which invoking a never-implemented capability fails.
    pub fn strict() -> Self {
        Self::new().with_stub_policy(StubPolicy::Fail)
    }

    pub fn with_stub_policy(mut self, stub_policy: StubPolicy) -> Self {
        self.stub_policy = stub_policy;
        self
    }
}
