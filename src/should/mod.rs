pub(crate) mod assertion;
pub mod assertion_failure;
pub mod expect;
