//! Value Objects

pub mod package_spec;
pub mod postal_code;

pub use package_spec::PackageSpec;
pub use postal_code::PostalCode;
