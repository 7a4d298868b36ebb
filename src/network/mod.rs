pub mod gas;
pub mod profile;
pub mod registry;
pub mod secret;

pub use gas::GasPricePolicy;
pub use profile::NetworkProfile;
pub use registry::NetworkProfileRegistry;
pub use secret::Secret;
