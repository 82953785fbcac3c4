mod action;
mod credential;
mod destination;
mod device;
mod family;

pub use action::Action;
pub use credential::{Credential, CredentialStore};
pub use destination::Destination;
pub use device::DeviceRecord;
pub use family::Family;
