mod adapter;
mod cisco;
mod polycom;
mod registry;
mod session;
mod yealink;

pub use adapter::{AdapterError, DeviceAdapter};
pub use cisco::CiscoAdapter;
pub use polycom::PolycomAdapter;
pub use registry::AdapterRegistry;
pub use session::{SessionSettings, WebSession};
pub use yealink::YealinkAdapter;
