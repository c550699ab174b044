pub mod compose_document;
pub mod depth;
pub mod port;
pub mod service_name;
pub mod start_port;

pub use compose_document::{ComposeDocument, ComposeParseError, ComposeValue};
pub use depth::{Comparator, DepthExpression, DEFAULT_DEPTH};
pub use port::{MalformedPort, Port, PortRecord};
pub use service_name::{ServiceName, ServiceSet, DEFAULT_SERVICE};
pub use start_port::{StartPort, MINIMUM_START_PORT};
