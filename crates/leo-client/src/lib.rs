mod endpoints;
mod gateway;
mod transport;
mod wire;

pub use endpoints::{DEFAULT_API_URL, DEFAULT_AUTH_URL, Endpoints};
pub use gateway::{Account, LinguaLeoGateway};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
