// Shared building blocks for Veneer MCP adapters: tool catalogs, path
// templating, and HTTP dispatch against vendor REST APIs.

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod template;
pub mod transport;

pub use catalog::{Catalog, Endpoint, ParamSpec, ParamType, ToolDescriptor};
pub use config::{AdapterConfig, ACCESS_TOKEN_ENV};
pub use dispatch::Dispatcher;
pub use error::{VeneerError, VeneerResult};
pub use template::PathTemplate;
pub use transport::Transport;

pub use reqwest::Method;
