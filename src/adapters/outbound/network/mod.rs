/// Network adapters for the registry and advisory services
mod http_client;
pub mod json_decoder;
mod nuget_client;
mod oss_index_client;

pub use http_client::{JsonHttpClient, DEFAULT_TIMEOUT_SECS};
pub use nuget_client::NuGetRegistryClient;
pub use oss_index_client::OssIndexClient;
