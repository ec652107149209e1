pub mod api_client;
pub mod normalize;

pub use api_client::ApiClient;
pub use normalize::normalize_collection;
