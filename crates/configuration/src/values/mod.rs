mod connection_info;
mod pool_settings;
mod secret;
mod table_names;

pub use connection_info::{ConnectionUri, Password};
pub use pool_settings::PoolSettings;
pub use secret::Secret;
pub use table_names::{TableName, TableNames};
