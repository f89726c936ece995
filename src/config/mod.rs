pub mod store_config;

pub use store_config::{parse_snowflake, StoreConfig};
