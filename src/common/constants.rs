//! Source names, upstream defaults and environment keys

// Source A: flat array of products already in the common shape
pub const FAKE_STORE_SOURCE: &str = "fake_store";
pub const FAKE_STORE_URL: &str = "https://fakestoreapi.com/products";

// Source B: paginated envelope whose records need transforming
pub const DUMMY_JSON_SOURCE: &str = "dummy_json";
pub const DUMMY_JSON_URL: &str = "https://dummyjson.com/products";

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

// Environment overrides
pub const ENV_PORT: &str = "CATALOG_PORT";
pub const ENV_SOURCE_A_URL: &str = "CATALOG_SOURCE_A_URL";
pub const ENV_SOURCE_B_URL: &str = "CATALOG_SOURCE_B_URL";
pub const ENV_OUTPUT_VARIANT: &str = "CATALOG_OUTPUT_VARIANT";
