//! Domain model（配送オプションの値型とエラー）
//!
//! - rate: ShippingType / ShippingRate（§6 のワイヤ形状）
//! - query: ServiceabilityQuery（宛先郵便番号 + 重量）
//! - options: ShippingOptions（空にならない配送オプション列）
//! - errors: QueryError / LookupError / ConfigError

pub mod errors;
pub mod options;
pub mod query;
pub mod rate;

pub use self::errors::{ConfigError, ErrorKind, LookupError, QueryError};
pub use self::options::ShippingOptions;
pub use self::query::ServiceabilityQuery;
pub use self::rate::{ShippingRate, ShippingType};
