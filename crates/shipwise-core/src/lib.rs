//! shipwise-core
//!
//! Shipping option resolution for the storefront checkout.
//!
//! # モジュール構成
//! - **domain**: 値型（ShippingRate, ServiceabilityQuery, ShippingOptions）とエラー
//! - **ports**: 抽象化レイヤー（CourierLookup）
//! - **impls**: CourierLookup の実装（RateCardCourier, StaticCourier, Timeout/Retry ラッパー）
//! - **resolver**: 配送オプションの決定（FallbackPolicy, ShippingResolver）
//! - **config**: TOML + 環境変数による設定

pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod resolver;

pub use config::ShippingConfig;
pub use domain::{
    ConfigError, ErrorKind, LookupError, QueryError, ServiceabilityQuery, ShippingOptions,
    ShippingRate, ShippingType,
};
pub use ports::CourierLookup;
pub use resolver::{FallbackPolicy, ShippingResolver, assemble_options, resolve_shipping_options};
