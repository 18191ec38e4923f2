//! Impls - CourierLookup の実装
//!
//! # 含まれる実装
//! - **RateCardCourier**: 料金表ベースの courier（基本料金 + 切り上げ kg 単価）
//! - **StaticCourier**: 固定応答（テスト・オフライン用）
//! - **TimeoutCourier**: 期限付きラッパー
//! - **RetryingCourier**: Transient エラーを指数バックオフで再試行するラッパー
//!
//! 実 courier API へのクライアントはこのクレートの外に置く。

pub mod rate_card;
pub mod retry;
pub mod static_courier;
pub mod timeout;

pub use self::rate_card::{RateCard, RateCardCourier};
pub use self::retry::{RetryPolicy, RetryingCourier};
pub use self::static_courier::{StaticCourier, StaticResponse};
pub use self::timeout::TimeoutCourier;
