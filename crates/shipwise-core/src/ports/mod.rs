//! Ports - 抽象化レイヤー
//!
//! Hexagonal Architecture の「ポート」。resolver は courier API を直接呼ばず、
//! 呼び出し側が注入した `CourierLookup` 経由で問い合わせる。
//! これにより、ネットワークなしでテストでき、courier 連携も差し替え可能になる。

pub mod courier_lookup;

pub use self::courier_lookup::CourierLookup;
