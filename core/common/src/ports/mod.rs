//! common が提供するポート（outbound のみ。入口は各バイナリの ports::inbound）

pub mod outbound;
