//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（指標の取得元・ヒントの選び方）を使うための trait

pub mod inbound;
pub mod outbound;
