//! Confluation 共通ライブラリ
//!
//! `confluation`（インタビュー）と `pulse`（ダッシュボード）で共有される機能を提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// LLMドライバーとプロバイダ
pub mod llm;

/// Outbound ポート
pub mod ports;

/// ポートの標準実装
pub mod adapter;
