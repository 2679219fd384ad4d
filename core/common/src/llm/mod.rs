//! LLMドライバーとプロバイダの実装
//!
//! 異なるLLMプロバイダ（Claude、Gemini）で共通する処理と、
//! 起動時に 1 度だけ行うプロバイダ選択、応答 JSON の厳密なデコードを提供します。

pub mod claude;
pub mod config;
pub mod driver;
pub mod factory;
pub mod gemini;
pub mod provider;
pub mod resolver;
pub mod response;

pub use config::{AiConfig, ProviderMode, ProviderStatus, SettingsConfig};
pub use driver::LlmDriver;
pub use factory::{create_provider, AnyProvider, ProviderType};
pub use provider::{GenerationOptions, LlmProvider};
pub use resolver::{load_settings, resolve_ai_config};
pub use response::{decode_json, strip_code_fences};
