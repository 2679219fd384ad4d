//! 推奨に添えるプラットフォームのヒントを 1 件選ぶ

pub trait TipPicker: Send + Sync {
    /// 候補が空なら None
    fn pick(&self, tips: &[&'static str]) -> Option<&'static str>;
}
