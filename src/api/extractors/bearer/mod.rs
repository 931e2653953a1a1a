/*!
 * Bearer token extractor
 *
 * Responsibility:
 * - Authorization ヘッダから Bearer トークンを取り出して handler に渡す
 * - 抽出ロジックは types に、axum 依存は core に閉じ込める
 *
 * Public API:
 * - extract_bearer
 * - MaybeBearer
 */

mod core;
mod types;

pub use self::core::MaybeBearer;
pub use self::types::extract_bearer;
