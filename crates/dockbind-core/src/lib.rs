//! Docker のバインドマウント指定 (`/host:/container:ro,Z`) を扱うコアクレート
//!
//! 文字列のパース、構造化された値オブジェクト、および正規形への書き戻しを提供します。

pub mod error;
pub mod model;
pub mod parser;

pub use error::*;
pub use model::*;
pub use parser::{parse_bind, split_n};
