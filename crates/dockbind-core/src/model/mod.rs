//! モデル定義
//!
//! バインドマウント指定を構成する値オブジェクトを定義します。
//! 列挙型はすべて短いコード文字列との対応表を持ちます。

mod access_mode;
mod bind;
mod binds;
mod propagation;
mod sel_context;
mod volume;

// Re-exports
pub use access_mode::*;
pub use bind::*;
pub use binds::*;
pub use propagation::*;
pub use sel_context::*;
pub use volume::*;
