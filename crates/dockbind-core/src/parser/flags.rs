//! フラグフィールドの解釈

use crate::error::InvalidBind;
use crate::model::{AccessMode, BindOptions, PropagationMode, SelContext};

/// ',' 区切りのフラグを [`BindOptions`] に変換
///
/// トークンは次の優先順で分類されます:
/// 1. 2文字 → アクセスモード（`rw` / `ro`、大文字小文字を区別しない）
/// 2. `nocopy`
/// 3. `shared` / `slave` / `private` → プロパゲーション
/// 4. それ以外 → SELinux 指定
///
/// 空のトークンは無視し、同じ種類のトークンが複数ある場合は後のものが優先されます。
pub fn parse_flags(field: &str) -> Result<BindOptions, InvalidBind> {
    let mut options = BindOptions::default();

    for token in field.split(',').filter(|t| !t.is_empty()) {
        if token.chars().count() == 2 {
            options.access_mode = AccessMode::from_code(token)
                .ok_or_else(|| InvalidBind::UnknownAccessMode(token.to_string()))?;
        } else if token == "nocopy" {
            options.no_copy = Some(true);
        } else if let Some(mode) = PropagationMode::from_keyword(token) {
            options.propagation_mode = mode;
        } else {
            options.sel_context = SelContext::parse(token)?;
        }
    }

    Ok(options)
}
