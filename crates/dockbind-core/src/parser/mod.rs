//! バインド指定パーサー
//!
//! `<host>:<container>[:<flags>]` 形式の文字列を [`Bind`] に変換します。
//! フィールド分割とフラグ解釈はモジュールに分離されています。

mod flags;
mod split;

pub use flags::parse_flags;
pub use split::split_n;

use crate::error::{BindError, InvalidBind, Result};
use crate::model::{Bind, BindOptions, Volume};
use tracing::debug;

/// ホスト・コンテナ・フラグの3フィールドが上限
const MAX_FIELDS: usize = 3;

/// バインド指定をパース
pub fn parse_bind(spec: &str) -> Result<Bind> {
    let fields =
        split_n(spec, MAX_FIELDS).ok_or_else(|| BindError::invalid(spec, InvalidBind::Unsplittable))?;

    let bind = match fields.as_slice() {
        [host, container] => Bind::new(*host, Volume::new(*container), BindOptions::default()),
        [host, container, flags] => {
            let options = parse_flags(flags).map_err(|cause| BindError::invalid(spec, cause))?;
            Bind::new(*host, Volume::new(*container), options)
        }
        other => {
            return Err(BindError::invalid(
                spec,
                InvalidBind::FieldCount(other.len()),
            ));
        }
    };

    debug!(spec, bind = %bind, "parsed bind specification");
    Ok(bind)
}

#[cfg(test)]
mod tests;
