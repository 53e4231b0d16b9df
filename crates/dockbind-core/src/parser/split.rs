//! ':' 区切りのフィールド分割
//!
//! Windows のドライブレター（`C:\foo`）の ':' は区切りとして扱いません。

/// `raw` を最大 `n` 個のフィールドに分割
///
/// - 空文字列、または ':' で始まる文字列は `None`
/// - `n - 1` 個の区切りを消費した後の残りは、':' を含めてそのまま最後のフィールドになる
/// - 末尾の ':' の後ろに空フィールドは作らない
/// - `n == 0` の場合は空の一覧を返す
pub fn split_n(raw: &str, n: usize) -> Option<Vec<&str>> {
    if raw.is_empty() || raw.starts_with(':') {
        return None;
    }
    if n == 0 {
        return Some(Vec::new());
    }

    let bytes = raw.as_bytes();
    let mut fields = Vec::with_capacity(n);
    // 現在のフィールドの開始位置
    let mut left = 0;

    // index 0 は ':' でないことを確認済み
    for right in 1..bytes.len() {
        if fields.len() + 1 >= n {
            break;
        }
        if bytes[right] != b':' || is_drive_letter_colon(bytes, left, right) {
            continue;
        }
        fields.push(&raw[left..right]);
        left = right + 1;
    }

    if left < raw.len() {
        fields.push(&raw[left..]);
    }

    Some(fields)
}

/// `raw[right]` の ':' がドライブレターの一部かどうか
///
/// 直前の文字が ASCII の英字で、かつその英字が現在のフィールドの先頭にある場合に限り
/// ドライブレターとみなす。
/// - 文字列の先頭の英字（`C:...`）は常にドライブレター
/// - 区切りの ':' の直後の英字は、':' の後ろが `\` か `/` のとき（`/a:D:\dst`）だけドライブレター
///
/// `/a:` や `dir:` のように英字の前に別の文字がある場合、`/a:b:ro` の `b:` は区切りになる。
fn is_drive_letter_colon(raw: &[u8], left: usize, right: usize) -> bool {
    if right == 0 || right - 1 != left || !raw[right - 1].is_ascii_alphabetic() {
        return false;
    }
    right == 1 || matches!(raw.get(right + 1), Some(b'\\' | b'/'))
}
