//! Legacy token decryption.
//!
//! Tokens are hex-encoded AES-128 ciphertext in CFB mode with 8-bit
//! segments, optionally prefixed by the hex of the IV. Key and IV are fixed
//! by the systems that issued the tokens. Response columns mix tokens and
//! plaintext, so anything that does not decrypt to UTF-8 text comes back
//! unchanged.

use aes::Aes128;
use aes::cipher::{AsyncStreamCipher, KeyIvInit};
use polars::prelude::DataFrame;
use tracing::debug;

use dts_common::{string_column, string_values};

use crate::error::{PostError, Result};

type TokenDecryptor = cfb8::Decryptor<Aes128>;

const KEY: &[u8; 16] = b"Sixteen byte key";
const IV: &[u8; 16] = b"#cd\xe0\xcd\xb09>\xa1\x0f\xfe%l\xd5\xbe\xe3";

/// Suffix of the column holding decrypted values.
pub const DECRYPTED_SUFFIX: &str = "_decrypted";

/// Decrypt a token, or return the trimmed input when it is not one.
pub fn detokenise(value: &str) -> String {
    let value = value.trim();
    let Ok(bytes) = hex::decode(value) else {
        return value.to_string();
    };
    let mut buf = bytes.strip_prefix(IV.as_slice()).unwrap_or(&bytes).to_vec();
    TokenDecryptor::new(KEY.into(), IV.into()).decrypt(&mut buf);
    match String::from_utf8(buf) {
        Ok(text) => text.trim().to_string(),
        Err(_) => value.to_string(),
    }
}

/// Copy of the table with `<column>_decrypted` added.
///
/// Absent values decrypt to an empty string.
pub fn detokenise_column(df: &DataFrame, column: &str) -> Result<DataFrame> {
    if df.column(column).is_err() {
        return Err(PostError::ColumnNotFound {
            column: column.to_string(),
        });
    }
    let original = string_values(df, column)?;
    let decrypted: Vec<Option<String>> = original
        .iter()
        .map(|value| Some(detokenise(value.as_deref().unwrap_or_default())))
        .collect();
    let changed = original
        .iter()
        .zip(&decrypted)
        .filter(|(before, after)| before.as_deref().map(str::trim) != after.as_deref())
        .count();
    debug!(column, rows = decrypted.len(), changed, "column decrypted");

    let mut out = df.clone();
    out.with_column(string_column(
        &format!("{column}{DECRYPTED_SUFFIX}"),
        decrypted,
    ))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iv_matches_known_hex() {
        assert_eq!(hex::encode(IV), "236364e0cdb0393ea10ffe256cd5bee3");
    }

    #[test]
    fn decrypts_bare_ciphertext() {
        assert_eq!(detokenise("f65ff64229adcfba55ff"), "9876543210");
        assert_eq!(detokenise("8e84ea8052aa7045d0ae"), "ABCDE1234F");
    }

    #[test]
    fn strips_iv_prefix_in_any_case() {
        assert_eq!(
            detokenise("236364e0cdb0393ea10ffe256cd5bee3a7c363441f768952895f58"),
            "hello world"
        );
        assert_eq!(
            detokenise(" 236364E0CDB0393EA10FFE256CD5BEE3F65FF64229ADCFBA55FF "),
            "9876543210"
        );
    }

    #[test]
    fn plaintext_is_trimmed_only() {
        assert_eq!(detokenise("  Asha Rao "), "Asha Rao");
        assert_eq!(detokenise("abc"), "abc");
        assert_eq!(detokenise(""), "");
    }
}
