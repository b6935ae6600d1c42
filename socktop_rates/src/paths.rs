//! Output naming: `raw.csv` -> `rates.csv`, `raw-X` -> `rates-X`, else `X.rates.csv`.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

pub fn output_path(input: &Path) -> PathBuf {
    let name = input.file_name().unwrap_or_default();
    input.with_file_name(output_name(name))
}

fn output_name(name: &OsStr) -> OsString {
    let bytes = name.as_encoded_bytes();
    if bytes == b"raw.csv" {
        return OsString::from("rates.csv");
    }
    if let Some(rest) = bytes.strip_prefix(b"raw-") {
        // SAFETY: `rest` follows the ASCII prefix "raw-" of a valid OsStr encoding,
        // so it starts on a valid boundary and runs to the end of `name`.
        let rest = unsafe { OsStr::from_encoded_bytes_unchecked(rest) };
        let mut out = OsString::from("rates-");
        out.push(rest);
        return out;
    }
    let mut out = name.to_os_string();
    out.push(".rates.csv");
    out
}
