//! Compact JSON output for the restaurant wire format.
//!
//! Both modes go through `serde_json`; they differ only in the
//! [`Formatter`] used for string escapes and floating-point numbers.

use std::io;
use std::str::FromStr;

use serde::Serialize;
use serde_json::ser::{CharEscape, Formatter};

/// How string values and numbers are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escaping {
    /// RFC 8259 output from `serde_json`'s compact formatter. Numbers use
    /// the shortest round-trip form (`4.5`, `10.0`).
    #[default]
    Standard,
    /// The layout older consumers received. Strings are copied without
    /// escaping and numbers are written like C++ `operator<<(double)` (6
    /// significant digits, `%g` style). The output may be invalid JSON.
    /// Non-finite numbers are still written as `null`.
    Legacy,
}

impl FromStr for Escaping {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "legacy" => Ok(Self::Legacy),
            other => anyhow::bail!("unknown escaping mode `{other}`, expect `standard` or `legacy`"),
        }
    }
}

/// Serializes `value` as compact JSON with the given escaping mode.
pub fn to_string<T: Serialize + ?Sized>(value: &T, escaping: Escaping) -> serde_json::Result<String> {
    match escaping {
        Escaping::Standard => serde_json::to_string(value),
        Escaping::Legacy => {
            let mut out = Vec::with_capacity(256);
            let mut ser = serde_json::Serializer::with_formatter(&mut out, LegacyFormatter);
            value.serialize(&mut ser)?;
            // fragments come from &str and raw escapes are ASCII, so this is UTF-8
            Ok(String::from_utf8(out)
                .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
        }
    }
}

/// Compact formatter that writes escapable characters raw and floats in
/// `%g` form.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyFormatter;

impl Formatter for LegacyFormatter {
    fn write_char_escape<W>(&mut self, writer: &mut W, char_escape: CharEscape) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let byte = match char_escape {
            CharEscape::Quote => b'"',
            CharEscape::ReverseSolidus => b'\\',
            CharEscape::Solidus => b'/',
            CharEscape::Backspace => b'\x08',
            CharEscape::FormFeed => b'\x0c',
            CharEscape::LineFeed => b'\n',
            CharEscape::CarriageReturn => b'\r',
            CharEscape::Tab => b'\t',
            CharEscape::AsciiControl(byte) => byte,
        };
        writer.write_all(&[byte])
    }

    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(format_general(value).as_bytes())
    }
}

const GENERAL_PRECISION: i32 = 6;

/// `printf("%g")` with the default precision of 6.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // the exponent after rounding to 6 significant digits decides the style
    let scientific = format!("{:.*e}", (GENERAL_PRECISION - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= GENERAL_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (GENERAL_PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
