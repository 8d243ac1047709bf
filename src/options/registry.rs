//! Alias table and per-identifier validation rules
//!
//! Both tables are process-wide constants: built once, never mutated, safe
//! for unsynchronized concurrent reads.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{OptionError, Result};
use crate::options::types::{OptionKind, Value};
use crate::transport::{self, TransferOpt};

/// A caller-supplied option reference: human-readable name or numeric id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionRef {
    Name(String),
    Id(i64),
}

impl From<&str> for OptionRef {
    fn from(name: &str) -> Self {
        OptionRef::Name(name.to_string())
    }
}

impl From<String> for OptionRef {
    fn from(name: String) -> Self {
        OptionRef::Name(name)
    }
}

impl From<i64> for OptionRef {
    fn from(id: i64) -> Self {
        OptionRef::Id(id)
    }
}

impl From<i32> for OptionRef {
    fn from(id: i32) -> Self {
        OptionRef::Id(id as i64)
    }
}

impl From<TransferOpt> for OptionRef {
    fn from(opt: TransferOpt) -> Self {
        OptionRef::Id(opt.raw())
    }
}

static SEPARATOR_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ _]+").unwrap());

/// Accepted option aliases, keyed in normalized form.
static ALIASES: Lazy<HashMap<&'static str, TransferOpt>> = Lazy::new(|| {
    HashMap::from([
        ("http-header", TransferOpt::HttpHeader),
        ("crlf", TransferOpt::Crlf),
        ("header-out", TransferOpt::HeaderOut),
        ("return-transfer", TransferOpt::ReturnTransfer),
        ("verbose", TransferOpt::Verbose),
        ("user-agent", TransferOpt::UserAgent),
        ("ssl-version", TransferOpt::SslVersion),
        ("cookie-file", TransferOpt::CookieFile),
        ("cookie-jar", TransferOpt::CookieJar),
        ("referer", TransferOpt::Referer),
        ("auto-referer", TransferOpt::AutoReferer),
        ("file-time", TransferOpt::FileTime),
        ("user-password", TransferOpt::UserPwd),
        ("http-version", TransferOpt::HttpVersion),
        ("port", TransferOpt::Port),
        ("encoding", TransferOpt::AcceptEncoding),
        ("buffer-size", TransferOpt::BufferSize),
        ("post-redir", TransferOpt::PostRedir),
        ("stderr", TransferOpt::Stderr),
        ("netrc", TransferOpt::Netrc),
        ("header", TransferOpt::Header),
        ("include", TransferOpt::Header),
        ("connect-timeout", TransferOpt::ConnectTimeout),
        ("connection-timeout", TransferOpt::ConnectTimeout),
        ("timeout", TransferOpt::Timeout),
        ("max-time", TransferOpt::Timeout),
        ("ssl-verify-host", TransferOpt::SslVerifyHost),
        ("ssl-verify-peer", TransferOpt::SslVerifyPeer),
        ("insecure", TransferOpt::SslVerifyPeer),
        ("follow-location", TransferOpt::FollowLocation),
        ("follow-redirects", TransferOpt::FollowLocation),
        ("location", TransferOpt::FollowLocation),
        ("max-redirs", TransferOpt::MaxRedirs),
        ("max-redirects", TransferOpt::MaxRedirs),
        ("cookie", TransferOpt::Cookie),
        ("cookies", TransferOpt::Cookie),
        ("http-auth", TransferOpt::HttpAuth),
        ("auth", TransferOpt::HttpAuth),
        ("unrestricted-auth", TransferOpt::UnrestrictedAuth),
        ("location-trusted", TransferOpt::UnrestrictedAuth),
        ("forbid-reuse", TransferOpt::ForbidReuse),
        ("fresh-connect", TransferOpt::FreshConnect),
    ])
});

/// Normalize a textual option name: trim, collapse runs of spaces and
/// underscores into a single hyphen, lowercase.
pub(crate) fn normalize_name(name: &str) -> String {
    SEPARATOR_RUNS
        .replace_all(name.trim(), "-")
        .to_lowercase()
}

/// Resolve a name or numeric id to its canonical identifier.
///
/// Pure lookup against constant tables; rejects anything outside the
/// canonical enumeration.
pub fn resolve(option: impl Into<OptionRef>) -> Result<TransferOpt> {
    match option.into() {
        OptionRef::Name(name) => {
            let key = normalize_name(&name);
            match ALIASES.get(key.as_str()) {
                Some(opt) => {
                    log::trace!("resolved option alias {key:?} -> {opt}");
                    Ok(*opt)
                }
                None => Err(OptionError::new(format!(
                    "\"{key}\" is not a valid transfer option"
                ))),
            }
        }
        OptionRef::Id(raw) => TransferOpt::from_raw(raw).ok_or_else(|| {
            OptionError::new(format!("\"{raw}\" is not a valid transfer option"))
        }),
    }
}

static SSL_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-6]$").unwrap());
static SSL_VERIFY_HOST: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[12]$").unwrap());
static POST_REDIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[124]$").unwrap());
static USER_PWD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\n:]+:[^\n:]+$").unwrap());

/// Classification of a canonical identifier.
///
/// Never fails: `None` marks an identifier that is valid on the transfer
/// handle but has no typed validation support here. The factory turns that
/// into a loud error rather than passing values through unchecked.
pub(crate) fn rule_for(opt: TransferOpt) -> Option<OptionKind> {
    use TransferOpt::*;

    let kind = match opt {
        // Flags
        Crlf | HeaderOut | Header | ReturnTransfer | Verbose | SslVerifyPeer
        | FollowLocation | AutoReferer | UnrestrictedAuth | FileTime | ForbidReuse
        | FreshConnect | Netrc => OptionKind::Bool,

        // Counters and sizes. Zero means "no limit" for the timeouts.
        ConnectTimeout | Timeout | MaxRedirs | BufferSize => {
            OptionKind::Int { min: 0, max: None }
        }
        Port => OptionKind::Int {
            min: 0,
            max: Some(99_999),
        },

        // Free-form header contents and output targets
        UserAgent | Referer | AcceptEncoding | Stderr => OptionKind::Text,

        CookieFile | CookieJar => OptionKind::File,

        SslVersion => OptionKind::Regex {
            pattern: &SSL_VERSION,
            message: Some("is not valid SSL version"),
        },
        SslVerifyHost => OptionKind::Regex {
            pattern: &SSL_VERIFY_HOST,
            message: Some("is not valid SSL verify host value"),
        },
        PostRedir => OptionKind::Regex {
            pattern: &POST_REDIR,
            message: Some("is not valid POST redirection value"),
        },
        UserPwd => OptionKind::Regex {
            pattern: &USER_PWD,
            message: Some("is not a valid user-password pair"),
        },

        HttpAuth => OptionKind::Callback(auth_scheme),
        HttpVersion => OptionKind::Callback(http_version),
        Cookie => OptionKind::Callback(cookie_header),

        // Valid on the handle, but carries arbitrary header lists this layer
        // does not type-check.
        HttpHeader => return None,
    };

    Some(kind)
}

/// Only basic auth is implemented: an explicit `false` disables
/// authentication, anything else selects the basic-auth scheme.
fn auth_scheme(raw: Value) -> Result<Value> {
    Ok(match raw {
        Value::Bool(false) => Value::Bool(false),
        _ => Value::Int(transport::AUTH_BASIC),
    })
}

/// Accepts 1.0 and 1.1, mapped to the handle's version constants. Numeric
/// input is formatted to one decimal place first, so `1` means `1.0`.
fn http_version(raw: Value) -> Result<Value> {
    let text = raw.as_text().ok_or_else(|| {
        OptionError::new(format!(
            "expected an HTTP version, got a {} value",
            raw.type_name()
        ))
    })?;
    let formatted = match text.trim().parse::<f64>() {
        Ok(version) => format!("{version:.1}"),
        Err(_) => text.trim().to_string(),
    };

    match formatted.as_str() {
        "1.0" => Ok(Value::Int(transport::HTTP_VERSION_1_0)),
        "1.1" => Ok(Value::Int(transport::HTTP_VERSION_1_1)),
        _ => Err(OptionError::new(format!(
            "{formatted} is not a valid HTTP version"
        ))),
    }
}

/// Flattens a cookie map into URL-encoded `key=value` pairs joined by `"; "`,
/// preserving insertion order. Anything else passes through unchanged.
fn cookie_header(raw: Value) -> Result<Value> {
    Ok(match raw {
        Value::Map(pairs) => Value::Str(
            pairs
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("; "),
        ),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_alias_resolves() {
        for (alias, opt) in ALIASES.iter() {
            assert_eq!(resolve(*alias).unwrap(), *opt, "alias {alias}");
        }
    }

    #[test]
    fn test_alias_and_id_agree() {
        for (alias, opt) in ALIASES.iter() {
            assert_eq!(resolve(*alias).unwrap(), resolve(opt.raw()).unwrap());
        }
    }

    #[test]
    fn test_primary_names_resolve_to_themselves() {
        for opt in TransferOpt::ALL {
            assert_eq!(resolve(opt.name()).unwrap(), *opt);
        }
    }

    #[test]
    fn test_name_normalization() {
        assert_eq!(normalize_name(" Follow  Location "), "follow-location");
        assert_eq!(normalize_name("follow_location"), "follow-location");
        assert_eq!(normalize_name("FOLLOW _ LOCATION"), "follow-location");
        assert_eq!(resolve("ssl_verify_host").unwrap(), TransferOpt::SslVerifyHost);
        assert_eq!(resolve("Max Time").unwrap(), TransferOpt::Timeout);
    }

    #[test]
    fn test_unknown_name_is_rejected_with_input_in_message() {
        let err = resolve("no-such-option").unwrap_err();
        assert!(err.message().contains("no-such-option"), "{err}");
    }

    #[test]
    fn test_unknown_id_is_rejected_with_input_in_message() {
        let err = resolve(12345).unwrap_err();
        assert!(err.message().contains("12345"), "{err}");
    }

    #[test]
    fn test_transfer_opt_passes_through_resolution() {
        assert_eq!(resolve(TransferOpt::Port).unwrap(), TransferOpt::Port);
    }

    #[test]
    fn test_only_http_header_is_unclassified() {
        for opt in TransferOpt::ALL {
            let rule = rule_for(*opt);
            if *opt == TransferOpt::HttpHeader {
                assert!(rule.is_none());
            } else {
                assert!(rule.is_some(), "missing rule for {opt}");
            }
        }
    }

    #[test]
    fn test_auth_scheme_maps_to_basic_sentinel() {
        assert_eq!(
            auth_scheme(Value::Bool(false)).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            auth_scheme(Value::Bool(true)).unwrap(),
            Value::Int(transport::AUTH_BASIC)
        );
        assert_eq!(
            auth_scheme(Value::Str("digest".into())).unwrap(),
            Value::Int(transport::AUTH_BASIC)
        );
    }

    #[test]
    fn test_http_version_formats_to_one_decimal() {
        assert_eq!(
            http_version(Value::Int(1)).unwrap(),
            Value::Int(transport::HTTP_VERSION_1_0)
        );
        assert_eq!(
            http_version(Value::Float(1.1)).unwrap(),
            Value::Int(transport::HTTP_VERSION_1_1)
        );
        assert_eq!(
            http_version(Value::Str("1.1".into())).unwrap(),
            Value::Int(transport::HTTP_VERSION_1_1)
        );
    }

    #[test]
    fn test_http_version_rejects_others() {
        let err = http_version(Value::Str("2.0".into())).unwrap_err();
        assert_eq!(err.message(), "2.0 is not a valid HTTP version");

        let err = http_version(Value::Int(2)).unwrap_err();
        assert_eq!(err.message(), "2.0 is not a valid HTTP version");

        let err = http_version(Value::Str("fast".into())).unwrap_err();
        assert_eq!(err.message(), "fast is not a valid HTTP version");
    }

    #[test]
    fn test_cookie_map_flattens_in_insertion_order() {
        let cookies = Value::from(vec![("a", "1"), ("b", "2")]);
        assert_eq!(
            cookie_header(cookies).unwrap(),
            Value::Str("a=1; b=2".into())
        );
    }

    #[test]
    fn test_cookie_pairs_are_url_encoded() {
        let cookies = Value::from(vec![("session id", "a&b=c")]);
        assert_eq!(
            cookie_header(cookies).unwrap(),
            Value::Str("session%20id=a%26b%3Dc".into())
        );
    }

    #[test]
    fn test_cookie_string_passes_through() {
        assert_eq!(
            cookie_header(Value::Str("raw=value".into())).unwrap(),
            Value::Str("raw=value".into())
        );
    }
}
