//! Canonical option identifiers of the underlying transfer library
//!
//! The discriminants mirror the transport library's public option numbering,
//! so a validated `(id, value)` pair can be applied to a live handle without
//! further translation.

use std::fmt;

/// HTTP protocol version constants understood by the transfer handle.
pub const HTTP_VERSION_1_0: i64 = 1;
pub const HTTP_VERSION_1_1: i64 = 2;

/// Basic-auth bitmask value. The only authentication scheme supported.
pub const AUTH_BASIC: i64 = 1;

/// A configurable behavior of the transfer handle, by canonical numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum TransferOpt {
    HeaderOut = 2,
    Port = 3,
    Timeout = 13,
    Crlf = 27,
    SslVersion = 32,
    Verbose = 41,
    Header = 42,
    Netrc = 51,
    FollowLocation = 52,
    AutoReferer = 58,
    SslVerifyPeer = 64,
    MaxRedirs = 68,
    FileTime = 69,
    FreshConnect = 74,
    ForbidReuse = 75,
    ConnectTimeout = 78,
    SslVerifyHost = 81,
    HttpVersion = 84,
    BufferSize = 98,
    UnrestrictedAuth = 105,
    HttpAuth = 107,
    PostRedir = 161,
    UserPwd = 10005,
    Referer = 10016,
    UserAgent = 10018,
    Cookie = 10022,
    HttpHeader = 10023,
    CookieFile = 10031,
    Stderr = 10037,
    CookieJar = 10082,
    AcceptEncoding = 10102,
    ReturnTransfer = 19913,
}

impl TransferOpt {
    /// Every valid canonical identifier.
    pub const ALL: &'static [TransferOpt] = &[
        TransferOpt::HeaderOut,
        TransferOpt::Port,
        TransferOpt::Timeout,
        TransferOpt::Crlf,
        TransferOpt::SslVersion,
        TransferOpt::Verbose,
        TransferOpt::Header,
        TransferOpt::Netrc,
        TransferOpt::FollowLocation,
        TransferOpt::AutoReferer,
        TransferOpt::SslVerifyPeer,
        TransferOpt::MaxRedirs,
        TransferOpt::FileTime,
        TransferOpt::FreshConnect,
        TransferOpt::ForbidReuse,
        TransferOpt::ConnectTimeout,
        TransferOpt::SslVerifyHost,
        TransferOpt::HttpVersion,
        TransferOpt::BufferSize,
        TransferOpt::UnrestrictedAuth,
        TransferOpt::HttpAuth,
        TransferOpt::PostRedir,
        TransferOpt::UserPwd,
        TransferOpt::Referer,
        TransferOpt::UserAgent,
        TransferOpt::Cookie,
        TransferOpt::HttpHeader,
        TransferOpt::CookieFile,
        TransferOpt::Stderr,
        TransferOpt::CookieJar,
        TransferOpt::AcceptEncoding,
        TransferOpt::ReturnTransfer,
    ];

    /// Look up an identifier by its numeric value.
    pub fn from_raw(raw: i64) -> Option<TransferOpt> {
        TransferOpt::ALL.iter().copied().find(|opt| opt.raw() == raw)
    }

    /// The numeric value applied to the transfer handle.
    pub fn raw(self) -> i64 {
        self as i64
    }

    /// Primary textual name. Resolves back to the same identifier.
    pub fn name(self) -> &'static str {
        match self {
            TransferOpt::HeaderOut => "header-out",
            TransferOpt::Port => "port",
            TransferOpt::Timeout => "timeout",
            TransferOpt::Crlf => "crlf",
            TransferOpt::SslVersion => "ssl-version",
            TransferOpt::Verbose => "verbose",
            TransferOpt::Header => "header",
            TransferOpt::Netrc => "netrc",
            TransferOpt::FollowLocation => "follow-location",
            TransferOpt::AutoReferer => "auto-referer",
            TransferOpt::SslVerifyPeer => "ssl-verify-peer",
            TransferOpt::MaxRedirs => "max-redirs",
            TransferOpt::FileTime => "file-time",
            TransferOpt::FreshConnect => "fresh-connect",
            TransferOpt::ForbidReuse => "forbid-reuse",
            TransferOpt::ConnectTimeout => "connect-timeout",
            TransferOpt::SslVerifyHost => "ssl-verify-host",
            TransferOpt::HttpVersion => "http-version",
            TransferOpt::BufferSize => "buffer-size",
            TransferOpt::UnrestrictedAuth => "unrestricted-auth",
            TransferOpt::HttpAuth => "http-auth",
            TransferOpt::PostRedir => "post-redir",
            TransferOpt::UserPwd => "user-password",
            TransferOpt::Referer => "referer",
            TransferOpt::UserAgent => "user-agent",
            TransferOpt::Cookie => "cookie",
            TransferOpt::HttpHeader => "http-header",
            TransferOpt::CookieFile => "cookie-file",
            TransferOpt::Stderr => "stderr",
            TransferOpt::CookieJar => "cookie-jar",
            TransferOpt::AcceptEncoding => "encoding",
            TransferOpt::ReturnTransfer => "return-transfer",
        }
    }
}

impl fmt::Display for TransferOpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
