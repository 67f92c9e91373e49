use serde::Serialize;
use serde_json::Value;
use strum::{EnumIter, FromRepr, IntoEnumIterator};

use crate::{ErrorDescriptor, ErrorFactory, I18nMessage, Thrower};

/// One row of the status catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StatusEntry {
    /// Canonical SCREAMING_SNAKE name
    pub name: &'static str,
    /// Numeric status code
    pub code: u16,
    /// Default human readable text
    pub default_text: &'static str,
}

impl StatusEntry {
    /// Leading decimal digit of the code
    pub const fn class(&self) -> u16 {
        let mut code = self.code;
        while code >= 10 {
            code /= 10;
        }
        code
    }

    /// Whether this entry may produce a thrower
    ///
    /// Informational (`1xx`) and success (`2xx`) codes never describe errors.
    pub const fn is_error(&self) -> bool {
        !matches!(self.class(), 1 | 2)
    }
}

macro_rules! status_catalog {
    (
        non_error {
            $( $nvariant:ident = $ncode:literal => ($nname:literal, $ntext:literal) ),* $(,)?
        }
        error {
            $( $evariant:ident = $ecode:literal => ($ename:literal, $etext:literal, $method:ident) ),* $(,)?
        }
    ) => {
        /// HTTP statuses known to the catalog
        ///
        /// Declaration order is code order; it is also the order of the
        /// thrower table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, FromRepr)]
        #[repr(u16)]
        pub enum HttpStatus {
            $( $nvariant = $ncode, )*
            $( $evariant = $ecode, )*
        }

        impl HttpStatus {
            /// Canonical SCREAMING_SNAKE name
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$nvariant => $nname, )*
                    $( Self::$evariant => $ename, )*
                }
            }

            /// Default human readable text
            pub const fn default_text(self) -> &'static str {
                match self {
                    $( Self::$nvariant => $ntext, )*
                    $( Self::$evariant => $etext, )*
                }
            }
        }

        #[allow(clippy::unused_self)]
        impl ErrorFactory {
            $(
                #[doc = concat!("`", $ename, "` (", stringify!($ecode), " ", $etext, ")")]
                pub fn $method(
                    &self,
                    message: Option<&str>,
                    errors: Option<Value>,
                    i18n: Option<I18nMessage>,
                ) -> ErrorDescriptor {
                    Thrower::new(HttpStatus::$evariant.entry()).call(message, errors, i18n)
                }
            )*
        }

        const _: () = {
            const ALL: &[u16] = &[$( $ncode, )* $( $ecode, )*];
            const NON_ERROR: &[u16] = &[$( $ncode ),*];
            const ERROR: &[u16] = &[$( $ecode ),*];

            let mut i = 0;
            while i < ALL.len() {
                let mut j = i + 1;
                while j < ALL.len() {
                    assert!(ALL[i] != ALL[j], "duplicate status code in catalog");
                    j += 1;
                }
                i += 1;
            }

            let mut i = 0;
            while i < NON_ERROR.len() {
                assert!(NON_ERROR[i] >= 100 && NON_ERROR[i] < 300, "non-error status outside 1xx/2xx");
                i += 1;
            }

            let mut i = 0;
            while i < ERROR.len() {
                assert!(ERROR[i] >= 300 && ERROR[i] < 600, "error status outside 3xx-5xx");
                i += 1;
            }
        };
    };
}

status_catalog! {
    non_error {
        Continue = 100 => ("CONTINUE", "Continue"),
        SwitchingProtocols = 101 => ("SWITCHING_PROTOCOLS", "Switching Protocols"),
        Processing = 102 => ("PROCESSING", "Processing"),
        Ok = 200 => ("OK", "OK"),
        Created = 201 => ("CREATED", "Created"),
        Accepted = 202 => ("ACCEPTED", "Accepted"),
        NonAuthoritativeInformation = 203 => ("NON_AUTHORITATIVE_INFORMATION", "Non Authoritative Information"),
        NoContent = 204 => ("NO_CONTENT", "No Content"),
        ResetContent = 205 => ("RESET_CONTENT", "Reset Content"),
        PartialContent = 206 => ("PARTIAL_CONTENT", "Partial Content"),
        MultiStatus = 207 => ("MULTI_STATUS", "Multi-Status"),
    }
    error {
        MultipleChoices = 300 => ("MULTIPLE_CHOICES", "Multiple Choices", multiple_choices),
        MovedPermanently = 301 => ("MOVED_PERMANENTLY", "Moved Permanently", moved_permanently),
        MovedTemporarily = 302 => ("MOVED_TEMPORARILY", "Moved Temporarily", moved_temporarily),
        SeeOther = 303 => ("SEE_OTHER", "See Other", see_other),
        NotModified = 304 => ("NOT_MODIFIED", "Not Modified", not_modified),
        UseProxy = 305 => ("USE_PROXY", "Use Proxy", use_proxy),
        TemporaryRedirect = 307 => ("TEMPORARY_REDIRECT", "Temporary Redirect", temporary_redirect),
        PermanentRedirect = 308 => ("PERMANENT_REDIRECT", "Permanent Redirect", permanent_redirect),
        BadRequest = 400 => ("BAD_REQUEST", "Bad Request", bad_request),
        Unauthorized = 401 => ("UNAUTHORIZED", "Unauthorized", unauthorized),
        PaymentRequired = 402 => ("PAYMENT_REQUIRED", "Payment Required", payment_required),
        Forbidden = 403 => ("FORBIDDEN", "Forbidden", forbidden),
        NotFound = 404 => ("NOT_FOUND", "Not Found", not_found),
        MethodNotAllowed = 405 => ("METHOD_NOT_ALLOWED", "Method Not Allowed", method_not_allowed),
        NotAcceptable = 406 => ("NOT_ACCEPTABLE", "Not Acceptable", not_acceptable),
        ProxyAuthenticationRequired = 407 => (
            "PROXY_AUTHENTICATION_REQUIRED",
            "Proxy Authentication Required",
            proxy_authentication_required
        ),
        RequestTimeout = 408 => ("REQUEST_TIMEOUT", "Request Timeout", request_timeout),
        Conflict = 409 => ("CONFLICT", "Conflict", conflict),
        Gone = 410 => ("GONE", "Gone", gone),
        LengthRequired = 411 => ("LENGTH_REQUIRED", "Length Required", length_required),
        PreconditionFailed = 412 => ("PRECONDITION_FAILED", "Precondition Failed", precondition_failed),
        RequestTooLong = 413 => ("REQUEST_TOO_LONG", "Request Entity Too Large", request_too_long),
        RequestUriTooLong = 414 => ("REQUEST_URI_TOO_LONG", "Request-URI Too Long", request_uri_too_long),
        UnsupportedMediaType = 415 => ("UNSUPPORTED_MEDIA_TYPE", "Unsupported Media Type", unsupported_media_type),
        RequestedRangeNotSatisfiable = 416 => (
            "REQUESTED_RANGE_NOT_SATISFIABLE",
            "Requested Range Not Satisfiable",
            requested_range_not_satisfiable
        ),
        ExpectationFailed = 417 => ("EXPECTATION_FAILED", "Expectation Failed", expectation_failed),
        ImATeapot = 418 => ("IM_A_TEAPOT", "I'm a teapot", im_a_teapot),
        InsufficientSpaceOnResource = 419 => (
            "INSUFFICIENT_SPACE_ON_RESOURCE",
            "Insufficient Space on Resource",
            insufficient_space_on_resource
        ),
        MethodFailure = 420 => ("METHOD_FAILURE", "Method Failure", method_failure),
        MisdirectedRequest = 421 => ("MISDIRECTED_REQUEST", "Misdirected Request", misdirected_request),
        UnprocessableEntity = 422 => ("UNPROCESSABLE_ENTITY", "Unprocessable Entity", unprocessable_entity),
        Locked = 423 => ("LOCKED", "Locked", locked),
        FailedDependency = 424 => ("FAILED_DEPENDENCY", "Failed Dependency", failed_dependency),
        PreconditionRequired = 428 => ("PRECONDITION_REQUIRED", "Precondition Required", precondition_required),
        TooManyRequests = 429 => ("TOO_MANY_REQUESTS", "Too Many Requests", too_many_requests),
        RequestHeaderFieldsTooLarge = 431 => (
            "REQUEST_HEADER_FIELDS_TOO_LARGE",
            "Request Header Fields Too Large",
            request_header_fields_too_large
        ),
        UnavailableForLegalReasons = 451 => (
            "UNAVAILABLE_FOR_LEGAL_REASONS",
            "Unavailable For Legal Reasons",
            unavailable_for_legal_reasons
        ),
        InternalServerError = 500 => ("INTERNAL_SERVER_ERROR", "Internal Server Error", internal_server_error),
        NotImplemented = 501 => ("NOT_IMPLEMENTED", "Not Implemented", not_implemented),
        BadGateway = 502 => ("BAD_GATEWAY", "Bad Gateway", bad_gateway),
        ServiceUnavailable = 503 => ("SERVICE_UNAVAILABLE", "Service Unavailable", service_unavailable),
        GatewayTimeout = 504 => ("GATEWAY_TIMEOUT", "Gateway Timeout", gateway_timeout),
        HttpVersionNotSupported = 505 => (
            "HTTP_VERSION_NOT_SUPPORTED",
            "HTTP Version Not Supported",
            http_version_not_supported
        ),
        InsufficientStorage = 507 => ("INSUFFICIENT_STORAGE", "Insufficient Storage", insufficient_storage),
        NetworkAuthenticationRequired = 511 => (
            "NETWORK_AUTHENTICATION_REQUIRED",
            "Network Authentication Required",
            network_authentication_required
        ),
    }
}

impl HttpStatus {
    /// Numeric status code
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Catalog row for this status
    pub const fn entry(self) -> StatusEntry {
        StatusEntry {
            name: self.name(),
            code: self.code(),
            default_text: self.default_text(),
        }
    }

    /// Look up a status by numeric code
    pub const fn from_code(code: u16) -> Option<Self> {
        Self::from_repr(code)
    }

    /// Look up a status by canonical name (`NOT_FOUND`)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|status| status.name() == name)
    }

    /// Thrower for this status, `None` for 1xx/2xx
    pub const fn thrower(self) -> Option<Thrower> {
        let entry = self.entry();
        if entry.is_error() { Some(Thrower::new(entry)) } else { None }
    }

    /// Every catalog row in declaration order
    pub fn entries() -> impl Iterator<Item = StatusEntry> {
        Self::iter().map(Self::entry)
    }
}

impl From<HttpStatus> for http::StatusCode {
    fn from(status: HttpStatus) -> Self {
        // Every catalog code lies in 100..600
        Self::from_u16(status.code()).unwrap_or(Self::INTERNAL_SERVER_ERROR)
    }
}
