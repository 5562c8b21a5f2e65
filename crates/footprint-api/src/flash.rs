//! # Flash Messages
//!
//! Single-use message handoff between a failed form submission and the next
//! rendered form page, in the style of server-side flash messaging: the
//! failing handler queues a message, redirects to the form, and the form
//! view displays it once and clears it.
//!
//! The cookie carries a short code from a closed set rather than free text,
//! so nothing user-controlled is ever echoed into a page and no cookie
//! escaping is needed. Unknown codes are ignored and cleared.

use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::error::{GENERIC_ERROR_MESSAGE, INVALID_AMOUNT_MESSAGE};

/// Name of the flash cookie.
pub const FLASH_COOKIE: &str = "footprint_flash";

/// The closed set of messages a page can flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    /// The submitted amount was not numeric.
    InvalidAmount,
    /// Something unexpected failed; the cause is in the log.
    InternalError,
}

impl Flash {
    /// Stable code stored in the cookie.
    pub fn code(self) -> &'static str {
        match self {
            Self::InvalidAmount => "invalid-amount",
            Self::InternalError => "internal-error",
        }
    }

    /// Resolve a cookie code back to its flash kind.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "invalid-amount" => Some(Self::InvalidAmount),
            "internal-error" => Some(Self::InternalError),
            _ => None,
        }
    }

    /// The user-facing message this flash renders as.
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidAmount => INVALID_AMOUNT_MESSAGE,
            Self::InternalError => GENERIC_ERROR_MESSAGE,
        }
    }

    /// The cookie that queues this flash for the next page load.
    pub fn cookie(self) -> Cookie<'static> {
        Cookie::build((FLASH_COOKIE, self.code()))
            .path("/")
            .http_only(true)
            .build()
    }
}

/// Take the queued flash out of the jar, if any.
///
/// Returns the jar with the cookie removed (single-use semantics) and the
/// decoded flash. Unrecognized codes are dropped silently.
pub fn take(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let flash = jar.get(FLASH_COOKIE).and_then(|c| Flash::from_code(c.value()));
    let jar = if jar.get(FLASH_COOKIE).is_some() {
        jar.remove(Cookie::build(FLASH_COOKIE).path("/").build())
    } else {
        jar
    };
    (jar, flash)
}
