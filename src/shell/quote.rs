//! Quoting of values interpolated into command strings.
//!
//! Branch names may legally contain `$`, `;`, `&` and parentheses, and the
//! pull request URL contains `?`. Values are quoted only when needed, so
//! `git push origin staging` stays exactly that.

use std::borrow::Cow;

use shell_escape::escape;

/// Quote a single shell word.
pub fn quote(word: &str) -> String {
    escape(Cow::Borrowed(word)).into_owned()
}
