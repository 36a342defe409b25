/// Statuses followed as redirects when they carry a `Location` header.
///
/// 300 (no single target), 304 (cache revalidation) and the unused
/// 305/306 are left alone.
const REDIRECT_STATUSES: [u16; 5] = [301, 302, 303, 307, 308];

/// Whether a response with this status should be followed.
///
/// ```
/// use blog_fetch::core::is_redirect;
///
/// assert!(is_redirect(308));
/// assert!(!is_redirect(304));
/// ```
pub fn is_redirect(status: u16) -> bool {
    REDIRECT_STATUSES.contains(&status)
}
