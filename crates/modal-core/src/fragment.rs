/// Strip a single leading `#` from a raw location hash.
#[inline]
pub fn fragment_from_hash(hash: &str) -> &str {
    hash.strip_prefix('#').unwrap_or(hash)
}

/// `""` always means "no modal"; so does the configured sentinel.
#[inline]
pub fn is_sentinel(fragment: &str, sentinel: &str) -> bool {
    fragment.is_empty() || fragment == sentinel
}
