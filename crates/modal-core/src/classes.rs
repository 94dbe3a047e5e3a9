//! Marker-class helpers over the host's class attribute.
//!
//! Membership is decided per whitespace-separated token, so `active` is not
//! considered present on an element that only carries `is-active`.

use crate::host::DocumentHost;
use smallvec::SmallVec;

type Tokens<'a> = SmallVec<[&'a str; 8]>;

#[inline]
fn tokens(class_name: &str) -> Tokens<'_> {
    class_name.split_whitespace().collect()
}

#[inline]
pub fn contains_token(class_name: &str, name: &str) -> bool {
    !name.is_empty() && class_name.split_whitespace().any(|t| t == name)
}

/// Returns the class string with `name` appended, or `None` if already present.
pub fn with_token(class_name: &str, name: &str) -> Option<String> {
    if name.is_empty() || contains_token(class_name, name) {
        return None;
    }
    Some(format!("{class_name} {name}"))
}

/// Returns the class string without any `name` token, or `None` if absent.
pub fn without_token(class_name: &str, name: &str) -> Option<String> {
    if !contains_token(class_name, name) {
        return None;
    }
    let kept: Tokens<'_> = tokens(class_name)
        .into_iter()
        .filter(|t| *t != name)
        .collect();
    Some(kept.join(" "))
}

pub fn has_class<H: DocumentHost>(host: &H, element: &H::Element, name: &str) -> bool {
    contains_token(&host.class_name(element), name)
}

pub fn add_class<H: DocumentHost>(host: &H, element: Option<&H::Element>, name: &str) {
    let Some(element) = element else {
        return;
    };
    if let Some(next) = with_token(&host.class_name(element), name) {
        host.set_class_name(element, &next);
    }
}

pub fn remove_class<H: DocumentHost>(host: &H, element: Option<&H::Element>, name: &str) {
    let Some(element) = element else {
        return;
    };
    if let Some(next) = without_token(&host.class_name(element), name) {
        host.set_class_name(element, &next);
    }
}
