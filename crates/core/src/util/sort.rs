//! Natural ordering for folder listings

use crate::core::entry::ResourceChild;
use std::cmp::Ordering;

/// Compare two names the way a file manager does: digit runs compare by
/// value, so `page2` sorts before `page10`.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    natord::compare(a, b)
}

/// Compare two children of the same folder, folders first.
///
/// # Examples
///
/// ```
/// use navorder_core::core::ResourceChild;
/// use navorder_core::util::sort::compare_children;
///
/// let mut children = vec![
///     ResourceChild::new("/page10.html", "page10.html"),
///     ResourceChild::new("/images", "images").folder(true),
///     ResourceChild::new("/page2.html", "page2.html"),
/// ];
///
/// children.sort_by(compare_children);
///
/// // images, page2.html, page10.html
/// assert_eq!(children[0].name, "images");
/// assert_eq!(children[1].name, "page2.html");
/// ```
pub fn compare_children(a: &ResourceChild, b: &ResourceChild) -> Ordering {
    b.is_folder
        .cmp(&a.is_folder)
        .then_with(|| compare_names(&a.name, &b.name))
}
