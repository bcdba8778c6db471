use crate::dom::Widget;

/// Id referenced by a same-page link such as `#episodes`.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll to `target` and move focus there so assistive tech announces it.
///
/// Returns true when the link's default jump must be suppressed, which is
/// only the case when the target exists.
pub fn follow_anchor<W: Widget>(target: Option<&W>) -> bool {
    let Some(target) = target else {
        return false;
    };
    target.scroll_into_view_smooth();
    // Non-interactive targets only accept focus with a tabindex
    target.set_attr("tabindex", "-1");
    target.take_focus(true);
    true
}

/// Click on a same-page link with the given `href`. `lookup` resolves an
/// element id in the document. Returns true when the default jump must be
/// suppressed.
pub fn follow_link<W, F>(href: Option<&str>, lookup: F) -> bool
where
    W: Widget,
    F: FnOnce(&str) -> Option<W>,
{
    let target = href.and_then(fragment_target).and_then(lookup);
    follow_anchor(target.as_ref())
}
