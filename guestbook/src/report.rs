use guestbook_types::CommentView;

/// Render one report line.
///
/// The shape is fixed: `N) User 'USERNAME' said 'COMMENT' at 'TIMESTAMP'`,
/// with the timestamp in RFC 3339 exactly as stored.
pub fn format_line(view: &CommentView) -> String {
    format!(
        "{}) User '{}' said '{}' at '{}'",
        view.id,
        view.username,
        view.comment,
        view.date.to_rfc3339()
    )
}

/// Print one line per comment to stdout.
pub fn print_report(views: &[CommentView]) {
    for view in views {
        println!("{}", format_line(view));
    }
}
