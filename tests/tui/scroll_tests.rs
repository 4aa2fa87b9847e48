//! Follow-the-bottom scrolling tests

use docai_cli::tui::chat::ScrollFollow;

#[test]
fn starts_following() {
    let mut scroll = ScrollFollow::new();

    assert!(scroll.is_following());
    assert_eq!(scroll.resolve(12, 5), 12);
}

#[test]
fn snaps_to_bottom_when_revision_moves() {
    let mut scroll = ScrollFollow::new();
    scroll.on_update(0);
    scroll.resolve(20, 5);
    scroll.scroll_to_top();
    assert_eq!(scroll.resolve(20, 5), 0);

    assert!(scroll.on_update(1));
    assert!(scroll.is_following());
    assert_eq!(scroll.resolve(24, 5), 24);
}

#[test]
fn unchanged_revision_keeps_position() {
    let mut scroll = ScrollFollow::new();
    assert!(scroll.on_update(3));
    scroll.resolve(20, 5);
    scroll.scroll_up();

    assert!(!scroll.on_update(3));
    assert_eq!(scroll.resolve(20, 5), 19);
    assert!(!scroll.is_following());
}

#[test]
fn growth_keeps_following_at_bottom() {
    let mut scroll = ScrollFollow::new();
    scroll.on_update(1);

    assert_eq!(scroll.resolve(4, 5), 4);
    assert_eq!(scroll.resolve(9, 5), 9);
}

#[test]
fn paging_moves_by_visible_height() {
    let mut scroll = ScrollFollow::new();
    scroll.resolve(30, 10);

    scroll.page_up();
    assert_eq!(scroll.offset(), 20);
    scroll.page_up();
    scroll.page_up();
    scroll.page_up();
    assert_eq!(scroll.offset(), 0);

    scroll.page_down();
    assert_eq!(scroll.offset(), 10);
    assert!(!scroll.is_following());
}

#[test]
fn scrolling_back_down_resumes_following() {
    let mut scroll = ScrollFollow::new();
    scroll.resolve(3, 5);
    scroll.scroll_up();
    assert!(!scroll.is_following());

    scroll.scroll_down();

    assert!(scroll.is_following());
    assert_eq!(scroll.resolve(8, 5), 8);
}

#[test]
fn offset_is_clamped_when_content_shrinks() {
    let mut scroll = ScrollFollow::new();
    scroll.resolve(30, 10);
    scroll.scroll_up();

    assert_eq!(scroll.resolve(6, 10), 6);
}
