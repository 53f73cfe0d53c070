use pagewin_core::{
    ItemRange, PageEntry, PageEvent, PageRejection, PageRequest, PageState, WindowConfig,
    WindowError, visible_slice, visible_window,
};

fn window_json(current: usize, total: usize) -> String {
    serde_json::to_string(&visible_window(current, total, 5)).unwrap()
}

#[test]
fn test_total_pages_is_ceiling() {
    for total_items in 0..=60usize {
        for page_size in 1..=12usize {
            let state = PageState::first(total_items, page_size).unwrap();
            assert_eq!(state.total_pages(), total_items.div_ceil(page_size));
            assert!(state.display_total_pages() >= 1);
        }
    }
}

#[test]
fn test_item_range_formula() {
    for total_items in 1..=45usize {
        for page_size in 1..=7usize {
            let state = PageState::first(total_items, page_size).unwrap();
            for page in 1..=state.total_pages() {
                let state = PageState::recompute(total_items, page_size, page).unwrap();
                let range = state.item_range();
                assert_eq!(range.start, (page - 1) * page_size + 1);
                assert_eq!(range.end, (page * page_size).min(total_items));
                assert!(range.start <= range.end);
            }
        }
    }
}

#[test]
fn test_item_range_with_huge_page_size() {
    let page_size = usize::MAX / 2 + 1;
    let state = PageState::recompute(usize::MAX, page_size, 2).unwrap();
    assert_eq!(state.total_pages(), 2);

    let range = state.item_range();
    assert_eq!(range.start, page_size + 1);
    assert_eq!(range.end, usize::MAX);
    assert!(range.start <= range.end);

    let view = state.view(5);
    assert_eq!(view.range, range);
    assert_eq!(view.window.to_string(), "1 2");
}

#[test]
fn test_current_page_always_in_range() {
    for total_items in 0..=30usize {
        for requested in 0..=10usize {
            let state = PageState::recompute(total_items, 4, requested).unwrap();
            assert!(state.current_page() >= 1);
            assert!(state.current_page() <= state.display_total_pages());
        }
    }
}

#[test]
fn test_recompute_is_idempotent() {
    let a = PageState::recompute(123, 7, 9).unwrap();
    let b = PageState::recompute(123, 7, 9).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.view(5), b.view(5));

    let again = a
        .apply(PageEvent::Resize {
            total_items: 123,
            page_size: 7,
        })
        .unwrap();
    assert_eq!(again, a);
}

#[test]
fn test_request_rejections_leave_state_unchanged() {
    let state = PageState::recompute(100, 10, 4).unwrap();

    assert_eq!(
        state.validate_request(0usize),
        Err(PageRejection::BeforeFirst { requested: 0 })
    );
    assert_eq!(
        state.validate_request(11usize),
        Err(PageRejection::PastLast {
            requested: 11,
            total_pages: 10
        })
    );
    assert_eq!(state.validate_request("abc"), Err(PageRejection::NotANumber));
    assert_eq!(state.validate_request(2.5), Err(PageRejection::NotANumber));
    assert_eq!(
        state.validate_request(PageEntry::Ellipsis),
        Err(PageRejection::NotANumber)
    );
    assert_eq!(
        state.validate_request(4usize),
        Err(PageRejection::Unchanged { page: 4 })
    );

    let err = state
        .apply(PageEvent::Select(PageRequest::from(0usize)))
        .unwrap_err();
    assert!(matches!(
        err,
        WindowError::Rejected(PageRejection::BeforeFirst { .. })
    ));
    assert_eq!(state.current_page(), 4);
}

#[test]
fn test_request_accepts_valid_page() {
    let state = PageState::recompute(100, 10, 4).unwrap();
    assert_eq!(state.validate_request("7"), Ok(7));

    let next = state
        .apply(PageEvent::Select(PageRequest::from(PageEntry::Page(10))))
        .unwrap();
    assert_eq!(next.current_page(), 10);
    assert_eq!(next.item_range(), ItemRange { start: 91, end: 100 });
}

#[test]
fn test_empty_collection_rejects_every_page() {
    let state = PageState::first(0, 10).unwrap();
    assert_eq!(
        state.validate_request(1usize),
        Err(PageRejection::PastLast {
            requested: 1,
            total_pages: 0
        })
    );
}

#[test]
fn test_window_scenarios() {
    assert_eq!(window_json(1, 3), "[1,2,3]");
    assert_eq!(window_json(1, 10), r#"[1,2,3,4,"...",10]"#);
    assert_eq!(window_json(5, 10), r#"[1,"...",4,5,6,"...",10]"#);
    assert_eq!(window_json(10, 10), r#"[1,"...",7,8,9,10]"#);
}

#[test]
fn test_window_pages_strictly_increase_without_redundant_gaps() {
    for total in 1..=40usize {
        for current in 1..=total {
            let window = visible_window(current, total, 5);
            let entries = window.entries();

            let pages: Vec<usize> = window.pages().collect();
            assert!(pages.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(pages.first(), Some(&1));
            assert_eq!(pages.last(), Some(&total));
            assert!(window.contains(current));

            for (i, entry) in entries.iter().enumerate() {
                if entry.is_ellipsis() {
                    let before = entries[i - 1].page().unwrap();
                    let after = entries[i + 1].page().unwrap();
                    assert!(after - before > 1, "gap between {before} and {after}");
                }
            }
        }
    }
}

#[test]
fn test_slice_scenario() {
    let items: Vec<usize> = (0..25).collect();
    let state = PageState::recompute(items.len(), 10, 3).unwrap();

    let slice = visible_slice(&items, state.current_page(), state.page_size());
    assert_eq!(slice, &[20, 21, 22, 23, 24]);
    assert_eq!(state.item_range(), ItemRange { start: 21, end: 25 });
}

#[test]
fn test_view_serialization() {
    let config = WindowConfig::default();
    let view = PageState::recompute(25, config.page_size, 2)
        .unwrap()
        .view(config.max_visible);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["current_page"], 2);
    assert_eq!(json["total_pages"], 3);
    assert_eq!(json["range"]["start"], 11);
    assert_eq!(json["range"]["end"], 20);
    assert_eq!(json["window"], serde_json::json!([1, 2, 3]));
    assert_eq!(json["has_next"], true);
}

#[test]
fn test_rejection_serialization() {
    let json = serde_json::to_value(PageRejection::PastLast {
        requested: 12,
        total_pages: 10,
    })
    .unwrap();
    assert_eq!(json["reason"], "past_last");
    assert_eq!(json["requested"], 12);
}
