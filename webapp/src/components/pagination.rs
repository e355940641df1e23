use dioxus::prelude::*;

// numbered page strip: arrows, a window around the current page, one page
// of margin at each end, gaps elided with an ellipsis

const PAGE_RANGE: u32 = 5;
const PAGE_MARGIN: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Number(u32),
    Gap,
}

pub fn page_items(page: u32, total_pages: u32) -> Vec<PageItem> {
    let half = PAGE_RANGE / 2;
    let low = page.saturating_sub(half).max(1);
    let high = (page + half).min(total_pages);

    let mut pages = Vec::new();
    for n in 1..=total_pages {
        let in_margin = n <= PAGE_MARGIN || n > total_pages - PAGE_MARGIN;
        let in_window = n >= low && n <= high;

        if in_margin || in_window {
            pages.push(n);
        }
    }

    let mut items = Vec::new();
    let mut prev = 0;
    for n in pages {
        if prev != 0 && n > prev + 1 {
            items.push(PageItem::Gap);
        }
        items.push(PageItem::Number(n));
        prev = n;
    }

    items
}

#[derive(Clone, PartialEq, Props)]
pub struct PaginationProps {
    pub page: u32,
    pub total_pages: u32,
    pub on_change: EventHandler<u32>,
}

#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    let page = props.page;
    let total_pages = props.total_pages;
    let on_change = props.on_change;

    rsx! {
        nav { class: "pagination",
            button {
                class: "page-btn",
                disabled: page <= 1,
                onclick: move |_| on_change.call(page - 1),
                "←"
            }

            for item in page_items(page, total_pages) {
                match item {
                    PageItem::Number(n) => rsx! {
                        button {
                            class: if n == page { "page-btn active" } else { "page-btn" },
                            onclick: move |_| on_change.call(n),
                            "{n}"
                        }
                    },
                    PageItem::Gap => rsx! {
                        span { class: "page-gap", "…" }
                    },
                }
            }

            button {
                class: "page-btn",
                disabled: page >= total_pages,
                onclick: move |_| on_change.call(page + 1),
                "→"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Gap, Number};

    #[test]
    fn short_runs_have_no_gaps() {
        assert_eq!(page_items(1, 1), vec![Number(1)]);
        assert_eq!(page_items(2, 3), vec![Number(1), Number(2), Number(3)]);
    }

    #[test]
    fn window_sits_around_current_page() {
        assert_eq!(
            page_items(5, 10),
            vec![
                Number(1),
                Gap,
                Number(3),
                Number(4),
                Number(5),
                Number(6),
                Number(7),
                Gap,
                Number(10)
            ]
        );
    }

    #[test]
    fn edges_keep_margin_pages() {
        assert_eq!(
            page_items(1, 10),
            vec![Number(1), Number(2), Number(3), Gap, Number(10)]
        );
        assert_eq!(
            page_items(10, 10),
            vec![Number(1), Gap, Number(8), Number(9), Number(10)]
        );
    }

    #[test]
    fn no_pages_renders_nothing() {
        assert!(page_items(1, 0).is_empty());
    }
}
