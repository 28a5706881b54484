//! Prev/Next pagination controls

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PaginationProps {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
    pub on_change: EventHandler<u32>,
}

/// Prev/Next pager. An empty listing still reads "Page 1 / 1".
#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    let page = props.page;
    let on_change = props.on_change;
    let total_pages = total_pages(props.total, props.page_size);

    rsx! {
        div { class: "pagination",
            button {
                class: "button small",
                disabled: page <= 1,
                onclick: move |_| on_change.call(page.saturating_sub(1).max(1)),
                "Prev"
            }
            div { "Page {page} / {total_pages}" }
            button {
                class: "button small",
                disabled: page >= total_pages,
                onclick: move |_| on_change.call((page + 1).min(total_pages)),
                "Next"
            }
        }
    }
}

/// Pages needed for `total` items, never less than one.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size as u64).clamp(1, u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_listing_still_has_one_page() {
        assert_eq!(total_pages(0, 5), 1);
    }

    #[test]
    fn partial_last_page_rounds_up() {
        assert_eq!(total_pages(11, 5), 3);
    }

    #[test]
    fn exact_multiple_needs_no_extra_page() {
        assert_eq!(total_pages(10, 5), 2);
    }

    #[test]
    fn zero_page_size_does_not_divide() {
        assert_eq!(total_pages(10, 0), 1);
    }
}
