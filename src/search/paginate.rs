//! Page slicing and page-control windows.

use serde::Serialize;

/// Articles per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Pages shown on each side of the current page.
const WINDOW_RADIUS: usize = 2;

/// One pagination control, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageControl {
    Previous { target: usize, disabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { target: usize, disabled: bool },
}

/// Page count plus the controls to draw for the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page_count: usize,
    pub current_page: usize,
    /// Empty when there is at most one page.
    pub controls: Vec<PageControl>,
}

impl Pagination {
    pub fn has_controls(&self) -> bool {
        !self.controls.is_empty()
    }

    /// Page numbers present in the window, in order.
    pub fn page_numbers(&self) -> Vec<usize> {
        self.controls
            .iter()
            .filter_map(|control| match control {
                PageControl::Page { number, .. } => Some(*number),
                _ => None,
            })
            .collect()
    }
}

/// Number of pages needed for `total_items`. Zero items need zero pages.
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// Clamp a requested page into `[1, max(1, page_count)]`.
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// The items on `page` (1-based). Out-of-range pages are clamped.
pub fn page_slice<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    let page_size = page_size.max(1);
    let page = clamp_page(page, page_count(items.len(), page_size));
    let start = ((page - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Compute the page count and the control window for `current_page`.
///
/// Page 1 and the last page are always shown, along with every page within
/// two of the current one. Each run of hidden pages between them becomes a
/// single ellipsis.
pub fn paginate(total_items: usize, page_size: usize, current_page: usize) -> Pagination {
    let count = page_count(total_items, page_size);
    let current = clamp_page(current_page, count);

    if count <= 1 {
        return Pagination {
            page_count: count,
            current_page: current,
            controls: Vec::new(),
        };
    }

    let mut controls = vec![PageControl::Previous {
        target: current.saturating_sub(1).max(1),
        disabled: current == 1,
    }];

    let low = current.saturating_sub(WINDOW_RADIUS);
    let high = current + WINDOW_RADIUS;
    let mut in_gap = false;
    for number in 1..=count {
        if number == 1 || number == count || (low..=high).contains(&number) {
            controls.push(PageControl::Page {
                number,
                active: number == current,
            });
            in_gap = false;
        } else if !in_gap {
            controls.push(PageControl::Ellipsis);
            in_gap = true;
        }
    }

    controls.push(PageControl::Next {
        target: (current + 1).min(count),
        disabled: current == count,
    });

    Pagination {
        page_count: count,
        current_page: current,
        controls,
    }
}
