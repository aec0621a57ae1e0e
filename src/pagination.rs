use serde::Serialize;

/// Number of page links rendered around the current page.
pub const PAGE_LINK_SPAN: usize = 5;

/// Page numbers to link, at most `span` of them, centred on `current_page`
/// and clamped to `1..=total_pages`.
fn get_pages(total_pages: usize, current_page: usize, span: usize) -> Vec<usize> {
    if total_pages == 0 || span == 0 {
        return vec![];
    }

    if total_pages <= span {
        return (1..=total_pages).collect();
    }

    let last_start = total_pages - span + 1;
    let start = current_page
        .saturating_sub(span / 2)
        .clamp(1, last_start);

    (start..start + span).collect()
}

/// Pagination metadata needed to render page-link controls.
///
/// A page past the last one is kept as requested: the listing is empty but
/// the window still links back into range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    pub span: usize,
    pub pages: Vec<usize>,
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

impl PageWindow {
    pub fn new(total: usize, page_size: usize, current_page: usize) -> Self {
        let page_size = page_size.max(1);
        let current = current_page.max(1);
        let total_pages = total.div_ceil(page_size).max(1);

        let previous = (current > 1).then(|| (current - 1).min(total_pages));
        let next = (current < total_pages).then_some(current + 1);

        Self {
            current,
            page_size,
            total,
            total_pages,
            span: PAGE_LINK_SPAN,
            pages: get_pages(total_pages, current, PAGE_LINK_SPAN),
            previous,
            next,
        }
    }
}
