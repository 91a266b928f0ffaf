use contracts::shared::list_query::{Page, PageRequest};

/// Вырезает страницу из отфильтрованного списка
///
/// `total_count` это длина всего списка, а не страницы. Страница за пределами
/// списка возвращается пустой, без ошибки.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total_count = items.len();
    let page_size = request.page_size();
    let total_pages = total_count.div_ceil(page_size);

    let start = request.offset().min(total_count);
    let end = start.saturating_add(page_size).min(total_count);

    let page_items = items.into_iter().skip(start).take(end - start).collect();

    Page {
        items: page_items,
        total_count,
        page: request.page(),
        page_size,
        total_pages,
    }
}
