use iced::widget::{button, column, text, Column};
use iced::{Element, Length};

use crate::core::models::ResultList;
use crate::presentation::app_theme;

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub title: String,
    pub href: String,
    pub snippet: String,
}

pub fn build_result_rows(results: &ResultList) -> Vec<ResultRow> {
    results
        .items()
        .iter()
        .map(|item| ResultRow {
            title: item.title.clone(),
            href: item.link.clone(),
            snippet: item.snippet.clone(),
        })
        .collect()
}

fn render_result_row<'a, Message: Clone + 'a>(
    row: ResultRow,
    on_open_link: &impl Fn(String) -> Message,
) -> Element<'a, Message> {
    let title_link = button(text(row.title).size(18))
        .padding(0)
        .style(app_theme::link_button_style)
        .on_press(on_open_link(row.href.clone()));

    column![title_link, text(row.href).size(12), text(row.snippet).size(14)]
        .spacing(4)
        .width(Length::Fill)
        .into()
}

pub fn render_result_list<'a, Message: Clone + 'a>(
    results: &ResultList,
    on_open_link: impl Fn(String) -> Message,
) -> Column<'a, Message> {
    build_result_rows(results).into_iter().fold(
        Column::new().spacing(16).width(Length::Fill),
        |list, row| list.push(render_result_row(row, &on_open_link)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ResultItem;
    use iced::advanced::Widget;

    fn create_vitest_results() -> ResultList {
        ResultList::from(vec![
            ResultItem::new("Foo", "http://foo", "Foo snippet"),
            ResultItem::new("Bar", "http://bar", "Bar snippet"),
        ])
    }

    #[test]
    fn test_build_result_rows_maps_each_item_in_order() {
        let rows = build_result_rows(&create_vitest_results());

        assert_eq!(rows.len(), 2);
        assert!(rows[0].title.contains("Foo"));
        assert_eq!(rows[1].href, "http://bar");
        assert_eq!(rows[1].snippet, "Bar snippet");
    }

    #[test]
    fn test_build_result_rows_for_empty_list_is_empty() {
        assert!(build_result_rows(&ResultList::empty()).is_empty());
    }

    #[test]
    fn test_render_result_list_has_one_child_per_result() {
        let list: Column<'_, String> = render_result_list(&create_vitest_results(), |href| href);

        assert_eq!(
            Widget::<String, iced::Theme, iced::Renderer>::children(&list).len(),
            2
        );
    }

    #[test]
    fn test_render_result_list_for_empty_list_has_no_children() {
        let list: Column<'_, String> = render_result_list(&ResultList::empty(), |href| href);

        assert_eq!(
            Widget::<String, iced::Theme, iced::Renderer>::children(&list).len(),
            0
        );
    }
}
