//! Employee table component

use employee_hub_core::display::format_salary;
use employee_hub_core::Employee;
use gpui::{
    div, prelude::FluentBuilder, px, Context, FontWeight, InteractiveElement, IntoElement,
    ParentElement, SharedString, StatefulInteractiveElement, Styled,
};

use crate::list_view::EmployeeListView;

const COLUMNS: [(&str, f32); 5] = [
    ("Name", 220.),
    ("Email", 280.),
    ("Department", 160.),
    ("Salary", 140.),
    ("", 100.),
];

impl EmployeeListView {
    pub fn render_table(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let employees = self.state.employees();

        let body = if self.state.is_loading() {
            self.render_placeholder("Loading employees...")
                .into_any_element()
        } else if employees.is_empty() {
            self.render_placeholder("No employees yet. Add the first one to get started.")
                .into_any_element()
        } else {
            div()
                .flex()
                .flex_col()
                .children(employees.iter().map(|e| self.render_row(e, cx)))
                .into_any_element()
        };

        div()
            .w_full()
            .rounded_lg()
            .bg(theme.surface)
            .border_1()
            .border_color(theme.border)
            .overflow_hidden()
            .child(
                div()
                    .flex()
                    .px_4()
                    .py_3()
                    .bg(theme.surface_elevated)
                    .text_xs()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.foreground_dim)
                    .children(
                        COLUMNS
                            .iter()
                            .map(|(title, width)| div().w(px(*width)).child(*title)),
                    ),
            )
            .child(body)
    }

    fn render_placeholder(&self, text: &'static str) -> impl IntoElement {
        div()
            .w_full()
            .py_8()
            .flex()
            .justify_center()
            .text_sm()
            .text_color(self.theme.foreground_muted)
            .child(text)
    }

    fn render_row(&self, employee: &Employee, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let dept_color = theme.department(&employee.department);
        let row_id = employee.id.unwrap_or_default();
        let target = employee.clone();

        div()
            .id(SharedString::from(format!("employee-{}", row_id)))
            .flex()
            .items_center()
            .px_4()
            .py_3()
            .border_t_1()
            .border_color(theme.border)
            .text_sm()
            .hover(|s| s.bg(theme.surface_highlight))
            .child(
                div()
                    .w(px(COLUMNS[0].1))
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(theme.foreground)
                    .child(SharedString::from(employee.name.clone())),
            )
            .child(
                div()
                    .w(px(COLUMNS[1].1))
                    .text_color(theme.foreground_dim)
                    .child(SharedString::from(employee.email.clone())),
            )
            .child(
                div().w(px(COLUMNS[2].1)).child(
                    div()
                        .px_2()
                        .py_0p5()
                        .rounded_full()
                        .bg(dept_color.opacity(0.15))
                        .text_xs()
                        .text_color(dept_color)
                        .child(SharedString::from(employee.department.clone())),
                ),
            )
            .child(
                div()
                    .w(px(COLUMNS[3].1))
                    .text_color(theme.foreground)
                    .child(format_salary(employee.salary)),
            )
            .child(
                div().w(px(COLUMNS[4].1)).flex().justify_end().when(
                    employee.id.is_some(),
                    |el| {
                        el.child(
                            div()
                                .id(SharedString::from(format!("delete-{}", row_id)))
                                .cursor_pointer()
                                .px_3()
                                .py_1()
                                .rounded(px(6.))
                                .text_xs()
                                .text_color(theme.error)
                                .hover(|s| s.bg(theme.error.opacity(0.15)))
                                .on_click(cx.listener(move |this, _event, window, cx| {
                                    this.request_delete(target.clone(), window, cx);
                                }))
                                .child("Delete"),
                        )
                    },
                ),
            )
    }
}
