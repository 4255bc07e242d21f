//! Success banner and error message

use gpui::{
    div, Context, InteractiveElement, IntoElement, ParentElement, SharedString,
    StatefulInteractiveElement, Styled,
};

use crate::list_view::EmployeeListView;

impl EmployeeListView {
    pub fn render_banner(&self, message: &str) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .w_full()
            .px_4()
            .py_3()
            .rounded_lg()
            .bg(theme.success.opacity(0.12))
            .border_1()
            .border_color(theme.success.opacity(0.4))
            .text_sm()
            .text_color(theme.success)
            .child(SharedString::from(format!("✓ {}", message)))
    }

    pub fn render_error(&self, error: &str, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .w_full()
            .px_4()
            .py_3()
            .rounded_lg()
            .bg(theme.error.opacity(0.12))
            .border_1()
            .border_color(theme.error.opacity(0.4))
            .flex()
            .items_start()
            .justify_between()
            .gap_3()
            .child(
                div()
                    .flex_1()
                    .text_sm()
                    .text_color(theme.error)
                    .child(SharedString::from(format!("⚠️ {}", error))),
            )
            .child(
                div()
                    .id("dismiss-error-btn")
                    .cursor_pointer()
                    .px_2()
                    .text_sm()
                    .text_color(theme.foreground_dim)
                    .hover(|s| s.text_color(theme.foreground))
                    .on_click(cx.listener(|this, _event, _window, cx| {
                        this.dismiss_error(cx);
                    }))
                    .child("✕"),
            )
    }
}
