//! Employee list view state and layout

use employee_hub_core::{EmployeeClient, EmployeeList};
use gpui::{
    div, prelude::FluentBuilder, Context, Entity, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Render, StatefulInteractiveElement, Styled, Subscription, Task, Window,
};

use crate::form_view::EmployeeFormView;
use crate::theme::HubTheme;

/// The employee table with its add and delete flows
pub struct EmployeeListView {
    pub theme: HubTheme,
    pub state: EmployeeList,
    pub client: EmployeeClient,

    // Present only while the form is shown
    pub form: Option<Entity<EmployeeFormView>>,
    pub form_subscription: Option<Subscription>,

    // Dropping the task cancels the previous dismissal timer
    pub banner_task: Option<Task<()>>,
}

impl EmployeeListView {
    pub fn new(client: EmployeeClient, theme: HubTheme) -> Self {
        Self {
            theme,
            state: EmployeeList::new(),
            client,
            form: None,
            form_subscription: None,
            banner_task: None,
        }
    }

    fn render_toolbar(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let show_form = self.state.show_form();
        let count = self.state.employees().len();

        div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .child(
                        div()
                            .text_xl()
                            .font_weight(FontWeight::SEMIBOLD)
                            .child("Team Directory"),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(theme.foreground_dim)
                            .child(match count {
                                1 => "1 employee".to_string(),
                                n => format!("{} employees", n),
                            }),
                    ),
            )
            .child(
                div()
                    .id("toggle-form-btn")
                    .cursor_pointer()
                    .px_4()
                    .py_2()
                    .rounded_lg()
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .when(show_form, |el| {
                        el.bg(theme.surface_elevated)
                            .text_color(theme.foreground)
                            .hover(|s| s.bg(theme.surface_highlight))
                    })
                    .when(!show_form, |el| {
                        el.bg(theme.accent)
                            .text_color(theme.foreground)
                            .hover(|s| s.bg(theme.accent_hover))
                    })
                    .on_click(cx.listener(|this, _event, window, cx| {
                        this.toggle_form(window, cx);
                    }))
                    .child(if show_form { "Close Form" } else { "+ Add Employee" }),
            )
    }
}

impl Render for EmployeeListView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_4()
            .child(self.render_toolbar(cx))
            .when_some(self.state.success_message(), |el, message| {
                el.child(self.render_banner(message))
            })
            .when_some(self.state.error(), |el, error| {
                el.child(self.render_error(error, cx))
            })
            .when_some(self.form.clone(), |el, form| el.child(form))
            .child(self.render_table(cx))
    }
}
