//! Root shell for Employee Hub: branding around the employee list

use employee_hub_core::EmployeeClient;
use gpui::{
    div, AppContext as _, Context, Entity, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};

use crate::list_view::EmployeeListView;
use crate::theme::HubTheme;

/// Main application window
pub struct App {
    pub theme: HubTheme,
    pub list: Entity<EmployeeListView>,
}

impl App {
    pub fn new(client: EmployeeClient, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        let theme = HubTheme::new();
        let list_theme = theme.clone();
        let list = cx.new(|_cx| EmployeeListView::new(client, list_theme));

        Self { theme, list }
    }

    /// Fetch the initial employee list
    pub fn initialize(&mut self, cx: &mut Context<Self>) {
        self.list.update(cx, |list, cx| list.load_employees(cx));
    }
}

impl Render for App {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .size_full()
            .bg(theme.background)
            .text_color(theme.foreground)
            .flex()
            .flex_col()
            .child(self.render_header())
            .child(
                div()
                    .id("main-content")
                    .flex_1()
                    .overflow_y_scroll()
                    .px_8()
                    .pb_8()
                    .child(self.list.clone()),
            )
            .child(self.render_footer())
    }
}
