//! Footer component for Employee Hub

use chrono::Datelike;
use gpui::{div, IntoElement, ParentElement, Styled};

use crate::app::App;

impl App {
    pub fn render_footer(&self) -> impl IntoElement {
        let theme = &self.theme;
        let year = chrono::Local::now().year();

        div()
            .w_full()
            .p_6()
            .border_t_1()
            .border_color(theme.border)
            .flex()
            .justify_center()
            .text_sm()
            .text_color(theme.foreground_dim)
            .child(format!("© {} Employee Management System", year))
    }
}
