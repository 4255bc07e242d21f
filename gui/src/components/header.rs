//! Header component for Employee Hub

use gpui::{div, px, FontWeight, IntoElement, ParentElement, Styled};

use crate::app::App;

impl App {
    pub fn render_header(&self) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .w_full()
            .px_8()
            .pt_8()
            .pb_6()
            .flex()
            .items_center()
            .justify_between()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .w(px(56.))
                            .h(px(56.))
                            .rounded(px(16.))
                            .bg(theme.accent)
                            .flex()
                            .items_center()
                            .justify_center()
                            .text_xl()
                            .text_color(theme.foreground)
                            .child("✓"),
                    )
                    .child(
                        div()
                            .child(
                                div()
                                    .text_2xl()
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(theme.foreground)
                                    .child("Employee Hub"),
                            )
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(FontWeight::MEDIUM)
                                    .text_color(theme.foreground_dim)
                                    .child("Streamlined Workforce Management"),
                            ),
                    ),
            )
            .child(
                div()
                    .w(px(120.))
                    .h(px(120.))
                    .rounded_full()
                    .bg(theme.accent.opacity(0.12)),
            )
    }
}
