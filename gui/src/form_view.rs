//! New-employee form view
//!
//! Emits [`FormEvent`]s and never talks to the network; whoever subscribes
//! decides what a proposed employee means.

use employee_hub_core::form::Field;
use employee_hub_core::{Department, EmployeeForm, FormEvent};
use gpui::{
    div, prelude::FluentBuilder, px, AppContext as _, Context, Entity, EventEmitter, FontWeight,
    InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Subscription, Window,
};
use gpui_component::input::{Input, InputEvent, InputState as GpuiInputState};

use crate::theme::HubTheme;

pub struct EmployeeFormView {
    theme: HubTheme,
    form: EmployeeForm,
    name_input: Entity<GpuiInputState>,
    email_input: Entity<GpuiInputState>,
    salary_input: Entity<GpuiInputState>,
    _subscriptions: Vec<Subscription>,
}

impl EventEmitter<FormEvent> for EmployeeFormView {}

impl EmployeeFormView {
    pub fn new(theme: HubTheme, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let name_input = cx.new(|cx| GpuiInputState::new(window, cx).placeholder("Jane Doe"));
        let email_input =
            cx.new(|cx| GpuiInputState::new(window, cx).placeholder("jane.doe@company.com"));
        let salary_input = cx.new(|cx| GpuiInputState::new(window, cx).placeholder("75000"));

        let _subscriptions = vec![
            Self::watch_input(&name_input, Field::Name, window, cx),
            Self::watch_input(&email_input, Field::Email, window, cx),
            Self::watch_input(&salary_input, Field::Salary, window, cx),
        ];

        name_input.update(cx, |state, cx| state.focus(window, cx));

        Self {
            theme,
            form: EmployeeForm::new(),
            name_input,
            email_input,
            salary_input,
            _subscriptions,
        }
    }

    /// Keep the form state in step with an input: values on change,
    /// touched on blur, submit on enter.
    fn watch_input(
        input: &Entity<GpuiInputState>,
        field: Field,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Subscription {
        cx.subscribe_in(
            input,
            window,
            move |this, input: &Entity<GpuiInputState>, event: &InputEvent, _window, cx| {
                match event {
                    InputEvent::Change { .. } => {
                        let value = input.read(cx).value().to_string();
                        this.form.set(field, value);
                        cx.notify();
                    }
                    InputEvent::Blur { .. } => {
                        this.form.touch(field);
                        cx.notify();
                    }
                    InputEvent::PressEnter { .. } => this.submit(cx),
                    _ => {}
                }
            },
        )
    }

    fn sync_inputs(&mut self, cx: &Context<Self>) {
        for (field, input) in [
            (Field::Name, &self.name_input),
            (Field::Email, &self.email_input),
            (Field::Salary, &self.salary_input),
        ] {
            let value = input.read(cx).value().to_string();
            if value != self.form.value(field) {
                self.form.set(field, value);
            }
        }
    }

    pub fn select_department(&mut self, department: Department, cx: &mut Context<Self>) {
        self.form.set_department(department);
        self.form.touch(Field::Department);
        cx.notify();
    }

    pub fn submit(&mut self, cx: &mut Context<Self>) {
        self.sync_inputs(cx);
        match self.form.submit() {
            Some(event) => cx.emit(event),
            None => tracing::debug!("form submission blocked by validation"),
        }
        cx.notify();
    }

    pub fn cancel(&mut self, cx: &mut Context<Self>) {
        cx.emit(self.form.cancel());
    }

    fn render_field(&self, field: Field, control: impl IntoElement) -> impl IntoElement {
        let theme = &self.theme;
        let error = self.form.visible_error(field);

        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_xs()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(theme.foreground_dim)
                    .child(field.label()),
            )
            .child(
                div()
                    .rounded(px(8.))
                    .border_1()
                    .border_color(if error.is_some() {
                        theme.error
                    } else {
                        theme.border
                    })
                    .bg(theme.surface_elevated)
                    .child(control),
            )
            .when_some(error, |el, message| {
                el.child(
                    div()
                        .text_xs()
                        .text_color(theme.error)
                        .child(SharedString::from(message)),
                )
            })
    }

    fn render_department_picker(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;
        let selected = self.form.department();

        div()
            .flex()
            .flex_wrap()
            .gap_2()
            .p_2()
            .children(Department::ALL.into_iter().map(|department| {
                let is_selected = selected == Some(department);
                let color = theme.department(department.as_str());

                div()
                    .id(SharedString::from(format!("dept-{}", department.as_str())))
                    .cursor_pointer()
                    .px_3()
                    .py_1()
                    .rounded_full()
                    .text_xs()
                    .border_1()
                    .border_color(color.opacity(if is_selected { 1.0 } else { 0.3 }))
                    .text_color(if is_selected {
                        theme.foreground
                    } else {
                        theme.foreground_dim
                    })
                    .when(is_selected, |el| el.bg(color.opacity(0.35)))
                    .hover(|s| s.bg(color.opacity(0.2)))
                    .on_click(cx.listener(move |this, _event, _window, cx| {
                        this.select_department(department, cx);
                    }))
                    .child(department.as_str())
            }))
    }

    fn render_actions(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .flex()
            .justify_end()
            .gap_2()
            .child(
                div()
                    .id("form-cancel-btn")
                    .cursor_pointer()
                    .px_4()
                    .py_2()
                    .rounded_lg()
                    .text_sm()
                    .text_color(theme.foreground_dim)
                    .bg(theme.surface_elevated)
                    .hover(|s| s.bg(theme.surface_highlight))
                    .on_click(cx.listener(|this, _event, _window, cx| {
                        this.cancel(cx);
                    }))
                    .child("Cancel"),
            )
            .child(
                div()
                    .id("form-submit-btn")
                    .cursor_pointer()
                    .px_4()
                    .py_2()
                    .rounded_lg()
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(theme.foreground)
                    .bg(theme.accent)
                    .hover(|s| s.bg(theme.accent_hover))
                    .on_click(cx.listener(|this, _event, _window, cx| {
                        this.submit(cx);
                    }))
                    .child("Add Employee"),
            )
    }
}

impl Render for EmployeeFormView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = &self.theme;

        div()
            .w_full()
            .p_6()
            .rounded_lg()
            .bg(theme.surface)
            .border_1()
            .border_color(theme.border)
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .text_lg()
                    .font_weight(FontWeight::SEMIBOLD)
                    .child("New Employee"),
            )
            .child(
                div()
                    .flex()
                    .gap_4()
                    .child(div().flex_1().child(self.render_field(
                        Field::Name,
                        Input::new(&self.name_input).appearance(false),
                    )))
                    .child(div().flex_1().child(self.render_field(
                        Field::Email,
                        Input::new(&self.email_input).appearance(false),
                    ))),
            )
            .child(self.render_field(Field::Department, self.render_department_picker(cx)))
            .child(div().w(px(240.)).child(self.render_field(
                Field::Salary,
                Input::new(&self.salary_input).appearance(false),
            )))
            .child(self.render_actions(cx))
    }
}
