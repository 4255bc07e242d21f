//! Add, delete and load flows for the employee list view
//!
//! Every request runs on the background executor; its result comes back
//! through the weak view handle, so a closed view simply drops it.

use employee_hub_core::list::BANNER_TIMEOUT;
use employee_hub_core::{BannerTicket, Employee, EmployeeApi, FormEvent, NewEmployee, ServiceError};
use gpui::{AppContext as _, Context, Entity, PromptLevel, Window};

use crate::form_view::EmployeeFormView;
use crate::list_view::EmployeeListView;

impl EmployeeListView {
    pub fn load_employees(&mut self, cx: &mut Context<Self>) {
        self.state.begin_load();
        cx.notify();

        let client = self.client.clone();
        cx.spawn(async move |this, cx| {
            let result = cx.background_spawn(async move { client.list() }).await;

            let _ = this.update(cx, |view, cx| {
                view.state.finish_load(result);
                cx.notify();
            });
        })
        .detach();
    }

    pub fn toggle_form(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.state.toggle_form();
        if self.state.show_form() {
            self.open_form(window, cx);
        } else {
            self.close_form();
        }
        cx.notify();
    }

    fn open_form(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let theme = self.theme.clone();
        let form = cx.new(|cx| EmployeeFormView::new(theme, window, cx));
        self.form_subscription = Some(cx.subscribe(&form, Self::on_form_event));
        self.form = Some(form);
    }

    fn close_form(&mut self) {
        self.form = None;
        self.form_subscription = None;
    }

    fn on_form_event(
        &mut self,
        _form: Entity<EmployeeFormView>,
        event: &FormEvent,
        cx: &mut Context<Self>,
    ) {
        self.handle_form_event(event, cx);
    }

    pub fn handle_form_event(&mut self, event: &FormEvent, cx: &mut Context<Self>) {
        match event {
            FormEvent::Proposed(candidate) => self.add_employee(candidate.clone(), cx),
            FormEvent::Cancelled => {
                if self.state.show_form() {
                    self.state.toggle_form();
                }
                self.close_form();
                cx.notify();
            }
        }
    }

    pub fn add_employee(&mut self, candidate: NewEmployee, cx: &mut Context<Self>) {
        tracing::info!(name = %candidate.name, "adding employee");
        let client = self.client.clone();

        cx.spawn(async move |this, cx| {
            let result = cx
                .background_spawn(async move { client.create(&candidate) })
                .await;

            let _ = this.update(cx, |view, cx| view.apply_add_result(result, cx));
        })
        .detach();
    }

    pub fn apply_add_result(
        &mut self,
        result: Result<Employee, ServiceError>,
        cx: &mut Context<Self>,
    ) {
        if let Some(ticket) = self.state.finish_add(result) {
            self.schedule_banner_dismissal(ticket, cx);
        }
        if !self.state.show_form() {
            self.close_form();
        }
        cx.notify();
    }

    /// Ask for confirmation before deleting. Unsaved records are ignored.
    pub fn request_delete(
        &mut self,
        employee: Employee,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let Some(prompt) = self.state.delete_prompt(&employee) else {
            return;
        };
        let answer = window.prompt(
            PromptLevel::Warning,
            &prompt,
            None,
            &["Delete", "Cancel"],
            cx,
        );

        cx.spawn(async move |this, cx| {
            if matches!(answer.await, Ok(0)) {
                let _ = this.update(cx, |view, cx| view.delete_employee(employee, cx));
            }
        })
        .detach();
    }

    fn delete_employee(&mut self, employee: Employee, cx: &mut Context<Self>) {
        let Some(id) = employee.id else {
            return;
        };
        tracing::info!(id, name = %employee.name, "deleting employee");

        let client = self.client.clone();
        cx.spawn(async move |this, cx| {
            let result = cx.background_spawn(async move { client.delete(id) }).await;

            let _ = this.update(cx, |view, cx| view.apply_delete_result(&employee, result, cx));
        })
        .detach();
    }

    pub fn apply_delete_result(
        &mut self,
        employee: &Employee,
        result: Result<(), ServiceError>,
        cx: &mut Context<Self>,
    ) {
        if let Some(ticket) = self.state.finish_delete(employee, result) {
            self.schedule_banner_dismissal(ticket, cx);
        }
        cx.notify();
    }

    pub fn dismiss_error(&mut self, cx: &mut Context<Self>) {
        self.state.dismiss_error();
        cx.notify();
    }

    /// Replace the pending dismissal timer with one for `ticket`
    fn schedule_banner_dismissal(&mut self, ticket: BannerTicket, cx: &mut Context<Self>) {
        self.banner_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(BANNER_TIMEOUT).await;

            let _ = this.update(cx, |view, cx| {
                if view.state.dismiss_banner(ticket) {
                    cx.notify();
                }
            });
        }));
    }
}
