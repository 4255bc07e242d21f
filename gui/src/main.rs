//! Employee Hub - desktop front end for the employee directory
//!
//! Built with GPUI

mod app;
mod components;
mod form_view;
mod handlers;
mod list_view;
mod telemetry;
mod theme;

use anyhow::Context as _;
use clap::Parser;
use employee_hub_core::config::DEFAULT_API_URL;
use employee_hub_core::{ApiConfig, EmployeeClient};
use gpui::{
    px, size, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;

use app::App;

#[derive(Debug, Parser)]
#[command(name = "employee-hub", version, about = "Desktop client for the Employee Hub directory")]
struct Cli {
    /// Base URL of the employee API server
    #[arg(long, env = "EMPLOYEE_HUB_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Log filter directive, e.g. `info` or `employee_hub_core=debug`
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init(&cli.log).context("failed to initialize logging")?;

    let config = ApiConfig::from_base_url(&cli.api_url)?;
    let client = EmployeeClient::new(config)?;
    tracing::info!(api = %client.config().employees_url(), "starting Employee Hub");

    Application::new().run(move |cx| {
        // Initialize gpui-component (required before using any component)
        gpui_component::init(cx);

        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(1200.), px(800.)),
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Employee Hub")),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, move |window, cx| {
            let app_entity = cx.new(|cx| App::new(client, window, cx));

            // Load the employee list once the window exists
            app_entity.update(cx, |app, cx| {
                app.initialize(cx);
            });

            // Wrap in Root for gpui-component theming support
            cx.new(|cx| Root::new(app_entity.clone(), window, cx))
        });

        if let Err(err) = opened {
            tracing::error!("failed to open window: {:#}", err);
            cx.quit();
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn api_url_flag_overrides_default() {
        let cli = Cli::try_parse_from(["employee-hub", "--api-url", "http://hr.internal:9000"])
            .unwrap();
        assert_eq!(cli.api_url, "http://hr.internal:9000");
    }
}
