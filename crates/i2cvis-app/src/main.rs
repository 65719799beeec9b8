slint::include_modules!();

use anyhow::Result;
use i2cvis_core::{Request, Session, Settings, SystemBus};
use std::cell::RefCell;
use std::rc::Rc;

fn main() -> Result<()> {
    pretty_env_logger::try_init_timed_custom_env("I2CVIS_LOG")?;

    let settings = match Settings::default_path() {
        Some(path) => Settings::load_or_init(&path),
        None => {
            log::warn!("no configuration directory, using default settings");
            Settings::default()
        }
    };
    let bus = SystemBus::new(settings.bus);
    log::info!("talking to {}", bus.device_path().display());

    let app = MainWindow::new()?;
    app.set_bus_label(format!("Bus: {}", bus.device_path().display()).into());

    let session = Rc::new(RefCell::new(Session::new(bus)));

    // Read button
    {
        let app_weak = app.as_weak();
        let session = session.clone();

        app.on_read_clicked(move |address| {
            let Some(app) = app_weak.upgrade() else { return };
            let result = session
                .borrow_mut()
                .handle(Request::Read { address: &address })
                .map(|_| ());
            show_outcome(&app, &session.borrow(), result);
        });
    }

    // Write button
    {
        let app_weak = app.as_weak();
        let session = session.clone();

        app.on_write_clicked(move |address, value| {
            let Some(app) = app_weak.upgrade() else { return };
            let result = session
                .borrow_mut()
                .handle(Request::Write { address: &address, value: &value })
                .map(|_| ());
            show_outcome(&app, &session.borrow(), result);
        });
    }

    app.run()?;
    Ok(())
}

fn show_outcome(app: &MainWindow, session: &Session<SystemBus>, result: i2cvis_core::Result<()>) {
    match result {
        Ok(()) => app.set_log_text(session.log().to_text().into()),
        Err(e) => {
            app.set_error_message(e.to_string().into());
            app.set_error_visible(true);
        }
    }
}
