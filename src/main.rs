//! kTBS Launcher
//!
//! A GTK4 desktop launcher for kTBS (kernel for Trace-Based Systems) web
//! clients. It opens the bundled launcher page in a native WebKit window,
//! answers the kTBS HTTP authentication challenge with credentials taken
//! from the command line, and relays the configured kTBS URL into the page
//! once it has loaded.
//!
//! # Usage
//! ```text
//! ktbs-launcher [options] <ktbs-url>
//! ```
//! Run with `-h` for the option list.

mod args;
mod context;
mod ui;

use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{glib, Application};

use crate::context::AppContext;

fn main() -> glib::ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match args::parse(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(args::ArgsError::Help) => {
            println!("{}", args::USAGE);
            return glib::ExitCode::SUCCESS;
        }
        Err(err) => {
            println!("{err}");
            println!("{}", args::USAGE);
            return glib::ExitCode::FAILURE;
        }
    };

    let context = Rc::new(AppContext::new(config));

    let app = Application::builder()
        .application_id("org.ktbs.launcher")
        .build();

    let context_clone = Rc::clone(&context);
    app.connect_activate(move |app| ui::build_ui(app, &context_clone));

    // GTK must not reparse the launcher's own option vocabulary.
    app.run_with_args::<&str>(&[])
}
