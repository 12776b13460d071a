//! Main window for the kTBS launcher
//!
//! One window, one webview: the bundled launcher page is loaded with the
//! optional route fragment, and the WebKit signals are wired for credential
//! injection and for relaying the kTBS URL into the page.

use std::path::PathBuf;
use std::rc::Rc;

use gtk4::prelude::*;
use gtk4::{self as gtk, glib, Application, Box as GtkBox, Orientation};
use libadwaita::{self as adw, prelude::*};
use webkit6::prelude::*;
use webkit6::{AuthenticationRequest, Credential, CredentialPersistence, LoadEvent, WebView};

use crate::context::AppContext;
use crate::ui::dialogs::show_credentials_error;

/// Default window geometry, matching the launcher's historical size.
const DEFAULT_WIDTH: i32 = 1600;
const DEFAULT_HEIGHT: i32 = 1200;

/// Builds the main window, or re-presents the existing one when the
/// application is activated while a window is already open.
pub fn build_ui(app: &Application, context: &Rc<AppContext>) {
    // Initialize libadwaita
    adw::init().expect("Failed to initialize libadwaita");

    if let Some(window) = context.window.borrow().as_ref() {
        window.present();
        return;
    }
    create_main_window(app, context);
}

/// Creates the main application window around a single webview.
fn create_main_window(app: &Application, context: &Rc<AppContext>) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("kTBS Launcher")
        .default_width(DEFAULT_WIDTH)
        .default_height(DEFAULT_HEIGHT)
        .build();

    let content_box = GtkBox::new(Orientation::Vertical, 0);

    let header_bar = adw::HeaderBar::new();
    content_box.append(&header_bar);

    let webview = WebView::new();
    webview.set_hexpand(true);
    webview.set_vexpand(true);

    if context.config.debug {
        if let Some(settings) = WebViewExt::settings(&webview) {
            settings.set_enable_developer_extras(true);
        }
    }

    // Relay the kTBS URL into the page on every finished (re)load.
    let context_clone = Rc::clone(context);
    webview.connect_load_changed(move |webview, event| {
        if event == LoadEvent::Finished {
            notify_page(webview, &context_clone.config.ktbs_url);
        }
    });

    // Answer the HTTP auth challenge ourselves; returning true suppresses
    // WebKit's own credential prompt.
    let context_clone2 = Rc::clone(context);
    let window_clone = window.clone();
    webview.connect_authenticate(move |_, request| {
        handle_authenticate(&context_clone2, &window_clone, request);
        true
    });

    let uri = launcher_page_uri(context.config.route.as_deref());
    log::info!("loading launcher page {uri}");
    webview.load_uri(&uri);

    content_box.append(&webview);
    window.set_content(Some(&content_box));
    window.present();

    if context.config.debug {
        if let Some(inspector) = webview.inspector() {
            inspector.show();
        }
    }

    // Dropped again on close-request so a later activation rebuilds it.
    let context_clone3 = Rc::clone(context);
    window.connect_close_request(move |_| {
        context_clone3.window.replace(None);
        glib::Propagation::Proceed
    });

    context.window.replace(Some(window));
}

/// Supplies the stored credentials to an authentication challenge, or
/// reports the failure and closes the window when none are left.
fn handle_authenticate(
    context: &Rc<AppContext>,
    window: &adw::ApplicationWindow,
    request: &AuthenticationRequest,
) {
    match context.take_credentials() {
        Some((username, password)) => {
            log::info!("answering authentication challenge from command-line credentials");
            let credential = Credential::new(&username, &password, CredentialPersistence::ForSession);
            request.authenticate(Some(&credential));
        }
        None => {
            log::warn!("authentication challenge with no usable credentials");
            request.cancel();
            let window_clone = window.clone();
            show_credentials_error(window, move || {
                window_clone.close();
            });
        }
    }
}

/// Sends the configured URL into the page as a one-way `ktbs` event.
fn notify_page(webview: &WebView, ktbs_url: &str) {
    let script = format!(
        "window.dispatchEvent(new CustomEvent('ktbs', {{detail: {}}}));",
        js_string_literal(ktbs_url)
    );
    webview.evaluate_javascript(
        &script,
        None,
        None,
        None::<&gtk::gio::Cancellable>,
        |result| {
            if let Err(err) = result {
                log::warn!("failed to deliver the ktbs notification to the page: {err}");
            }
        },
    );
}

/// Locates the launcher page: next to the executable in an installed
/// layout, falling back to the in-repo `data/` directory for `cargo run`.
fn launcher_page_path() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let bundled = dir.join("index.html");
            if bundled.exists() {
                return bundled;
            }
        }
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("index.html")
}

/// Builds the `file://` URI for the launcher page, with the route appended
/// as a fragment for client-side navigation.
fn launcher_page_uri(route: Option<&str>) -> String {
    let path = launcher_page_path();
    let mut uri = match glib::filename_to_uri(&path, None) {
        Ok(uri) => uri.to_string(),
        Err(err) => {
            log::warn!("could not convert {} to a URI: {err}", path.display());
            format!("file://{}", path.display())
        }
    };
    if let Some(route) = route {
        uri.push('#');
        uri.push_str(route);
    }
    uri
}

/// Quotes a string as a JavaScript literal.
fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            // Line separators are valid in JSON but not in JS source.
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
