//! Dialogs for the kTBS launcher
//!
//! Currently only the credentials error raised when an authentication
//! challenge cannot be answered, using libadwaita 0.7 widgets.

use libadwaita::{self as adw, prelude::*};

/// Shows the modal credentials error over the main window and invokes the
/// callback once the user dismisses it.
pub fn show_credentials_error<F>(parent: &adw::ApplicationWindow, on_dismiss: F)
where
    F: Fn() + 'static,
{
    let dialog = adw::AlertDialog::new(
        Some("Authentication required"),
        Some(
            "This kTBS requires authentication.\n\n\
             Restart the launcher with the -u/--username and \
             -p/--password options.",
        ),
    );
    dialog.add_response("close", "Close");
    dialog.set_default_response(Some("close"));
    dialog.connect_response(None, move |_, _| on_dismiss());
    dialog.present(Some(parent));
}
