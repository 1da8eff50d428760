use eframe::egui;
use egui::{Align, Layout, RichText, Ui};
use log::debug;

use crate::auth::AuthContext;
use crate::router::{Navigator, Route};

pub const BRAND: &str = "FitTrack";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavItem {
    Link(&'static str, Route),
    Logout,
}

pub fn nav_items(is_authenticated: bool) -> Vec<NavItem> {
    if is_authenticated {
        vec![NavItem::Link("Dashboard", Route::Dashboard), NavItem::Logout]
    } else {
        vec![NavItem::Link("Login", Route::Login)]
    }
}

/// Ends the session and always lands on the login route afterwards.
pub fn handle_logout<A: AuthContext, N: Navigator>(auth: &mut A, nav: &mut N) {
    debug!("logout requested");
    auth.logout();
    nav.navigate(Route::Login);
}

pub fn show<A: AuthContext, N: Navigator>(ui: &mut Ui, auth: &mut A, nav: &mut N) {
    ui.horizontal(|ui| {
        if ui
            .link(RichText::new(BRAND).heading().strong())
            .clicked()
        {
            nav.navigate(Route::Dashboard);
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            // right_to_left lays out in reverse
            for item in nav_items(auth.is_authenticated()).into_iter().rev() {
                match item {
                    NavItem::Link(label, route) => {
                        if ui.link(label).clicked() {
                            nav.navigate(route);
                        }
                    }
                    NavItem::Logout => {
                        if ui.button("Logout").clicked() {
                            handle_logout(auth, nav);
                        }
                    }
                }
            }
        });
    });
}
