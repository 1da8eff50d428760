use std::fs;
use std::sync::Arc;

use eframe::{App, CreationContext, Frame, egui};
use egui::{Align, Layout, RichText};
use env_logger::Env;
use log::{info, warn};

mod auth;
mod config;
mod dashboard;
mod draft;
mod models;
mod navbar;
mod router;
mod theme;
mod workout_log;

use auth::{AuthContext, SessionAuth};
use config::AppConfig;
use dashboard::Dashboard;
use router::{Navigator, Route, Router};
use workout_log::WorkoutLog;

const DEFAULT_USER: &str = "athlete";

fn main() -> Result<(), eframe::Error> {
    let path = config::config_path();
    let loaded = config::load_from(&path);
    let log_level = match &loaded {
        Ok(Some(config)) => config.log_level.clone(),
        _ => AppConfig::default().log_level,
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = match loaded {
        Ok(Some(config)) => {
            info!("config loaded from {}", path.display());
            config
        }
        Ok(None) => {
            info!("no config at {}, using defaults", path.display());
            AppConfig::default()
        }
        Err(e) => {
            warn!("{}; using defaults", e);
            AppConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(navbar::BRAND)
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        navbar::BRAND,
        options,
        Box::new(move |cc| Ok(Box::new(FitTrackApp::new(cc, config)))),
    )
}

fn install_font(ctx: &egui::Context, font_path: &str) {
    let font_data = match fs::read(font_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("failed to load font {}: {}", font_path, e);
            return;
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        "custom".to_owned(),
        Arc::from(egui::FontData::from_owned(font_data)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .insert(0, "custom".to_owned());
    }
    ctx.set_fonts(fonts);
}

struct FitTrackApp {
    auth: SessionAuth,
    router: Router,
    dashboard: Dashboard,
}

impl FitTrackApp {
    fn new(cc: &CreationContext, config: AppConfig) -> Self {
        cc.egui_ctx.set_visuals(theme::visuals(config.theme));
        if let Some(font_path) = &config.font_path {
            install_font(&cc.egui_ctx, font_path);
        }

        let mut auth = SessionAuth::default();
        if let Some(user) = config.user {
            auth.login(user);
        }

        FitTrackApp {
            auth,
            router: Router::new(config.start_route),
            dashboard: Dashboard::new(WorkoutLog::new()),
        }
    }

    fn show_login(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.add_space(80.0);
                ui.label(RichText::new("Welcome to FitTrack").heading().size(32.0).strong());
                ui.add_space(10.0);
                ui.label("Sign in to log your workouts.");
                ui.add_space(20.0);
                if ui.button(RichText::new("Login").size(20.0)).clicked() {
                    self.auth.login(DEFAULT_USER);
                    self.router.navigate(Route::Dashboard);
                }
            });
        });
    }
}

impl App for FitTrackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("navbar").show(ctx, |ui| {
            ui.add_space(6.0);
            navbar::show(ui, &mut self.auth, &mut self.router);
            ui.add_space(6.0);
        });

        match self.router.current() {
            Route::Dashboard if self.auth.is_authenticated() => self.dashboard.show(ctx),
            _ => self.show_login(ctx),
        }
    }
}
