use eframe::egui;
use strich_geometrie::config::AppConfig;
use strich_geometrie::ui::MilApp;

fn main() -> Result<(), eframe::Error> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "strich_geometrie=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starte Strich-Geometrie");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_title("Strich-Geometrie"),
        ..Default::default()
    };

    eframe::run_native(
        "Strich-Geometrie",
        options,
        Box::new(move |cc| {
            // Größere Schrift global einstellen
            let mut style = (*cc.egui_ctx.style()).clone();
            style.text_styles = [
                (egui::TextStyle::Heading, egui::FontId::proportional(28.0)),
                (egui::TextStyle::Body, egui::FontId::proportional(18.0)),
                (egui::TextStyle::Monospace, egui::FontId::proportional(16.0)),
                (egui::TextStyle::Button, egui::FontId::proportional(20.0)),
                (egui::TextStyle::Small, egui::FontId::proportional(14.0)),
            ].into();

            style.spacing.button_padding = egui::vec2(12.0, 8.0);
            style.spacing.item_spacing = egui::vec2(12.0, 10.0);

            cc.egui_ctx.set_style(style);

            Ok(Box::new(MilApp::new(config)))
        }),
    )
}
