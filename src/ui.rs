use crate::config::AppConfig;
use crate::geometry::{mils_to_degree, IntersectionFallback, Point};
use crate::scene::{self, Scene, SceneParams};
use crate::view::{self, format_with_comma, EguiCanvas, ScreenTransform};
use eframe::egui;
use egui::Color32;
use std::error::Error;
use std::path::PathBuf;

pub struct MilApp {
    config: AppConfig,
    scene: Option<Scene>,
    error_message: Option<String>,
    status: Option<String>,

    // Eingabefelder
    input_origin_x: String,
    input_origin_y: String,
    input_length: String,
    input_angle_left: String,
    input_angle_right: String,
    input_offset: String,
    input_scale: String,
    input_eps: String,
    legacy_fallback: bool,

    show_help: bool,
}

impl MilApp {
    pub fn new(config: AppConfig) -> Self {
        let p = config.scene;
        let mut app = Self {
            input_origin_x: format_with_comma(p.origin.x, 1),
            input_origin_y: format_with_comma(p.origin.y, 1),
            input_length: format_with_comma(p.length, 1),
            input_angle_left: format_with_comma(p.angle_left, 0),
            input_angle_right: format_with_comma(p.angle_right, 0),
            input_offset: format_with_comma(p.offset, 1),
            input_scale: format_with_comma(p.scale, 2),
            input_eps: config.intersect.eps_parallel.to_string(),
            legacy_fallback: p.fallback == IntersectionFallback::Origin,
            config,
            scene: None,
            error_message: None,
            status: None,
            show_help: false,
        };
        app.calculate_scene();
        app
    }
}

/// Liest eine Zahl, Komma oder Punkt als Dezimaltrenner
fn parse_input(text: &str, name: &str) -> Result<f64, String> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| format!("❌ {}: '{}' ist keine gültige Zahl", name, text.trim()))
}

fn angle_text(mils: f64) -> String {
    format!(
        "{} Strich ({}°)",
        format_with_comma(mils, 0),
        format_with_comma(mils_to_degree(mils), 2)
    )
}

fn labeled_input(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(value).desired_width(120.0));
    });
}

impl eframe::App for MilApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Linkes Panel für Eingaben
        egui::SidePanel::left("input_panel")
            .min_width(360.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui.heading("🎯 Strich-Geometrie");
                        ui.separator();

                        egui::CollapsingHeader::new("📏 Grundlinie")
                            .default_open(true)
                            .show(ui, |ui| {
                                labeled_input(ui, "Start X:", &mut self.input_origin_x);
                                labeled_input(ui, "Start Y:", &mut self.input_origin_y);
                                labeled_input(ui, "Länge:", &mut self.input_length);
                                labeled_input(ui, "Seitl. Abstand:", &mut self.input_offset);
                                labeled_input(ui, "Maßstab:", &mut self.input_scale);
                            });

                        egui::CollapsingHeader::new("📐 Winkel (in Strich)")
                            .default_open(true)
                            .show(ui, |ui| {
                                labeled_input(ui, "Links:", &mut self.input_angle_left);
                                labeled_input(ui, "Rechts:", &mut self.input_angle_right);
                            });

                        egui::CollapsingHeader::new("⚙ Schnittpunkte")
                            .default_open(false)
                            .show(ui, |ui| {
                                labeled_input(ui, "Toleranz parallel:", &mut self.input_eps);
                                ui.checkbox(
                                    &mut self.legacy_fallback,
                                    "Ohne Schnittpunkt auf (0, 0) setzen",
                                );
                            });

                        ui.add_space(15.0);

                        let calc_button = egui::Button::new(egui::RichText::new("🔢 Berechnen").size(22.0))
                            .min_size(egui::vec2(250.0, 45.0))
                            .fill(Color32::from_rgb(50, 120, 200));
                        if ui.add(calc_button).clicked() {
                            self.calculate_scene();
                        }

                        if let Some(scene) = &self.scene {
                            ui.add_space(15.0);
                            ui.separator();
                            ui.group(|ui| {
                                ui.label(egui::RichText::new("Ergebnis:").strong());
                                ui.label(format!("  Links: {}", angle_text(self.config.scene.angle_left)));
                                ui.label(format!("  Rechts: {}", angle_text(self.config.scene.angle_right)));
                                ui.label(format!("  Ablage links: {}", format_with_comma(scene.width_left, 2)));
                                ui.label(format!("  Ablage rechts: {}", format_with_comma(scene.width_right, 2)));
                                ui.label(format!(
                                    "  Strahl links: {}",
                                    format_with_comma(scene.left.length(), 2)
                                ));
                                ui.label(format!(
                                    "  Strahl rechts: {}",
                                    format_with_comma(scene.right.length(), 2)
                                ));
                            });
                        }

                        ui.add_space(20.0);
                        ui.separator();

                        if ui.button("💾 Einstellungen speichern").clicked() {
                            self.status = Some(match self.config.save() {
                                Ok(path) => format!("Gespeichert: {}", path.display()),
                                Err(e) => format!("❌ {e}"),
                            });
                        }
                        if ui.button("📸 Screenshot erstellen").clicked() {
                            self.status = Some(match take_screenshot() {
                                Ok(path) => format!("Screenshot: {}", path.display()),
                                Err(e) => {
                                    tracing::warn!("Screenshot fehlgeschlagen: {e}");
                                    format!("❌ Screenshot fehlgeschlagen: {e}")
                                }
                            });
                        }
                        if ui.button("❓ Hilfe").clicked() {
                            self.show_help = !self.show_help;
                        }
                        if let Some(status) = &self.status {
                            ui.label(status);
                        }
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.scene.is_some() {
                self.draw_scene(ui);
            } else {
                ui.vertical_centered(|ui| {
                    ui.add_space(250.0);
                    ui.heading("👈 Bitte Werte eingeben und 'Berechnen' klicken");
                });
            }
        });

        if let Some(error_text) = self.error_message.clone() {
            egui::Window::new("⚠️ Fehler bei der Berechnung")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(Color32::from_rgb(200, 50, 50), &error_text);
                    ui.add_space(10.0);
                    if ui.button("OK - Eingaben überprüfen").clicked() {
                        self.error_message = None;
                    }
                });
        }

        if self.show_help {
            egui::Window::new("❓ Hilfe")
                .collapsible(false)
                .open(&mut self.show_help)
                .show(ctx, |ui| {
                    ui.label("6400 Strich = 360°, 1600 Strich = 90°");
                    ui.label("Die Strahlen werden um den Startpunkt gedreht");
                    ui.label("und an den parallelen Begrenzungen gekappt.");
                    ui.add_space(5.0);
                    ui.label("Links: -1599 bis 0 Strich, rechts: 0 bis 1599 Strich");
                    ui.label("Der Maßstab skaliert um den Koordinatenursprung.");
                });
        }
    }
}

impl MilApp {
    fn read_params(&self) -> Result<(SceneParams, f64), String> {
        let params = SceneParams {
            origin: Point::new(
                parse_input(&self.input_origin_x, "Start X")?,
                parse_input(&self.input_origin_y, "Start Y")?,
            ),
            length: parse_input(&self.input_length, "Länge")?,
            angle_left: parse_input(&self.input_angle_left, "Winkel links")?,
            angle_right: parse_input(&self.input_angle_right, "Winkel rechts")?,
            offset: parse_input(&self.input_offset, "Seitlicher Abstand")?,
            scale: parse_input(&self.input_scale, "Maßstab")?,
            fallback: if self.legacy_fallback {
                IntersectionFallback::Origin
            } else {
                IntersectionFallback::Reject
            },
        };
        let eps = parse_input(&self.input_eps, "Toleranz")?;
        Ok((params, eps))
    }

    fn calculate_scene(&mut self) {
        self.error_message = None;

        let (params, eps) = match self.read_params() {
            Ok(values) => values,
            Err(e) => {
                self.error_message = Some(e);
                self.scene = None;
                return;
            }
        };
        self.config.scene = params;
        self.config.intersect.eps_parallel = eps;

        match scene::build(&params, &self.config.intersect) {
            Ok(scene) => self.scene = Some(scene),
            Err(e) => {
                tracing::warn!("Szene nicht berechenbar: {e}");
                self.error_message = Some(format!("❌ {e}"));
                self.scene = None;
            }
        }
    }

    fn draw_scene(&self, ui: &mut egui::Ui) {
        let Some(scene) = &self.scene else {
            return;
        };
        let style = &self.config.style;

        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let points = scene.points();
        let transform = ScreenTransform::fit(points.iter(), response.rect, 120.0);
        let mut canvas = EguiCanvas::new(&painter, transform);

        view::draw_line(&mut canvas, &scene.boundary_left, style.boundary_color, style.line_width * 0.5);
        view::draw_line(&mut canvas, &scene.boundary_right, style.boundary_color, style.line_width * 0.5);
        view::draw_line(&mut canvas, &scene.base, style.base_color, style.line_width);

        for (ray, width) in [(&scene.left, scene.width_left), (&scene.right, scene.width_right)] {
            view::draw_angle_sector(&mut canvas, ray, style.sector_radius, style.sector_color);
            view::draw_line(&mut canvas, ray, style.ray_color, style.line_width);
            if let Some(angle) = ray.angle {
                view::draw_label(
                    &mut canvas,
                    ray,
                    [0.0, -style.font_size],
                    style.font_size,
                    style.text_color,
                    &angle_text(angle),
                );
            }
            view::draw_label(
                &mut canvas,
                ray,
                [0.0, style.font_size * 0.2],
                style.font_size * 0.8,
                style.boundary_color,
                &format!("Ablage {}", format_with_comma(width, 1)),
            );
        }

        view::draw_label(
            &mut canvas,
            &scene.base,
            [0.0, -style.font_size],
            style.font_size,
            style.text_color,
            &format_with_comma(scene.base.length(), 1),
        );
    }
}

/// Bildschirmfoto des Hauptbildschirms auf den Desktop
fn take_screenshot() -> Result<PathBuf, Box<dyn Error>> {
    let screens = screenshots::Screen::all()?;
    let screen = screens.first().ok_or("kein Bildschirm gefunden")?;
    let image = screen.capture()?;

    let desktop = dirs::desktop_dir().unwrap_or_else(|| PathBuf::from("."));
    let filename = desktop.join(format!(
        "strich_screenshot_{}.png",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ));
    image.save(&filename)?;
    tracing::info!(path = %filename.display(), "Screenshot gespeichert");
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_accepts_comma() {
        assert_eq!(parse_input("12,5", "x"), Ok(12.5));
        assert_eq!(parse_input(" 3.25 ", "x"), Ok(3.25));
        assert!(parse_input("abc", "x").is_err());
        assert!(parse_input("", "x").is_err());
    }

    #[test]
    fn test_angle_text() {
        assert_eq!(angle_text(1600.0), "1600 Strich (90,00°)");
    }

    #[test]
    fn test_app_builds_default_scene() {
        let app = MilApp::new(AppConfig::default());
        assert!(app.scene.is_some());
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_invalid_input_reports_error() {
        let mut app = MilApp::new(AppConfig::default());
        app.input_length = "0".to_string();
        app.calculate_scene();
        assert!(app.scene.is_none());
        assert!(app.error_message.is_some());
    }

    #[test]
    fn test_legacy_fallback_checkbox() {
        let mut app = MilApp::new(AppConfig::default());
        app.legacy_fallback = true;
        app.input_eps = "1e12".to_string();
        app.calculate_scene();
        let scene = app.scene.expect("Szene mit Fallback");
        assert_eq!(scene.left.end, Point::ORIGIN);
    }
}
