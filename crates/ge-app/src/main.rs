//! Graph editor application entry point

use std::time::Instant;

use anyhow::Result;
use eframe::egui::{self, Context};
use tracing::{error, info};

use ge_core::AppState;
use ge_views::ChartView;

mod export;

use export::ExportDriver;

/// Main application state
struct GraphEditorApp {
    /// Core editor state shared by every panel.
    state: AppState,

    /// The chart renderer; also records the export render target.
    chart_view: ChartView,

    /// In-flight export attempt, if any.
    export: ExportDriver,

    /// Scale factor recorded each frame for screenshot cropping.
    pixels_per_point: f32,
}

impl GraphEditorApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        ge_ui::apply_theme(&cc.egui_ctx);

        Self {
            state: AppState::new(),
            chart_view: ChartView::new(),
            export: ExportDriver::new(),
            pixels_per_point: 1.0,
        }
    }

    /// Kick off an export: precondition check, clear the surfaced error,
    /// commit any in-progress rename and release focus, then let the
    /// driver settle before the capture.
    fn begin_export(&mut self, ctx: &Context) {
        match self
            .export
            .begin(self.chart_view.render_target(), &self.state.chart.title)
        {
            Ok(()) => {
                self.state.clear_error();
                // A focus loss commits an in-progress rename; force the
                // same before the frame is captured.
                self.state.commit_rename();
                if let Some(focused) = ctx.memory(|memory| memory.focus()) {
                    ctx.memory_mut(|memory| memory.surrender_focus(focused));
                }
                ctx.request_repaint_after(export::SETTLE_DELAY);
            }
            Err(err) => {
                error!(%err, "export aborted");
                self.state
                    .set_error(format!("Export failed: {}", err.user_message()));
            }
        }
    }
}

impl eframe::App for GraphEditorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.pixels_per_point = ctx.pixels_per_point();

        if let Some(result) = self.export.take_completion() {
            match result {
                Ok(path) => info!(path = %path.display(), "exported chart"),
                Err(err) => {
                    error!(%err, "export failed");
                    self.state
                        .set_error(format!("Export failed: {}", err.user_message()));
                }
            }
        }

        let screenshot = ctx.input(|i| {
            i.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        if let Some(screenshot) = screenshot {
            self.export.on_capture(&screenshot, self.pixels_per_point);
        }

        if self.export.wants_capture(Instant::now()) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot);
        }
        if self.export.is_active() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Graph Editor");
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ge_ui::chart_type_selector(ui, &mut self.state);
                ui.separator();
                if ui.button("⬇ Export PNG").clicked() {
                    self.begin_export(ctx);
                }
                if let Some(message) = self.state.error_message.clone() {
                    ge_ui::error_banner(ui, &message);
                }
            });
            ui.add_space(4.0);
        });

        egui::SidePanel::left("data_panel")
            .resizable(true)
            .default_width(400.0)
            .width_range(250.0..=640.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.heading("Data");
                ui.add_space(8.0);
                ge_ui::data_panel(ui, &mut self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ge_ui::config_panel(ui, &mut self.state);
            ui.add_space(8.0);
            self.chart_view
                .ui(ui, &self.state.dataset, &self.state.chart);
        });
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("starting graph editor");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        default_theme: eframe::Theme::Light,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Graph Editor",
        options,
        Box::new(|cc| Box::new(GraphEditorApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {e}"))?;

    Ok(())
}
