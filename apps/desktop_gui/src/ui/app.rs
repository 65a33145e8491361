//! App shell: upload form, submission flow, and the frame loop.

use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::lifecycle::RequestLifecycle;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::result_panel;
use crate::ui::upload::{self, PaperSelection};

const NO_FILE_WARNING: &str = "Please upload a PDF file";
const WARNING_COLOR: egui::Color32 = egui::Color32::from_rgb(0xc9, 0x84, 0x3f);

pub struct ReadReviewApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    selection: Option<PaperSelection>,
    lifecycle: RequestLifecycle,
    drop_highlight: bool,
    status: String,
}

impl ReadReviewApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            selection: None,
            lifecycle: RequestLifecycle::Idle,
            drop_highlight: false,
            status: String::new(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::PredictionReady(prediction) => {
                    if !self.lifecycle.complete(Ok(prediction)) {
                        tracing::warn!("dropping prediction event with no submission in flight");
                    }
                }
                UiEvent::PredictionFailed(message) => {
                    if !self.lifecycle.complete(Err(message)) {
                        tracing::warn!("dropping failure event with no submission in flight");
                    }
                }
                UiEvent::WorkerUnavailable(message) => {
                    self.status = message;
                }
            }
        }
    }

    fn handle_file_drops(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|input| {
            (
                !input.raw.hovered_files.is_empty(),
                input.raw.dropped_files.clone(),
            )
        });
        self.drop_highlight = hovering;
        for file in dropped {
            if let Some(path) = file.path {
                upload::select_candidate(&mut self.selection, &path);
            }
        }
    }

    fn pick_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .pick_file()
        {
            upload::select_candidate(&mut self.selection, &path);
        }
    }

    fn submit(&mut self) {
        let Some(selection) = self.selection.clone() else {
            self.status = NO_FILE_WARNING.to_string();
            return;
        };
        if !self.lifecycle.begin_submission() {
            return;
        }
        self.status.clear();
        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::Predict {
                path: selection.path().to_path_buf(),
            },
            &mut self.status,
        );
        if !queued {
            // No request went out; settle instead of spinning forever.
            let message = self.status.clone();
            self.lifecycle.complete(Err(message));
        }
    }

    fn show_upload_card(&mut self, ui: &mut egui::Ui) {
        egui::Frame::NONE
            .fill(ui.visuals().panel_fill)
            .corner_radius(14.0)
            .stroke(egui::Stroke::new(
                1.0,
                ui.visuals().widgets.noninteractive.bg_stroke.color,
            ))
            .inner_margin(egui::Margin::symmetric(20, 18))
            .show(ui, |ui| {
                ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);

                ui.vertical_centered(|ui| {
                    ui.heading("ReadReview");
                    ui.weak("Predict your research paper's acceptance with AI");
                });

                ui.add_space(6.0);
                ui.separator();
                ui.add_space(6.0);

                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("SUBMIT. ANALYZE. IMPROVE.").strong().size(18.0));
                    ui.weak(
                        "Simply upload your document, and our AI will predict its acceptance \
                         likelihood based on key conference criteria.",
                    );
                });

                ui.add_space(4.0);
                self.show_drop_area(ui);

                if let Some(selection) = &self.selection {
                    ui.vertical_centered(|ui| {
                        ui.label(format!("\u{1f4c4} {}", selection.display_name()));
                    });
                }

                let submit = egui::Button::new(
                    egui::RichText::new("Predict Acceptance").strong().size(16.0),
                )
                .min_size(egui::vec2(ui.available_width(), 36.0));
                if ui.add(submit).clicked() {
                    self.submit();
                }

                if !self.status.is_empty() {
                    ui.colored_label(WARNING_COLOR, &self.status);
                }

                ui.add_space(4.0);
                ui.separator();
                result_panel::show(ui, &self.lifecycle);
            });
    }

    fn show_drop_area(&mut self, ui: &mut egui::Ui) {
        let (stroke, fill) = if self.drop_highlight {
            (
                egui::Stroke::new(1.5, ui.visuals().selection.bg_fill),
                ui.visuals().selection.bg_fill.gamma_multiply(0.15),
            )
        } else {
            (
                egui::Stroke::new(
                    1.0,
                    ui.visuals().widgets.noninteractive.bg_stroke.color,
                ),
                ui.visuals().faint_bg_color.gamma_multiply(0.55),
            )
        };

        egui::Frame::NONE
            .fill(fill)
            .corner_radius(12.0)
            .stroke(stroke)
            .inner_margin(egui::Margin::symmetric(14, 18))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("\u{2b06}").size(22.0));
                    if ui.button("Click to upload").clicked() {
                        self.pick_file();
                    }
                    ui.weak("or drag and drop");
                });
            });
    }
}

impl eframe::App for ReadReviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.handle_file_drops(ctx);

        // Keep frames coming while a request is in flight so the spinner
        // animates and the terminal event is drained promptly.
        if self.lifecycle.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.available_size();
            let card_width = avail.x.clamp(440.0, 600.0);
            ui.add_space((avail.y * 0.08).clamp(12.0, 60.0));
            ui.vertical_centered(|ui| {
                ui.set_width(card_width);
                self.show_upload_card(ui);
            });
        });
    }
}
