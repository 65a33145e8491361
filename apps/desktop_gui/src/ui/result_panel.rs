//! Rendering of the request lifecycle into the result area. Pure over the
//! lifecycle value; holds no state of its own.

use egui::{Color32, RichText, Spinner, Ui};
use shared::protocol::{Prediction, RubricScores};

use crate::controller::lifecycle::RequestLifecycle;

const ACCEPTED_COLOR: Color32 = Color32::from_rgb(0x4c, 0xaf, 0x50);
const REJECTED_COLOR: Color32 = Color32::from_rgb(0xd0, 0x45, 0x45);

pub fn show(ui: &mut Ui, lifecycle: &RequestLifecycle) {
    match lifecycle {
        RequestLifecycle::Idle => {}
        RequestLifecycle::Loading => {
            ui.horizontal(|ui| {
                ui.add(Spinner::new());
                ui.label("Predicting acceptance...");
            });
        }
        RequestLifecycle::Failed(message) => {
            ui.colored_label(REJECTED_COLOR, message);
        }
        RequestLifecycle::Succeeded(prediction) => show_prediction(ui, prediction),
    }
}

fn show_prediction(ui: &mut Ui, prediction: &Prediction) {
    ui.heading("Prediction Result");
    ui.add_space(4.0);

    let color = if prediction.verdict.is_accepted() {
        ACCEPTED_COLOR
    } else {
        REJECTED_COLOR
    };
    ui.horizontal(|ui| {
        ui.label("This paper is likely to be:");
        ui.label(
            RichText::new(prediction.verdict.to_string())
                .strong()
                .color(color),
        );
    });

    if !prediction.feedback.is_empty() {
        ui.add_space(6.0);
        ui.strong("Why?");
        for point in &prediction.feedback {
            ui.label(format!("\u{2022} {point}"));
        }
    }

    if !prediction.scores.is_empty() {
        show_scores(ui, &prediction.scores);
    }
}

fn show_scores(ui: &mut Ui, scores: &RubricScores) {
    ui.add_space(6.0);
    egui::Grid::new("rubric_scores")
        .num_columns(2)
        .spacing([24.0, 2.0])
        .show(ui, |ui| {
            let rows = [
                ("Novelty", scores.novelty),
                ("Quality", scores.quality),
                ("Relevance", scores.relevance),
                ("Sentiment", scores.sentiment),
                ("Composite", scores.composite),
            ];
            for (label, value) in rows {
                if let Some(value) = value {
                    ui.weak(label);
                    ui.monospace(format!("{value:.2}"));
                    ui.end_row();
                }
            }
        });
}
