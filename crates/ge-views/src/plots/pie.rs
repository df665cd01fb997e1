//! Pie chart mode, painted directly
//!
//! Slices are triangle fans built from arc vertices, the same way the
//! radial views paint filled segments.

use std::f64::consts::{FRAC_PI_2, TAU};

use egui::{Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2};
use ge_core::Dataset;

use crate::series::{pie_slices, slice_label, PieSlice};

pub(crate) fn show(ui: &mut Ui, dataset: &Dataset) {
    let slices = pie_slices(dataset);
    let grand_total: f64 = slices.iter().map(|slice| slice.total).sum();
    if slices.is_empty() || grand_total <= 0.0 {
        ui.centered_and_justified(|ui| {
            ui.label("No data to display");
        });
        return;
    }

    let legend_height = 28.0;
    let available = ui.available_size();
    let chart_size = Vec2::new(available.x, (available.y - legend_height).max(40.0));
    let (rect, _response) = ui.allocate_exact_size(chart_size, Sense::hover());
    let painter = ui.painter_at(rect);

    let center = rect.center();
    let radius = (rect.width().min(rect.height()) * 0.5 - 28.0).max(10.0);

    // First slice starts at twelve o'clock and the fan runs clockwise.
    let mut start_angle = -FRAC_PI_2;
    for slice in &slices {
        let sweep = (slice.total / grand_total).max(0.0) * TAU;
        if sweep > 0.0 {
            draw_slice(&painter, center, radius, start_angle, start_angle + sweep, slice.color);

            let mid = start_angle + sweep / 2.0;
            let label_radius = radius + 16.0;
            let label_pos = center
                + Vec2::new(
                    label_radius * mid.cos() as f32,
                    label_radius * mid.sin() as f32,
                );
            painter.text(
                label_pos,
                Align2::CENTER_CENTER,
                slice_label(slice, grand_total),
                FontId::proportional(12.0),
                Color32::from_gray(60),
            );
        }
        start_angle += sweep;
    }

    legend(ui, &slices);
}

fn draw_slice(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start_angle: f64,
    end_angle: f64,
    color: Color32,
) {
    let sweep_degrees = (end_angle - start_angle).to_degrees();
    let segments = (sweep_degrees.abs().ceil() as usize).max(2);

    let mut arc = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let angle = start_angle + (end_angle - start_angle) * (i as f64 / segments as f64);
        arc.push(center + Vec2::new(radius * angle.cos() as f32, radius * angle.sin() as f32));
    }

    for pair in arc.windows(2) {
        painter.add(Shape::convex_polygon(
            vec![center, pair[0], pair[1]],
            color,
            Stroke::NONE,
        ));
    }

    // White seam between adjacent slices.
    painter.line_segment([center, arc[0]], Stroke::new(1.0, Color32::WHITE));
}

fn legend(ui: &mut Ui, slices: &[PieSlice]) {
    ui.horizontal_wrapped(|ui| {
        for slice in slices {
            let (swatch, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().rect_filled(swatch, 2.0, slice.color);
            ui.label(&slice.name);
            ui.add_space(8.0);
        }
    });
}
