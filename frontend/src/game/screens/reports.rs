//! Statistics screen: three server-computed reports rendered as charts.

use std::cell::RefCell;
use std::rc::Rc;

use eframe::Frame;
use egui::{Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Shape, Stroke, Ui, Vec2};

use blackjack_shared::{ClientMsg, ReportData, ReportKind, RequestId, Seat, StandReport};

use crate::effects::fetch_report_effect;
use crate::game::screens::{AppInterface, ScreenDef, ScreenMetadata, ScreenWidget};
use crate::game::theme::{CHART_BAR_GAP, CHART_HEIGHT, MARGIN_LG, MARGIN_SM};
use crate::store::{ConnectionStatus, ReportFetch};

const SEAT_COLORS: [Color32; 4] = [
    Color32::from_rgb(150, 150, 150),
    Color32::from_rgb(100, 150, 255),
    Color32::from_rgb(250, 160, 60),
    Color32::from_rgb(100, 200, 120),
];

const CHART_BASELINE: f32 = 20.0;

struct ReportSlot {
    kind: ReportKind,
    fetch: Rc<RefCell<ReportFetch>>,
    in_flight: Option<RequestId>,
}

pub struct ReportsScreen {
    slots: Vec<ReportSlot>,
}

impl Default for ReportsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportsScreen {
    pub fn new() -> Self {
        Self {
            slots: ReportKind::ALL
                .iter()
                .map(|&kind| ReportSlot {
                    kind,
                    fetch: Rc::new(RefCell::new(ReportFetch::NotStarted)),
                    in_flight: None,
                })
                .collect(),
        }
    }
}

/// Pair the four percentage values with their seat labels, in report order.
pub fn percentage_chart_points(values: &[f64; 4]) -> Vec<(&'static str, f64)> {
    Seat::REPORT_ORDER
        .iter()
        .map(|seat| seat.report_label())
        .zip(values.iter().copied())
        .collect()
}

/// The stand series in report order, with the color each line is drawn in.
pub fn stand_series(report: &StandReport) -> [(&'static str, &[f64], Color32); 4] {
    [
        ("Croupier", report.croupier.as_slice(), SEAT_COLORS[0]),
        ("Ai1", report.ai1.as_slice(), SEAT_COLORS[1]),
        ("Ai2", report.ai2.as_slice(), SEAT_COLORS[2]),
        ("Human", report.human.as_slice(), SEAT_COLORS[3]),
    ]
}

/// Map one series onto chart coordinates. Values are spread evenly along
/// the x axis; y grows downward on screen, so larger values sit higher.
pub fn series_points(rect: Rect, values: &[f64], max: f64) -> Vec<Pos2> {
    let span = rect.height() - CHART_BASELINE;
    let step = if values.len() > 1 {
        rect.width() / (values.len() - 1) as f32
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let frac = (v / max).clamp(0.0, 1.0) as f32;
            Pos2::new(
                rect.left() + step * i as f32,
                rect.bottom() - CHART_BASELINE - span * frac,
            )
        })
        .collect()
}

fn draw_bar_chart(ui: &mut Ui, points: &[(&'static str, f64)]) {
    let width = ui.available_width().min(480.0);
    let (response, painter) = ui.allocate_painter(Vec2::new(width, CHART_HEIGHT), Sense::hover());
    let rect = response.rect;
    let n = points.len() as f32;
    let bar_w = (rect.width() - CHART_BAR_GAP * (n + 1.0)) / n;
    let text_color = ui.visuals().text_color();

    for (i, (label, value)) in points.iter().enumerate() {
        let frac = (value / 100.0).clamp(0.0, 1.0) as f32;
        let h = (rect.height() - CHART_BASELINE - 16.0) * frac;
        let x0 = rect.left() + CHART_BAR_GAP + i as f32 * (bar_w + CHART_BAR_GAP);
        let bar = Rect::from_min_max(
            Pos2::new(x0, rect.bottom() - CHART_BASELINE - h),
            Pos2::new(x0 + bar_w, rect.bottom() - CHART_BASELINE),
        );
        painter.rect_filled(bar, 2.0, SEAT_COLORS[i % SEAT_COLORS.len()]);
        painter.text(
            Pos2::new(bar.center().x, bar.top() - 2.0),
            Align2::CENTER_BOTTOM,
            format!("{value:.1}%"),
            FontId::proportional(12.0),
            text_color,
        );
        painter.text(
            Pos2::new(bar.center().x, rect.bottom() - CHART_BASELINE / 2.0),
            Align2::CENTER_CENTER,
            *label,
            FontId::proportional(12.0),
            text_color,
        );
    }
}

fn draw_stand_chart(ui: &mut Ui, report: &StandReport) {
    let series = stand_series(report);
    let max = series
        .iter()
        .flat_map(|(_, values, _)| values.iter().copied())
        .fold(1.0f64, f64::max);

    let width = ui.available_width().min(480.0);
    let (response, painter) = ui.allocate_painter(Vec2::new(width, CHART_HEIGHT), Sense::hover());
    let rect = response.rect;

    for (_, values, color) in series {
        let points = series_points(rect, values, max);
        match points.as_slice() {
            [] => {}
            [single] => {
                painter.circle_filled(*single, 3.0, color);
            }
            _ => {
                painter.add(Shape::line(points, Stroke::new(2.0, color)));
            }
        }
    }

    ui.horizontal(|ui| {
        for (label, _, color) in stand_series(report) {
            ui.colored_label(color, label);
            ui.add_space(MARGIN_SM);
        }
    });
}

fn render_report_body(ui: &mut Ui, fetch: &ReportFetch) {
    match fetch {
        ReportFetch::NotStarted => {
            ui.label("No data yet.");
        }
        ReportFetch::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Waiting for the server...");
            });
        }
        ReportFetch::Failed(e) => {
            ui.colored_label(Color32::from_rgb(220, 80, 80), e);
        }
        ReportFetch::Loaded(ReportData::Wins(report)) => {
            draw_bar_chart(ui, &percentage_chart_points(&report.win_percentages));
        }
        ReportFetch::Loaded(ReportData::Decisions(report)) => {
            draw_bar_chart(ui, &percentage_chart_points(&report.success_percentages));
        }
        ReportFetch::Loaded(ReportData::Stands(report)) => {
            draw_stand_chart(ui, report);
        }
    }
}

impl ScreenWidget for ReportsScreen {
    fn ui(&mut self, app_interface: &mut AppInterface, ui: &mut egui::Ui, _frame: &mut Frame) {
        ui.heading("Reports");
        ui.add_space(MARGIN_SM);

        let connected =
            app_interface.app_state.connection.connection_status == ConnectionStatus::Connected;
        if !connected {
            ui.label(RichText::new("Not connected. Connect on the table screen first.").weak());
            ui.add_space(MARGIN_SM);
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for slot in &mut self.slots {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(slot.kind.title()).strong());
                        ui.add_space(MARGIN_SM);
                        let loading =
                            matches!(*slot.fetch.borrow(), ReportFetch::Loading);
                        if ui
                            .add_enabled(connected && !loading, egui::Button::new("Generate"))
                            .clicked()
                        {
                            if let Some(stale) = slot.in_flight.take() {
                                app_interface.app_state.reports.cancel(stale);
                            }
                            let id = fetch_report_effect(
                                &app_interface.app_state.reports,
                                slot.kind,
                                slot.fetch.clone(),
                            );
                            app_interface
                                .conn
                                .send_msg(&ClientMsg::generate_report(slot.kind, id));
                            slot.in_flight = Some(id);
                        }
                    });
                    ui.add_space(4.0);
                    let fetch = slot.fetch.borrow();
                    render_report_body(ui, &fetch);
                });
                ui.add_space(MARGIN_LG);
            }
        });
    }
}

impl ScreenDef for ReportsScreen {
    fn metadata() -> ScreenMetadata
    where
        Self: Sized,
    {
        ScreenMetadata {
            path: "/reports",
            display_name: "Reports",
            icon: "📊",
            description: "Win, decision and stand statistics",
            show_in_menu: true,
        }
    }

    fn create() -> Box<dyn ScreenWidget>
    where
        Self: Sized,
    {
        Box::new(Self::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_pair_with_seats_in_report_order() {
        let points = percentage_chart_points(&[10.0, 20.0, 30.0, 40.0]);
        assert_eq!(
            points,
            vec![
                ("Croupier", 10.0),
                ("Ai1", 20.0),
                ("Ai2", 30.0),
                ("Human", 40.0),
            ]
        );
    }

    #[test]
    fn stand_series_keeps_report_order() {
        let report = StandReport {
            croupier: vec![17.0],
            ai1: vec![15.0],
            ai2: vec![16.0],
            human: vec![18.0],
        };
        let labels: Vec<&str> = stand_series(&report).iter().map(|(l, _, _)| *l).collect();
        assert_eq!(labels, vec!["Croupier", "Ai1", "Ai2", "Human"]);
    }

    #[test]
    fn series_points_spread_left_to_right_and_scale_by_value() {
        let rect = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(100.0, 120.0));
        let points = series_points(rect, &[0.0, 10.0, 20.0], 20.0);
        assert_eq!(points.len(), 3);
        assert!(points[0].x < points[1].x && points[1].x < points[2].x);
        assert_eq!(points[2].x, 100.0);
        // Larger values sit higher on screen (smaller y).
        assert!(points[0].y > points[1].y && points[1].y > points[2].y);
        assert_eq!(points[0].y, 120.0 - CHART_BASELINE);
        assert_eq!(points[2].y, 0.0);
    }

    #[test]
    fn series_points_clamp_values_above_the_scale() {
        let rect = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(100.0, 120.0));
        let points = series_points(rect, &[40.0], 20.0);
        assert_eq!(points[0].y, 0.0);
    }
}
