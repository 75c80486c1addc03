use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use tracing::info;

use crate::config::{InterceptParameters, SimulationConfig};
use crate::constants::*;
use crate::control::propulsion::MassModel;
use crate::control::scenario::{Scenario, ScenarioRun};
use crate::errors::SimulationError;
use crate::trajectory_system::kinematics::{FlightPlan, Trajectory};

const FONT: &str = "sans-serif";
const LINE_WIDTH: u32 = 2;
const MARKER_SIZE: i32 = 6;

const TAB_BLUE: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
const TAB_ORANGE: RGBColor = RGBColor(0xff, 0x7f, 0x0e);
const DARK_GREEN: RGBColor = RGBColor(0, 128, 0);
const PURPLE: RGBColor = RGBColor(128, 0, 128);
const ORANGE: RGBColor = RGBColor(255, 165, 0);
const GRAY: RGBColor = RGBColor(128, 128, 128);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Position,
    Velocity,
    Acceleration,
}

impl Quantity {
    pub fn title(&self) -> &'static str {
        match self {
            Quantity::Position => "GBI Position",
            Quantity::Velocity => "GBI Velocity",
            Quantity::Acceleration => "GBI Acceleration",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            Quantity::Position => "Height (m)",
            Quantity::Velocity => "Velocity (m/s)",
            Quantity::Acceleration => "Acceleration (m/s²)",
        }
    }

    pub fn values<'a>(&self, trajectory: &'a Trajectory) -> &'a [f64] {
        match self {
            Quantity::Position => &trajectory.altitude,
            Quantity::Velocity => &trajectory.velocity,
            Quantity::Acceleration => &trajectory.acceleration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: Option<String>,
    pub points: Vec<(f64, f64)>,
    pub color: RGBColor,
    pub line: LineKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ChartSeries>,
    pub markers: Vec<(f64, f64)>,
}

pub fn pair_with_time(time: &[f64], values: &[f64]) -> Vec<(f64, f64)> {
    time.iter().copied().zip(values.iter().copied()).collect()
}

/// Time axis shared by an overlay: the longest run's axis, which every other run's axis prefixes.
pub fn shared_time_axis(runs: &[ScenarioRun]) -> &[f64] {
    runs.iter()
        .map(|run| run.trajectory.time.as_slice())
        .max_by_key(|time| time.len())
        .unwrap_or(&[])
}

fn series_style(
    scenario: Scenario,
    quantity: Quantity,
    plan: FlightPlan,
) -> (RGBColor, LineKind) {
    match (plan, quantity, scenario) {
        (FlightPlan::PoweredAscent, Quantity::Velocity, Scenario::VaryingMass) => {
            (DARK_GREEN, LineKind::Solid)
        }
        (FlightPlan::PoweredAscent, Quantity::Velocity, _) => (RED, LineKind::Solid),
        (FlightPlan::PoweredAscent, _, Scenario::VaryingMass) => (TAB_BLUE, LineKind::Solid),
        (FlightPlan::PoweredAscent, _, _) => (TAB_ORANGE, LineKind::Solid),
        (_, Quantity::Position, Scenario::VaryingMass) => (BLUE, LineKind::Solid),
        (_, Quantity::Position, Scenario::ConstantMass) => (DARK_GREEN, LineKind::Solid),
        (_, Quantity::Position, Scenario::VaryingMassWithDrag) => (BLUE, LineKind::Dashed),
        (_, Quantity::Position, Scenario::ConstantMassWithDrag) => (DARK_GREEN, LineKind::Dashed),
        (_, _, Scenario::VaryingMass) => (TAB_BLUE, LineKind::Solid),
        (_, _, Scenario::ConstantMass) => (TAB_ORANGE, LineKind::Solid),
        (_, _, Scenario::VaryingMassWithDrag) => (PURPLE, LineKind::Solid),
        (_, _, Scenario::ConstantMassWithDrag) => (ORANGE, LineKind::Solid),
    }
}

fn series_label(scenario: Scenario, quantity: Quantity, plan: FlightPlan) -> String {
    match plan {
        FlightPlan::FullFlight => scenario.label().to_string(),
        FlightPlan::PoweredAscent => {
            let mass = match scenario.mass_model() {
                MassModel::Varying => "Varying Mass",
                MassModel::Constant => "Constant Mass",
            };
            let name = match quantity {
                Quantity::Position => "Height",
                Quantity::Velocity => "Velocity",
                Quantity::Acceleration => "Acceleration",
            };
            format!("{} ({})", name, mass)
        }
    }
}

pub fn overlay_chart(runs: &[ScenarioRun], quantity: Quantity, plan: FlightPlan) -> ChartSpec {
    let time = shared_time_axis(runs);
    let series = runs
        .iter()
        .map(|run| {
            let (color, line) = series_style(run.scenario, quantity, plan);
            ChartSeries {
                label: Some(series_label(run.scenario, quantity, plan)),
                points: pair_with_time(time, quantity.values(&run.trajectory)),
                color,
                line,
            }
        })
        .collect();

    ChartSpec {
        title: quantity.title().to_string(),
        x_label: "Time (s)".to_string(),
        y_label: quantity.axis_label().to_string(),
        series,
        markers: Vec::new(),
    }
}

pub fn position_chart(
    runs: &[ScenarioRun],
    intercept: &InterceptParameters,
    plan: FlightPlan,
) -> ChartSpec {
    let mut chart = overlay_chart(runs, Quantity::Position, plan);
    let intercept_time = intercept.time();

    if plan == FlightPlan::FullFlight {
        chart.markers = runs
            .iter()
            .filter_map(|run| run.trajectory.burnout_point())
            .collect();
    }

    chart.series.push(ChartSeries {
        label: Some("Interception".to_string()),
        points: vec![(0.0, intercept.altitude), (intercept_time, intercept.altitude)],
        color: RED,
        line: LineKind::Dashed,
    });
    chart.series.push(ChartSeries {
        label: Some("Interception Time".to_string()),
        points: vec![(intercept_time, 0.0), (intercept_time, intercept.altitude)],
        color: RED,
        line: LineKind::Dotted,
    });

    chart
}

pub fn acceleration_chart(runs: &[ScenarioRun], plan: FlightPlan) -> ChartSpec {
    let mut chart = overlay_chart(runs, Quantity::Acceleration, plan);
    let end = shared_time_axis(runs).last().copied().unwrap_or(0.0);

    chart.series.push(ChartSeries {
        label: None,
        points: vec![(0.0, 0.0), (end, 0.0)],
        color: GRAY,
        line: LineKind::Dashed,
    });
    chart
}

pub fn chart_set(
    runs: &[ScenarioRun],
    config: &SimulationConfig,
) -> Vec<(&'static str, ChartSpec)> {
    let plan = config.run.flight_plan;
    match plan {
        FlightPlan::FullFlight => vec![
            (POSITION_CHART_FILE, position_chart(runs, &config.intercept, plan)),
            (VELOCITY_CHART_FILE, overlay_chart(runs, Quantity::Velocity, plan)),
            (ACCELERATION_CHART_FILE, acceleration_chart(runs, plan)),
        ],
        FlightPlan::PoweredAscent => vec![
            (ASCENT_POSITION_CHART_FILE, position_chart(runs, &config.intercept, plan)),
            (ASCENT_VELOCITY_CHART_FILE, overlay_chart(runs, Quantity::Velocity, plan)),
        ],
    }
}

pub fn axis_bounds(chart: &ChartSpec) -> (Range<f64>, Range<f64>) {
    let points = chart
        .series
        .iter()
        .flat_map(|series| series.points.iter().copied())
        .chain(chart.markers.iter().copied())
        .filter(|(x, y)| x.is_finite() && y.is_finite());

    let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for (x, y) in points {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    (pad_range(x_min, x_max), pad_range(y_min, y_max))
}

fn pad_range(min: f64, max: f64) -> Range<f64> {
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    if span <= 0.0 {
        return (min - 1.0)..(max + 1.0);
    }
    (min - 0.05 * span)..(max + 0.05 * span)
}

// Two horizontal pixel spans, relative to the legend anchor, matching the line pattern.
fn legend_segments(line: LineKind) -> [(i32, i32); 2] {
    match line {
        LineKind::Solid => [(0, 10), (10, 20)],
        LineKind::Dashed => [(0, 8), (12, 20)],
        LineKind::Dotted => [(0, 3), (8, 11)],
    }
}

fn plot_error<E: std::fmt::Display>(error: E) -> SimulationError {
    SimulationError::PlotError(error.to_string())
}

pub fn render_chart(
    path: &Path,
    chart: &ChartSpec,
    size: (u32, u32),
) -> Result<(), SimulationError> {
    let (x_range, y_range) = axis_bounds(chart);

    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut context = ChartBuilder::on(&root)
        .caption(&chart.title, (FONT, 28).into_font())
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(x_range, y_range)
        .map_err(plot_error)?;

    context
        .configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .axis_desc_style((FONT, 18).into_font())
        .draw()
        .map_err(plot_error)?;

    for series in &chart.series {
        let style = ShapeStyle::from(&series.color).stroke_width(LINE_WIDTH);
        let points = series.points.clone();
        let annotation = match series.line {
            LineKind::Solid => context.draw_series(LineSeries::new(points, style)),
            LineKind::Dashed => context.draw_series(DashedLineSeries::new(points, 12, 6, style)),
            LineKind::Dotted => context.draw_series(DashedLineSeries::new(points, 2, 4, style)),
        }
        .map_err(plot_error)?;

        if let Some(label) = &series.label {
            let [first, second] = legend_segments(series.line);
            annotation.label(label.as_str()).legend(move |(x, y)| {
                EmptyElement::at((x, y))
                    + PathElement::new(vec![(first.0, 0), (first.1, 0)], style)
                    + PathElement::new(vec![(second.0, 0), (second.1, 0)], style)
            });
        }
    }

    if !chart.markers.is_empty() {
        let style = ShapeStyle::from(&RED).stroke_width(LINE_WIDTH);
        context
            .draw_series(
                chart
                    .markers
                    .iter()
                    .map(|&point| Cross::new(point, MARKER_SIZE, style)),
            )
            .map_err(plot_error)?
            .label("Burnout")
            .legend(move |(x, y)| Cross::new((x + 10, y), MARKER_SIZE, style));
    }

    context
        .configure_series_labels()
        .label_font((FONT, 16).into_font())
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

pub fn write_charts(
    runs: &[ScenarioRun],
    config: &SimulationConfig,
) -> Result<Vec<PathBuf>, SimulationError> {
    let directory = &config.output.directory;
    std::fs::create_dir_all(directory)?;

    let size = (config.output.width, config.output.height);
    let mut written = Vec::new();
    for (file_name, chart) in chart_set(runs, config) {
        let path = directory.join(file_name);
        render_chart(&path, &chart, size)?;
        info!(path = %path.display(), "chart written");
        written.push(path);
    }
    Ok(written)
}
