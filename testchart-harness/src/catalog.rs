/// Named verification scenarios with their expected decode reports.
use serde::Serialize;
use testchart::decode::decoder::{find_coordinates, CoordinateReport};
use testchart::pattern::grid;

use crate::degrade::{self, Degradation};
use crate::transform::{self, CropRect};
use crate::verify::{self, Verdict};

/// One generate → transform → decode scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub crop: Option<CropRect>,
    pub degradations: Vec<Degradation>,
    pub expected: CoordinateReport,
}

/// Result of running one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub name: String,
    pub expected: CoordinateReport,
    pub actual: CoordinateReport,
    pub verdict: Verdict,
}

impl Scenario {
    /// Build the chart, run the transform chain, decode, and compare.
    pub fn run(&self) -> ScenarioResult {
        let mut canvas = grid::grid();
        if let Some(rect) = self.crop {
            canvas = transform::crop(&canvas, rect).expect("catalog crops stay inside the chart");
        }
        degrade::apply(&mut canvas, &self.degradations);

        let actual = find_coordinates(&canvas);
        let verdict = verify::check(&actual, &self.expected);
        ScenarioResult {
            name: self.name.to_string(),
            expected: self.expected,
            actual,
            verdict,
        }
    }
}

fn report(
    cells_x: (u32, u32),
    cells_y: (u32, u32),
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
) -> CoordinateReport {
    CoordinateReport {
        cells_x: Some(cells_x),
        cells_y: Some(cells_y),
        left: Some(left),
        top: Some(top),
        right: Some(right),
        bottom: Some(bottom),
    }
}

/// Every scenario the harness knows about.
///
/// The 1024-px chart holds 17 fully decodable cells per axis (indices
/// 0..=16) plus a 4-px remainder past the last stripe, which shows up as
/// the `right`/`bottom` border distance of the full frame.
pub fn all() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "full-frame",
            crop: None,
            degradations: vec![],
            expected: report((0, 16), (0, 16), 0, 0, 4, 4),
        },
        Scenario {
            name: "crop-origin-aligned",
            crop: Some(CropRect { x: 0, y: 0, width: 600, height: 600 }),
            degradations: vec![],
            expected: report((0, 9), (0, 9), 0, 0, 0, 0),
        },
        Scenario {
            name: "crop-interior-aligned",
            crop: Some(CropRect { x: 120, y: 180, width: 600, height: 600 }),
            degradations: vec![],
            expected: report((2, 11), (3, 12), 0, 0, 0, 0),
        },
        Scenario {
            name: "crop-misaligned-30",
            crop: Some(CropRect { x: 30, y: 30, width: 600, height: 600 }),
            degradations: vec![],
            expected: report((1, 9), (1, 9), 30, 30, 30, 30),
        },
        Scenario {
            name: "quantize-4",
            crop: None,
            degradations: vec![Degradation::Quantize { step: 4 }],
            expected: report((0, 16), (0, 16), 0, 0, 4, 4),
        },
        Scenario {
            name: "light-noise",
            crop: None,
            degradations: vec![Degradation::UniformNoise { amplitude: 1, seed: 7 }],
            expected: report((0, 16), (0, 16), 0, 0, 4, 4),
        },
        Scenario {
            name: "crop-with-light-noise",
            crop: Some(CropRect { x: 120, y: 180, width: 600, height: 600 }),
            degradations: vec![Degradation::UniformNoise { amplitude: 1, seed: 11 }],
            expected: report((2, 11), (3, 12), 0, 0, 0, 0),
        },
    ]
}

/// Look up a scenario by exact name.
pub fn from_name(name: &str) -> Option<Scenario> {
    all().into_iter().find(|s| s.name == name)
}
