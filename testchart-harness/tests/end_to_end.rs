/// End-to-end tests: generate a chart, put it through a transform or a
/// degradation, decode it, and check what survived.
use testchart::decode::cell::parse_coordinates;
use testchart::decode::decoder::{find_coordinates, CoordinateReport};
use testchart::pattern::grid;
use testchart::pattern::radial::{radial, RadialOptions};

use testchart_harness::catalog;
use testchart_harness::degrade::{self, Degradation};
use testchart_harness::transform::{self, CropRect, ScaleMode, TransformError};
use testchart_harness::verify;

fn full_frame_report() -> CoordinateReport {
    CoordinateReport {
        cells_x: Some((0, 16)),
        cells_y: Some((0, 16)),
        left: Some(0),
        top: Some(0),
        right: Some(4),
        bottom: Some(4),
    }
}

#[test]
fn full_frame_round_trip() {
    let chart = grid::grid();
    assert_eq!(find_coordinates(&chart), full_frame_report());
}

#[test]
fn every_cell_parses_exactly() {
    let chart = grid::grid();
    for cy in 0..=16u32 {
        for cx in 0..=16u32 {
            let coord = parse_coordinates(&chart, cx * 60 + 4, cy * 60 + 4);
            assert_eq!(coord.x, Some(cx as u8), "cell ({cx}, {cy})");
            assert_eq!(coord.y, Some(cy as u8), "cell ({cx}, {cy})");
        }
    }
}

#[test]
fn aligned_crop_reports_its_cell_window() {
    let chart = grid::grid();
    let cropped =
        transform::crop(&chart, CropRect { x: 120, y: 180, width: 600, height: 600 }).unwrap();
    let report = find_coordinates(&cropped);
    assert_eq!(report.cells_x, Some((2, 11)));
    assert_eq!(report.cells_y, Some((3, 12)));
    assert_eq!(report.left, Some(0));
    assert_eq!(report.top, Some(0));
    assert_eq!(report.right, Some(0));
    assert_eq!(report.bottom, Some(0));
}

#[test]
fn misaligned_crop_reports_the_offset() {
    let chart = grid::grid();
    let cropped =
        transform::crop(&chart, CropRect { x: 30, y: 30, width: 600, height: 600 }).unwrap();
    let report = find_coordinates(&cropped);
    // A crop 30 px off the cell grid shows up as 30-px edge offsets, the
    // signal a crop landed between stripe boundaries.
    assert_eq!(report.left, Some(30));
    assert_eq!(report.top, Some(30));
    assert_eq!(report.right, Some(30));
    assert_eq!(report.bottom, Some(30));
    assert_eq!(report.cells_x, Some((1, 9)));
    assert_eq!(report.cells_y, Some((1, 9)));
}

#[test]
fn crop_outside_the_chart_errors() {
    let chart = grid::grid();
    let err =
        transform::crop(&chart, CropRect { x: 1000, y: 1000, width: 100, height: 100 })
            .unwrap_err();
    assert!(matches!(err, TransformError::CropOutOfRange { .. }));
}

#[test]
fn quantization_is_rescued_by_the_majority_vote() {
    // A step-4 quantizer shifts the ×2 sub-block of odd values by a full
    // coordinate step while leaving ×4 and ×6 decodable; the vote must
    // recover every cell regardless.
    let mut chart = grid::grid();
    degrade::apply(&mut chart, &[Degradation::Quantize { step: 4 }]);
    assert_eq!(find_coordinates(&chart), full_frame_report());
}

#[test]
fn light_noise_round_trips() {
    let mut chart = grid::grid();
    degrade::apply(&mut chart, &[Degradation::UniformNoise { amplitude: 1, seed: 42 }]);
    assert_eq!(find_coordinates(&chart), full_frame_report());
}

#[test]
fn heavy_noise_still_locates_the_near_edges() {
    let mut chart = grid::grid();
    degrade::apply(&mut chart, &[Degradation::UniformNoise { amplitude: 10, seed: 42 }]);
    let report = find_coordinates(&chart);
    // The top/left stripe histograms keep a wide margin over interior bins
    // even when two thirds of the stripe pixels fall out of their band; the
    // far edges keep voting but their exact bin is no longer guaranteed.
    assert_eq!(report.top, Some(0));
    assert_eq!(report.left, Some(0));
    assert!(report.right.is_some());
    assert!(report.bottom.is_some());
}

#[test]
fn impulse_noise_leaves_most_cells_decodable() {
    let mut chart = grid::grid();
    degrade::apply(&mut chart, &[Degradation::Impulse { density: 0.2, seed: 9 }]);

    let mut correct = 0;
    let total = 17 * 17;
    for cy in 0..=16u32 {
        for cx in 0..=16u32 {
            let coord = parse_coordinates(&chart, cx * 60 + 4, cy * 60 + 4);
            if coord.x == Some(cx as u8) && coord.y == Some(cy as u8) {
                correct += 1;
            }
        }
    }
    assert!(
        correct * 100 >= total * 95,
        "only {correct}/{total} cells decoded correctly"
    );
}

#[test]
fn nearest_downscale_keeps_the_radial_symmetry() {
    let chart = radial(RadialOptions::default());
    let half = transform::scale(&chart, ScaleMode::Nearest, 512, 512).unwrap();
    assert_eq!(half.width, 512);
    assert_eq!(half.height, 512);
    // Nearest sampling at an exact 2:1 ratio picks every other source
    // pixel, so the mirror pairs survive.
    for y in (2..512u32).step_by(41) {
        for x in (2..512u32).step_by(41) {
            assert_eq!(half.rgb(x, y), chart.rgb(2 * x, 2 * y), "({x}, {y})");
            if x <= 256 && y <= 256 {
                assert_eq!(half.rgb(x, y), half.rgb(512 - x, y), "mirror ({x}, {y})");
            }
        }
    }
}

#[test]
fn box_downscale_of_the_grid_averages_cells_away() {
    // Shrinking 4:1 mixes stripes into their cells; the chart is not
    // expected to decode, only to stay structurally sane.
    let chart = grid::grid();
    let small = transform::scale(&chart, ScaleMode::Box, 256, 256).unwrap();
    assert_eq!(small.width, 256);
    assert_eq!(small.height, 256);
    assert_eq!(small.buf.len(), 256 * 256 * 4);
}

#[test]
fn verdicts_catch_a_wrong_expectation() {
    let chart = grid::grid();
    let actual = find_coordinates(&chart);
    let mut wrong = full_frame_report();
    wrong.cells_x = Some((0, 15));
    let verdict = verify::check(&actual, &wrong);
    assert!(!verdict.pass);
    assert_eq!(verdict.mismatches.len(), 1);
}

#[test]
fn all_catalog_scenarios_pass() {
    for scenario in catalog::all() {
        let result = scenario.run();
        assert!(
            result.verdict.pass,
            "{}: {:?}",
            result.name, result.verdict.mismatches
        );
    }
}
