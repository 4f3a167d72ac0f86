use std::fmt::Write;

use stepwise_core::calculations::{BeamResult, CalculationOutcome, MechanicsResult};
use stepwise_core::document::{AnalysisReport, EntryStatus};

/// Render a plain-text summary of a report.
#[must_use]
pub fn render_summary(report: &AnalysisReport) -> String {
    let mut output = String::new();

    let title = if report.title.is_empty() { "(untitled)" } else { report.title.as_str() };
    let _ = writeln!(output, "═══════════════════════════════════════");
    let _ = writeln!(output, "  {}", title);
    let _ = writeln!(output, "  generated {}", report.generated.format("%Y-%m-%d %H:%M:%S UTC"));
    let _ = writeln!(output, "═══════════════════════════════════════");

    for entry in &report.entries {
        let _ = writeln!(output);
        let _ = writeln!(output, "[{}] {}", entry.calc_type, entry.label);
        match &entry.status {
            EntryStatus::Completed(CalculationOutcome::Beam(result)) => render_beam(&mut output, result),
            EntryStatus::Completed(CalculationOutcome::Mechanics(result)) => render_mechanics(&mut output, result),
            EntryStatus::Failed(error) => {
                let _ = writeln!(output, "  FAILED ({}): {}", error.error_code(), error);
            }
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "{} of {} item(s) completed",
        report.entries.len() - report.failure_count(),
        report.entries.len()
    );
    output
}

fn render_beam(output: &mut String, result: &BeamResult) {
    let _ = writeln!(output, "  M_max = {:.4} at x = {:.4}", result.max_moment, result.max_moment_position);
    let _ = writeln!(output, "  V_max = {:.4} at x = {:.4}", result.max_shear, result.max_shear_position);
    let _ = writeln!(output, "  σ_max = {:.4e}", result.max_bending_stress);
    let _ = writeln!(output, "  τ_max = {:.4e}", result.max_shear_stress);
    let _ = writeln!(output, "  I = {:.4e}, S = {:.4e}", result.moment_of_inertia, result.section_modulus);
}

fn render_mechanics(output: &mut String, result: &MechanicsResult) {
    let _ = writeln!(output, "  Δt = {}", result.time_step);
    let _ = writeln!(output, "  velocity samples:     {}", result.velocity.len());
    let _ = writeln!(output, "  acceleration samples: {}", result.acceleration.len());
    if let (Some(first), Some(last)) = (result.velocity.first(), result.velocity.last()) {
        let _ = writeln!(output, "  v: {:.4} (t={:.3}) .. {:.4} (t={:.3})", first.y, first.x, last.y, last.x);
    }
    let _ = writeln!(
        output,
        "  F_max = {:.4} at t = {:.3}",
        result.max_force.y, result.max_force.x
    );
    let _ = writeln!(output, "  W = {:.4}", result.work_done);
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepwise_core::accumulation::PointLoad;
    use stepwise_core::calculations::{BeamInput, CalculationItem, MechanicsInput};
    use stepwise_core::AnalysisDocument;

    #[test]
    fn formats_completed_and_failed_entries() {
        let mut doc = AnalysisDocument::new("Lab");
        doc.add_item(CalculationItem::Beam(BeamInput {
            label: "B-1".to_string(),
            length: 10.0,
            width: 1.0,
            height: 1.0,
            elastic_modulus: 1.0,
            loads: vec![PointLoad::new(2.0, 5.0), PointLoad::new(7.0, 3.0)],
        }));
        doc.add_item(CalculationItem::Mechanics(MechanicsInput {
            label: "Empty".to_string(),
            time_step: None,
            samples: Vec::new(),
        }));

        let text = render_summary(&doc.run());
        assert!(text.contains("[Beam] B-1"));
        assert!(text.contains("M_max = 49.0000 at x = 10.0000"));
        assert!(text.contains("FAILED (EMPTY_INPUT)"));
        assert!(text.contains("1 of 2 item(s) completed"));
    }
}
