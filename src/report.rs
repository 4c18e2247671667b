use std::fmt::Write;

use trusseq::{Joint, Member};

/// Render the solution of a linear system.
///
/// Unknowns are listed in column order, followed by the largest residual so the
/// reader can judge how well the equations are satisfied.
#[must_use]
pub fn render_solution(solution: &[f64], residual: f64) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Solution of {n}x{n} system",
        n = solution.len()
    )
    .expect("writing to string cannot fail");

    for (index, value) in solution.iter().enumerate() {
        writeln!(&mut output, "  x[{index}] = {value:+.6e}")
            .expect("writing to string cannot fail");
    }

    writeln!(&mut output, "Max residual |Ax - b|: {residual:.3e}")
        .expect("writing to string cannot fail");

    output
}

/// Render the demonstration joints and the member spanning them.
#[must_use]
pub fn render_entities(joints: &[Joint], member: &Member) -> String {
    let mut output = String::new();
    for joint in joints {
        writeln!(&mut output, "{joint}").expect("writing to string cannot fail");
    }
    writeln!(&mut output, "{member}").expect("writing to string cannot fail");
    output
}
