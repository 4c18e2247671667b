use trusseq::{point, Force, GaussianSolver, SupportKind, Truss};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Two bars meeting at a loaded apex, pinned at both feet
    let mut truss = Truss::new();
    let left = truss.add_joint(point(0.0, 0.0));
    let right = truss.add_joint(point(4.0, 0.0));
    let apex = truss.add_joint(point(2.0, 2.0));
    truss.add_member(left, apex)?;
    truss.add_member(right, apex)?;
    truss.set_support(left, SupportKind::Pin)?;
    truss.set_support(right, SupportKind::Pin)?;
    truss.apply_force(apex, Force::new(1_000.0, 270.0))?;

    // Equilibrium of the apex: each bar pulls the apex towards its far joint
    let mut matrix = vec![vec![0.0; 2]; 2];
    let mut vector = vec![0.0; 2];
    for (column, (_, member)) in truss.members().enumerate() {
        let toward_foot = -member.direction().ok_or("member has no length")?;
        matrix[0][column] = toward_foot.x;
        matrix[1][column] = toward_foot.y;
    }
    for force in truss.forces(apex) {
        vector[0] -= force.x_component();
        vector[1] -= force.y_component();
    }

    // Solve and store the member forces
    let forces = GaussianSolver::default().solve(&matrix, &vector)?;
    truss.record_member_forces(&forces)?;

    for (_, member) in truss.members() {
        println!("{member}");
    }

    Ok(())
}
