mod report;
mod system_file;

use std::error::Error;
use std::path::PathBuf;

use report::{render_entities, render_solution};
use trusseq::{GaussianSolver, Joint, Member};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Solve the file named on the command line, or fall back to the demonstration
    // system after showing the entities it stands in for.
    let input = match std::env::args_os().nth(1) {
        Some(path) => system_file::load(&PathBuf::from(path))?,
        None => {
            let a = Joint::new(1.0, 1.0);
            let b = Joint::new(2.0, 2.0);
            print!("{}", render_entities(&[a, b], &Member::new(a, b)));
            system_file::demo()
        }
    };

    let solver = GaussianSolver::new(input.config);
    let solution = input.system.solve_with(&solver)?;
    let residual = input.system.max_residual(&solution)?;

    print!("{}", render_solution(&solution, residual));

    Ok(())
}
