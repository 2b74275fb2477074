use pathlimits_kinematics::*;

fn main() {
    let max_velocity = 30.0;
    let max_acceleration = 30.0;
    let max_angular_velocity = 2.0;
    let max_angular_acceleration = 2.0;
    let constraints_result = DriveConstraints::new(
        max_velocity,
        max_acceleration,
        max_angular_velocity,
        max_angular_acceleration,
    );

    let pose = Pose::default();
    let pose_second_deriv = Pose::default();
    let heading_derivs = [0.0, 1e-7, 0.01, 0.05, 0.1, -0.1, 0.5, 1.0, 2.0];

    match constraints_result {
        Ok(constraints) => {
            println!("Sweeping heading rate for {}", constraints);
            println!("  Point turn limits: {:?}", constraints.point_turn());
            println!();

            for heading_deriv in heading_derivs {
                let pose_deriv = Pose::new(1.0, 0.0, heading_deriv);
                let velocity =
                    constraints.maximum_velocity(&pose, &pose_deriv, &pose_second_deriv);
                let acceleration =
                    constraints.maximum_acceleration(&pose, &pose_deriv, &pose_second_deriv);
                println!(
                    "dθ/ds: {:>8.2e} -> v_max: {:>6.2}, a_max: {:>6.2}",
                    heading_deriv, velocity, acceleration
                );
            }
        }
        Err(e) => {
            eprintln!("Failed to build drive constraints: {}", e);
        }
    }
}
