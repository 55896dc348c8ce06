//! Triangle Report: Multi-Case Solver Demonstration
//!
//! Solves one triangle through each of the five classical cases,
//! prints the full derived state, then times a randomized batch of
//! SSA solves (the ambiguous case) and reports the solution-count
//! split.

use std::time::Instant;

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use geo_solvers::{
    solve_aas, solve_asa, solve_sas, solve_ssa, solve_sss, Element, Triangle,
};

fn print_triangle(label: &str, t: &Triangle) {
    let [a, b, c] = t.sides();
    let [alpha, beta, gamma] = t.angles_deg();
    println!("  {label}:");
    println!("    sides    a = {a:.4}, b = {b:.4}, c = {c:.4}");
    println!("    angles   A = {alpha:.4}°, B = {beta:.4}°, C = {gamma:.4}°");
    println!(
        "    area = {:.4}, perimeter = {:.4}, R = {:.4}, r = {:.4}",
        t.area(),
        t.perimeter(),
        t.circumradius(),
        t.inradius()
    );
    let o = t.circumcenter();
    println!("    circumcenter = ({:.4}, {:.4})", o.x(), o.y());
}

fn main() {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  geo-solvers: Triangle Solver Report");
    println!("═══════════════════════════════════════════════════════════════\n");

    println!("Solving the 3-4-5 right triangle through every case:\n");

    let via_sss = match solve_sss(3.0, 4.0, 5.0) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("SSS failed: {e}");
            return;
        }
    };
    print_triangle("SSS (3, 4, 5)", &via_sss);

    let angle_a = via_sss.angle_deg(Element::A);
    let angle_b = via_sss.angle_deg(Element::B);

    if let Ok(t) = solve_sas(4.0, angle_a, 5.0) {
        print_triangle("SAS (b = 4, A, c = 5)", &t);
    }
    if let Ok(t) = solve_asa(angle_a, 5.0, angle_b) {
        print_triangle("ASA (A, c = 5, B)", &t);
    }
    if let Ok(t) = solve_aas(angle_a, angle_b, 3.0) {
        print_triangle("AAS (A, B, a = 3)", &t);
    }

    println!("\nThe ambiguous case (a = 6, b = 10, A = 30°):\n");
    match solve_ssa(6.0, 10.0, 30.0) {
        Ok(solution) => {
            print_triangle("SSA primary", &solution.primary);
            if let Some(alt) = &solution.alternate {
                print_triangle("SSA alternate", alt);
            }
        }
        Err(e) => eprintln!("SSA failed: {e}"),
    }

    // Randomized SSA batch with timing.
    let n_cases = 100_000;
    println!("\nRandomized SSA batch ({n_cases} cases)...");

    let mut rng = rand::rng();
    let side = match Uniform::new(0.5, 20.0) {
        Ok(dist) => dist,
        Err(e) => {
            eprintln!("bad distribution bounds: {e}");
            return;
        }
    };

    let mut unique = 0usize;
    let mut ambiguous = 0usize;
    let mut unsolvable = 0usize;

    let start = Instant::now();
    for _ in 0..n_cases {
        let a = side.sample(&mut rng);
        let b = side.sample(&mut rng);
        let angle = rng.random_range(1.0..179.0);
        match solve_ssa(a, b, angle) {
            Ok(s) if s.is_ambiguous() => ambiguous += 1,
            Ok(_) => unique += 1,
            Err(_) => unsolvable += 1,
        }
    }
    let elapsed = start.elapsed();

    println!("  unique:     {unique}");
    println!("  ambiguous:  {ambiguous}");
    println!("  unsolvable: {unsolvable}");
    println!(
        "  elapsed: {:.3} ms ({:.1} ns/solve)",
        elapsed.as_secs_f64() * 1e3,
        elapsed.as_nanos() as f64 / n_cases as f64
    );
}
