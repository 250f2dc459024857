use ariadne::Source;
use steps_simplify::{
    change::ChangeRecord,
    expr::Expr,
    simplify::{explain, try_simplify, Outcome},
};

/// Prints a step and its substeps, indented by depth.
fn print_step(record: &ChangeRecord, depth: usize) {
    println!(
        "{:indent$}{}: {}  =>  {}",
        "",
        record.change_type.description(),
        record.old_node,
        record.new_node,
        indent = depth * 4,
    );
    for substep in &record.substeps {
        print_step(substep, depth + 1);
    }
}

fn main() {
    env_logger::init();

    let x = || Expr::symbol("x");
    let samples = vec![
        Expr::constant(2) * x() + Expr::constant(4) * Expr::pow(x(), Expr::constant(2))
            + Expr::constant(5) * x(),
        Expr::div(Expr::constant(2), Expr::constant(3)) + Expr::div(Expr::constant(5), Expr::constant(6)),
        Expr::pow(x(), Expr::constant(0)),
        Expr::constant(2) * Expr::div(x(), Expr::div(Expr::constant(3), Expr::constant(4))),
        Expr::constant(5) + Expr::constant(0),
        x() + Expr::symbol("y"),
        Expr::constant(2) * Expr::paren(x() + Expr::constant(3)) + x(),
        Expr::call("sqrt", vec![Expr::div(Expr::constant(4), Expr::constant(9))]),
        Expr::add(vec![x()]),
    ];

    for expr in samples {
        println!("{expr}");
        let explained = explain(&expr);
        match explained.outcome {
            Outcome::AlreadySimplified => println!("    already simplified"),
            Outcome::Simplified => {
                for record in &explained.steps {
                    print_step(record, 1);
                }
                println!("    = {}", explained.result());
            },
            Outcome::GaveUp => {
                // explain() only logs the error; get it back to show the report
                if let Err(err) = try_simplify(&expr) {
                    let src = expr.to_string();
                    err.build_report("expr").eprint(("expr", Source::from(&src))).ok();
                }
            },
        }
        println!();
    }
}
