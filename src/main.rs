//! rTimebank main entrypoint.

use rtimebank::run;

fn main() {
    println!();
    if let Err(e) = run() {
        rtimebank::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
