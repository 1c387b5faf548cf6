//! `dsf list` – print the built-in dataset catalog.

use dsf_core::catalog;

pub fn run_list() {
    println!("{:<18} {:<42} {}", "ID", "KAGGLE ID", "NAME");
    for spec in catalog::BUILTIN.iter() {
        println!("{:<18} {:<42} {}", spec.id, spec.remote_id, spec.name);
    }
}
