#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = builder_ui::run() {
        eprintln!("Builder failed: {err}");
        std::process::exit(1);
    }
}
