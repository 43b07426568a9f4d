mod app;
mod audio;
mod catalog;
mod config;
mod error;
mod runtime;
mod synth;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
