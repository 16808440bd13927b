//! egui rendering for host windows

pub mod settings;
