pub mod humanize;

pub use humanize::{format_float, format_float_f32, round_to};
