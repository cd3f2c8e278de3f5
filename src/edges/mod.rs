//! Edge utilities: Sobel gradients used to score mask quality.

pub mod grad;

pub use grad::{sobel_gradients, Grad};
