mod core;
mod factor;
mod matrix_math;
