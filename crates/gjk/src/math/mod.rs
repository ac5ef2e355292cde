pub mod vector;

pub type FloatNum = f64;
