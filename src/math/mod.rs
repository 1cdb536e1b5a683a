mod ray;

pub use ray::{intersect_sphere, Ray, T_MIN};
