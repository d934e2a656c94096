pub mod gf2;
pub mod gf256;
pub mod poly;
