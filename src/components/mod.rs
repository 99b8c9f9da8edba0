pub mod globe;
