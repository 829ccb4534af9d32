pub mod locomotion;
