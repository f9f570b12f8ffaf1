pub mod a001_tutorial;
