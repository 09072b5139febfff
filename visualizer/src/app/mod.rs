pub mod headless;
pub mod run;
