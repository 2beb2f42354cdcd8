pub mod export;
pub mod organisms;
pub mod run;
