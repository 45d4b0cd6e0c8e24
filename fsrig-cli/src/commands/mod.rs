pub mod facts;
pub mod plan;
pub mod run;
