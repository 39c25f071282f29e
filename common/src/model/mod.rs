pub mod config;
pub mod induction;
pub mod safety_card;
pub mod site;
pub mod submission;
