pub mod document_viewer;
pub mod induction;
pub mod signature;
