pub mod comparison;
pub mod fonts;
pub mod panels;
