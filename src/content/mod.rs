mod load;
mod records;

pub use load::load_content;
pub use records::{Accent, Contact, PortfolioContent, Project, Skill};
