pub mod escaper;
pub use escaper::{Escaper, PropertyRef};

pub mod flavor;
pub use flavor::Flavor;
