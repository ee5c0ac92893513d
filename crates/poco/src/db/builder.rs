use super::Db;

use poco_core::{schema::default_mapper, Driver, Mapper};

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    /// Mapper to use instead of the default convention mapper
    mapper: Option<Arc<dyn Mapper>>,

    /// Escape identifiers unless a call says otherwise
    escape_identifiers: bool,
}

impl Builder {
    pub fn mapper(&mut self, mapper: Arc<dyn Mapper>) -> &mut Self {
        self.mapper = Some(mapper);
        self
    }

    pub fn escape_identifiers(&mut self, escape: bool) -> &mut Self {
        self.escape_identifiers = escape;
        self
    }

    pub fn build(&self, driver: impl Driver) -> Db {
        Db {
            driver: Arc::new(driver),
            mapper: self.mapper.clone().unwrap_or_else(default_mapper),
            escape_identifiers: self.escape_identifiers,
        }
    }
}
