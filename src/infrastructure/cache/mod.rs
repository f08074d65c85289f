pub mod local;

use crate::config::Config;
use crate::infrastructure::cache::local::LocalCache;

pub struct Cache {
    pub local: LocalCache,
}

impl Cache {
    pub fn init(config: &Config) -> Self {
        Self {
            local: LocalCache::new(&config.cache),
        }
    }
}
